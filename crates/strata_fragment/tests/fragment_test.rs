//! Tests for fragment construction and computed properties.

use chrono::{TimeZone, Utc};
use strata_error::{StrataErrorKind, ValidationErrorKind};
use strata_fragment::Fragment;

fn validation_kind(err: &strata_error::StrataError) -> Option<&ValidationErrorKind> {
    match err.kind() {
        StrataErrorKind::Validation(e) => Some(&e.kind),
        _ => None,
    }
}

#[test]
fn test_new_fragment_defaults() {
    let fragment = Fragment::new("owner-1", "text/plain", 0).unwrap();
    assert!(!fragment.id().is_empty());
    assert_eq!(fragment.owner_id(), "owner-1");
    assert_eq!(fragment.content_type(), "text/plain");
    assert_eq!(*fragment.size(), 0);
    assert_eq!(fragment.created(), fragment.updated());
}

#[test]
fn test_ids_are_unique() {
    let a = Fragment::new("owner-1", "text/plain", 0).unwrap();
    let b = Fragment::new("owner-1", "text/plain", 0).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_builder_keeps_supplied_fields() {
    let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let updated = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
    let fragment = Fragment::builder()
        .id("fixed-id")
        .owner_id("owner-1")
        .content_type("application/json")
        .size(42)
        .created(created)
        .updated(updated)
        .build()
        .unwrap();

    assert_eq!(fragment.id(), "fixed-id");
    assert_eq!(*fragment.size(), 42);
    assert_eq!(*fragment.created(), created);
    assert_eq!(*fragment.updated(), updated);
}

#[test]
fn test_missing_owner_is_rejected() {
    let err = Fragment::new("", "text/plain", 0).unwrap_err();
    assert_eq!(
        validation_kind(&err),
        Some(&ValidationErrorKind::MissingField("ownerId"))
    );
}

#[test]
fn test_missing_type_is_rejected() {
    let err = Fragment::new("owner-1", "", 0).unwrap_err();
    assert_eq!(
        validation_kind(&err),
        Some(&ValidationErrorKind::MissingField("type"))
    );
}

#[test]
fn test_missing_size_is_rejected() {
    let err = Fragment::builder()
        .owner_id("owner-1")
        .content_type("text/plain")
        .build()
        .unwrap_err();
    assert_eq!(
        validation_kind(&err),
        Some(&ValidationErrorKind::MissingField("size"))
    );
}

#[test]
fn test_unsupported_types_never_construct() {
    for content_type in ["application/msword", "audio/mpeg", "text", "TEXT/PLAIN"] {
        let err = Fragment::new("owner-1", content_type, 0).unwrap_err();
        assert!(
            matches!(
                validation_kind(&err),
                Some(ValidationErrorKind::UnsupportedType(_))
            ),
            "{content_type} should be unsupported"
        );
        assert!(err.is_client_error());
    }
}

#[test]
fn test_charset_parameter_is_kept_but_ignored() {
    let fragment = Fragment::new("owner-1", "text/html; charset=utf-8", 0).unwrap();
    assert_eq!(fragment.content_type(), "text/html; charset=utf-8");
    assert_eq!(fragment.mime_type(), "text/html");
    assert!(fragment.is_text());
    assert_eq!(fragment.formats(), &["html", "txt"]);
}

#[test]
fn test_is_supported_type() {
    assert!(Fragment::is_supported_type("image/webp"));
    assert!(Fragment::is_supported_type("application/json; charset=utf-8"));
    assert!(!Fragment::is_supported_type("application/xml"));
    assert!(!Fragment::is_supported_type(";;;"));
}

#[test]
fn test_image_is_not_text() {
    let fragment = Fragment::new("owner-1", "image/png", 10).unwrap();
    assert!(!fragment.is_text());
    assert!(fragment.can_convert_to("jpg"));
    assert!(fragment.can_convert_to(".avif"));
    assert!(!fragment.can_convert_to("txt"));
}

#[test]
fn test_can_convert_to() {
    let markdown = Fragment::new("owner-1", "text/markdown", 0).unwrap();
    assert!(markdown.can_convert_to("html"));
    assert!(markdown.can_convert_to("md"));
    assert!(markdown.can_convert_to("txt"));
    assert!(!markdown.can_convert_to("json"));

    let plain = Fragment::new("owner-1", "text/plain", 0).unwrap();
    assert!(plain.can_convert_to("txt"));
    assert!(!plain.can_convert_to("png"));
    assert!(!plain.can_convert_to("html"));
}

#[test]
fn test_touch_moves_updated_forward() {
    let mut fragment = Fragment::new("owner-1", "text/plain", 0).unwrap();
    let before = *fragment.updated();
    fragment.touch();
    assert!(*fragment.updated() >= before);
    assert_eq!(*fragment.created(), before);
}

#[test]
fn test_serializes_with_wire_field_names() {
    let fragment = Fragment::new("owner-1", "text/csv", 7).unwrap();
    let value = serde_json::to_value(&fragment).unwrap();
    assert_eq!(value["ownerId"], "owner-1");
    assert_eq!(value["type"], "text/csv");
    assert_eq!(value["size"], 7);
    assert!(value["created"].is_string());
    assert!(value["updated"].is_string());

    let back: Fragment = serde_json::from_value(value).unwrap();
    assert_eq!(back, fragment);
}

#[test]
fn test_id_with_version_separator_is_rejected() {
    let err = Fragment::builder()
        .id("doc_v1")
        .owner_id("owner-1")
        .content_type("text/plain")
        .size(0)
        .build()
        .unwrap_err();
    assert!(matches!(
        validation_kind(&err),
        Some(ValidationErrorKind::InvalidValue { field: "id", .. })
    ));

    let plain = Fragment::builder()
        .id("doc-v1")
        .owner_id("owner-1")
        .content_type("text/plain")
        .size(0)
        .build()
        .unwrap();
    assert_eq!(plain.id(), "doc-v1");
}
