//! Composite version ids: `<fragmentId>_v<versionNum>`.

use strata_error::{VersionError, VersionErrorKind};

/// Separator between fragment id and version number.
pub(crate) const SEPARATOR: &str = "_v";

/// The parts of a parsed version id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRef {
    /// Fragment the version belongs to
    pub fragment_id: String,
    /// Position in the fragment's version chain, starting at 1
    pub version_num: u32,
}

/// Build the version id for `fragment_id` at `version_num`.
///
/// # Examples
///
/// ```
/// use strata_fragment::{parse_version_id, to_version_id};
///
/// let id = to_version_id("abc", 3);
/// assert_eq!(id, "abc_v3");
/// let parsed = parse_version_id(&id).unwrap();
/// assert_eq!((parsed.fragment_id.as_str(), parsed.version_num), ("abc", 3));
/// ```
pub fn to_version_id(fragment_id: &str, version_num: u32) -> String {
    format!("{}{}{}", fragment_id, SEPARATOR, version_num)
}

/// Split a version id into fragment id and version number.
///
/// The last `_v` is the separator.
///
/// # Errors
///
/// - `MalformedId` when there is no `_v` separator or no fragment id before it
/// - `InvalidNumber` when the suffix is not a canonical positive integer
///   (`abc_vNaN`, `abc_v0`, `abc_v01`)
pub fn parse_version_id(version_id: &str) -> Result<VersionRef, VersionError> {
    let (fragment_id, suffix) = version_id
        .rsplit_once(SEPARATOR)
        .filter(|(fragment_id, _)| !fragment_id.is_empty())
        .ok_or_else(|| VersionError::new(VersionErrorKind::MalformedId(version_id.to_string())))?;

    let invalid = || VersionError::new(VersionErrorKind::InvalidNumber(version_id.to_string()));
    if suffix.is_empty() || suffix.starts_with('0') || !suffix.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    let version_num = suffix.parse::<u32>().map_err(|_| invalid())?;

    Ok(VersionRef {
        fragment_id: fragment_id.to_string(),
        version_num,
    })
}
