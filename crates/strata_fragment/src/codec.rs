//! Metadata (de)serialisation.

use serde::{Serialize, de::DeserializeOwned};
use strata_error::{JsonError, StorageError, StorageErrorKind, StrataResult};

pub(crate) fn encode<T: Serialize>(record: &T) -> StrataResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| JsonError::new(e.to_string()).into())
}

/// Bytes that were stored but no longer parse are a corrupt record.
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> StrataResult<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| StorageError::new(StorageErrorKind::Corrupt(e.to_string())).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fragment;
    use strata_error::StrataErrorKind;

    #[test]
    fn undecodable_bytes_are_corrupt() {
        let err = decode::<Fragment>(b"{not json").unwrap_err();
        assert!(matches!(
            err.kind(),
            StrataErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::Corrupt(_))
        ));
    }

    #[test]
    fn missing_field_is_corrupt() {
        let err = decode::<Fragment>(br#"{"id":"a","type":"text/plain"}"#).unwrap_err();
        assert!(err.to_string().contains("Corrupt record"));
    }
}
