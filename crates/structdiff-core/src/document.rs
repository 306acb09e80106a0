//! JSON document loading.
//!
//! Documents are decoded into `serde_json::Value`, which implements
//! [`Inspect`](crate::Inspect) and can be handed straight to the engines.

use crate::errors::{ExError, StructDiffError};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use structdiff_core_types::schema::OP_PARSE_DOCUMENT;

/// Parse raw bytes as a JSON document.
///
/// # Errors
///
/// - `InvalidDocument` — bytes are not valid UTF-8, or not valid JSON
pub fn parse_document(bytes: &[u8]) -> Result<Value, ExError> {
    let start = Instant::now();
    log_op_start!(OP_PARSE_DOCUMENT, bytes = bytes.len());

    match decode(bytes) {
        Ok(value) => {
            log_op_end!(
                OP_PARSE_DOCUMENT,
                duration_ms = start.elapsed().as_millis() as u64
            );
            Ok(value)
        }
        Err(err) => {
            log_op_error!(
                OP_PARSE_DOCUMENT,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err.into())
        }
    }
}

fn decode(bytes: &[u8]) -> Result<Value, StructDiffError> {
    let text = std::str::from_utf8(bytes).map_err(|e| StructDiffError::InvalidUtf8 {
        reason: e.to_string(),
    })?;
    serde_json::from_str(text).map_err(|e| StructDiffError::InvalidJson {
        reason: e.to_string(),
    })
}

/// Read a file and parse it as a JSON document.
///
/// # Errors
///
/// - `Io` — the file cannot be read
/// - `InvalidDocument` — the contents do not parse; the error carries the
///   file path
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, ExError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::from(StructDiffError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;
    parse_document(&bytes).map_err(|e| e.with_path(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_parse_object() {
        let value = parse_document(br#"{"name": "Alice", "age": 30}"#).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["age"], 30);
    }

    #[test]
    fn test_parse_scalar_root() {
        assert_eq!(parse_document(b"42").unwrap(), Value::from(42));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse_document(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
        assert_eq!(err.op(), Some(OP_PARSE_DOCUMENT));
        assert!(err.message().contains("UTF-8"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document(b"{\"a\": ").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_DOCUMENT");
        assert!(err.message().contains("JSON"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert!(err.path().unwrap().ends_with("missing.json"));
    }

    #[test]
    fn test_load_invalid_file_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_document(&path).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
        assert!(err.path().unwrap().ends_with("bad.json"));
    }
}
