use serde::de::DeserializeOwned;
use serde_json::Value;

use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Reads the JSON document at `path` as an array of `T` records.
///
/// Each element is decoded on its own, so a bad record is reported with its
/// position in the array. Fields not named by `T` are ignored.
///
/// # Errors
///
/// Returns errors if:
/// * The file cannot be read ([`Error::Read`])
/// * The file is not valid JSON ([`Error::Parse`])
/// * The top-level value is not an array ([`Error::NotAnArray`])
/// * Any element lacks a field of `T` or has the wrong type for it
///   ([`Error::MalformedRecord`])
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = doc else {
        return Err(Error::NotAnArray {
            path: path.to_path_buf(),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| Error::MalformedRecord {
                path: path.to_path_buf(),
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn read_records_fn_decodes_every_element() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("named.json");
        fs::write(&path, r#"[{"name": "a", "extra": 1}, {"name": "b"}]"#).unwrap();
        let records: Vec<Named> = read_records(&path).unwrap();
        assert_eq!(
            records,
            vec![
                Named { name: "a".into() },
                Named { name: "b".into() }
            ]
        );
    }

    #[test]
    fn read_records_fn_returns_read_error_for_missing_file() {
        let err = read_records::<Named>("testdata/does-not-exist.json").unwrap_err();
        assert!(matches!(err, Error::Read { .. }), "{err:?}");
        assert!(err.to_string().contains("testdata/does-not-exist.json"));
    }

    #[test]
    fn read_records_fn_returns_parse_error_for_invalid_json() {
        let err = read_records::<Named>("testdata/not-json.json").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err:?}");
        assert!(err.is_input_access());
    }

    #[test]
    fn read_records_fn_rejects_non_array_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, r#"{"name": "a"}"#).unwrap();
        let err = read_records::<Named>(&path).unwrap_err();
        assert!(matches!(err, Error::NotAnArray { .. }), "{err:?}");
    }

    #[test]
    fn read_records_fn_reports_index_of_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"name": "a"}, {"nom": "b"}]"#).unwrap();
        let err = read_records::<Named>(&path).unwrap_err();
        match err {
            Error::MalformedRecord { index, reason, .. } => {
                assert_eq!(index, 1);
                assert!(reason.contains("name"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
