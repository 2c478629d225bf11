//! File I/O operations for NUMS records

use crate::error::{IoError, Result};
use crate::record::NumsRecord;
use std::fs;
use std::path::Path;

/// Save a record as pretty-printed JSON
pub fn save_record<P: AsRef<Path>>(record: &NumsRecord, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a record from a JSON file
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<NumsRecord> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Record file not found: {}", path.display()),
        )));
    }

    let json = fs::read_to_string(path)?;
    let record: NumsRecord = serde_json::from_str(&json)?;
    if record.pk.is_empty() {
        return Err(IoError::InvalidRecord("missing PK".to_string()));
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumsConfig;
    use nums::NumsEngine;
    use nums_core::NumsMethod;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let record = NumsRecord {
            input: "unspendable".to_string(),
            r: "811c0db9302e9ec042b3dedb0c72361f08c866aeb26f38d4d959b205ef0a04b9".to_string(),
            pk: "08335b42143dd67da2ec8cb8b9108777c351b47993bba2a537a04bf72eb7396a".to_string(),
            method: Some(NumsMethod::UnknownDlHidingKey),
            tag: None,
        };

        save_record(&record, &path).unwrap();
        assert_eq!(load_record(&path).unwrap(), record);
    }

    #[test]
    fn test_load_and_verify_tagged_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        let engine = NumsEngine::new();
        let pk = engine.derive_from_tag("foo").unwrap();
        fs::write(
            &path,
            format!(
                r#"{{ "input": "foo", "R": "", "PK": "{}", "method": "TAGGED_HASH_KEY" }}"#,
                pk.to_hex()
            ),
        )
        .unwrap();

        let record = load_record(&path).unwrap();
        assert!(record.tag.is_none());
        assert!(record.verify(&engine, &NumsConfig::default()).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_record(dir.path().join("absent.json")),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_load_record_without_pk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        fs::write(&path, r#"{ "input": "x", "R": "" }"#).unwrap();

        assert!(matches!(load_record(&path), Err(IoError::InvalidRecord(_))));
    }
}
