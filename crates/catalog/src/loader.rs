//! Catalog file loading.
//!
//! Each catalog file is a JSON array of free-schema records. No schema is
//! enforced beyond being valid JSON; each record becomes one document whose
//! text is the record's compact JSON rendering.

use carcare_core::error::CatalogError;
use std::path::Path;

/// Load a catalog file and return one document text per record.
pub fn load_catalog_documents(path: &Path) -> Result<Vec<String>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let records: Vec<serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| CatalogError::FileParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let documents = records
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>();

    tracing::debug!(
        path = %path.display(),
        records = documents.len(),
        "Loaded catalog file"
    );

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_one_document_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.json");
        std::fs::write(
            &path,
            r#"[
                {"problem": "Squealing brakes", "severity": "medium"},
                {"problem": "Engine knocking", "severity": "high"}
            ]"#,
        )
        .unwrap();

        let docs = load_catalog_documents(&path).unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[0].contains("Squealing brakes"));
        assert!(docs[1].contains("Engine knocking"));
    }

    #[test]
    fn empty_array_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        let docs = load_catalog_documents(&path).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_catalog_documents(Path::new("/nonexistent/nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileRead { .. }));
    }

    #[test]
    fn non_array_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = load_catalog_documents(&path).unwrap_err();
        assert!(matches!(err, CatalogError::FileParse { .. }));
    }
}
