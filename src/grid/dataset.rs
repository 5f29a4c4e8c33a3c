use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use super::GridDataset;
use crate::error::Result;

/// A parsed GRID file together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub path: PathBuf,
    /// SHA256 of the raw file bytes, hex encoded.
    pub sha256: String,
    pub dataset: GridDataset,
}

/// Read and parse a GRID dataset file.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let bytes = std::fs::read(path)?;
    let sha256 = compute_fingerprint(&bytes);
    let dataset: GridDataset = serde_json::from_slice(&bytes)?;

    log::info!(
        "Loaded GRID {} from {} ({} institutes, sha256 {})",
        dataset.version,
        path.display(),
        dataset.institutes.len(),
        sha256
    );

    Ok(LoadedDataset {
        path: path.to_path_buf(),
        sha256,
        dataset,
    })
}

/// Parse a GRID dataset from a JSON string.
pub fn parse_dataset(content: &str) -> Result<GridDataset> {
    Ok(serde_json::from_str(content)?)
}

/// Compute SHA256 hash of file contents
pub fn compute_fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Grid2VivoError;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "version": "2016-06-21",
        "institutes": [
            {"id": "grid.1.1", "name": "A", "status": "active"},
            {"id": "grid.2.2", "name": "B", "status": "obsolete"}
        ]
    }"#;

    #[test]
    fn test_load_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("grid.json");
        fs::write(&path, SAMPLE).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded.dataset.version, "2016-06-21");
        assert_eq!(loaded.dataset.institutes.len(), 2);
        assert_eq!(loaded.sha256, compute_fingerprint(SAMPLE.as_bytes()));
        assert_eq!(loaded.sha256.len(), 64);
    }

    #[test]
    fn test_parse_keeps_inactive_records_untyped() {
        let dataset = parse_dataset(
            r#"{
                "version": "2016-06-21",
                "institutes": [
                    {"id": "grid.1.1", "name": "A", "status": "active"},
                    {"id": "grid.3.3", "status": "redirected", "redirect": "grid.1.1"},
                    {"id": "grid.4.4", "status": "obsolete", "relationships": [{"id": "grid.1.1"}]}
                ]
            }"#,
        )
        .unwrap();
        let statuses: Vec<_> = dataset.institutes.iter().map(|r| r.status()).collect();
        assert_eq!(
            statuses,
            vec![Some("active"), Some("redirected"), Some("obsolete")]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/grid.json")).unwrap_err();
        assert!(matches!(err, Grid2VivoError::Io(_)));
    }

    #[test]
    fn test_parse_missing_institutes() {
        let err = parse_dataset(r#"{"version": "x"}"#).unwrap_err();
        assert!(matches!(err, Grid2VivoError::Json(_)));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(compute_fingerprint(b"grid"), compute_fingerprint(b"grid"));
        assert_ne!(compute_fingerprint(b"grid"), compute_fingerprint(b"grid "));
    }
}
