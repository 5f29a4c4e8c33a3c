use thiserror::Error;

/// Main error type for grid2vivo
#[derive(Error, Debug)]
pub enum Grid2VivoError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A relationship kind outside Affiliated/Related/Child/Parent/Other
    #[error("Unrecognized relationship kind '{kind}' on institute {institute}")]
    UnrecognizedRelationshipKind { institute: String, kind: String },

    /// RDF output could not be written
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using Grid2VivoError
pub type Result<T> = std::result::Result<T, Grid2VivoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Grid2VivoError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_unrecognized_kind_display() {
        let err = Grid2VivoError::UnrecognizedRelationshipKind {
            institute: "grid.1.1".to_string(),
            kind: "Sibling".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Sibling"));
        assert!(msg.contains("grid.1.1"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Grid2VivoError = io_err.into();
        assert!(matches!(err, Grid2VivoError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Grid2VivoError = json_err.into();
        assert!(matches!(err, Grid2VivoError::Json(_)));
    }
}
