//! Error types shared by the dynaform crates

use thiserror::Error;

/// Result type for dynaform operations
pub type Result<T> = std::result::Result<T, DynaformError>;

/// Errors raised by malformed paths or configurations.
///
/// Field validation failures are not errors; they are reported as data by
/// the validator and collected in the form's error map.
#[derive(Debug, Error)]
pub enum DynaformError {
    /// A dot path that is empty or contains an empty segment
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Form configuration JSON that does not match the descriptor shape
    #[error("invalid form configuration: {0}")]
    Configuration(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let err = DynaformError::InvalidPath {
            path: "a..b".into(),
            reason: "empty segment",
        };
        assert_eq!(err.to_string(), "invalid path 'a..b': empty segment");
    }

    #[test]
    fn test_configuration_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: DynaformError = json_err.into();
        assert!(err.to_string().starts_with("invalid form configuration"));
    }
}
