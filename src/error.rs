use thiserror::Error;

/// Unified error type for release-config operations
#[derive(Error, Debug)]
pub enum ReleaseConfigError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote query failed: {0}")]
    Remote(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-config
pub type Result<T> = std::result::Result<T, ReleaseConfigError>;

impl ReleaseConfigError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseConfigError::Config(msg.into())
    }

    /// Create a remote query error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleaseConfigError::Remote(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseConfigError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseConfigError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ReleaseConfigError::remote("test")
            .to_string()
            .contains("Remote"));
        assert!(ReleaseConfigError::config("test")
            .to_string()
            .contains("Configuration"));
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ReleaseConfigError::config(""),
            ReleaseConfigError::remote(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseConfigError::config("x"), "Configuration error"),
            (ReleaseConfigError::remote("x"), "Remote query failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with \\ backslash",
        ];

        for msg in special_chars {
            let err = ReleaseConfigError::remote(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Remote"));
        }
    }
}
