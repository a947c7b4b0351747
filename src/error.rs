use thiserror::Error;

/// Unified error type for semanver operations
#[derive(Error, Debug)]
pub enum SemanVerError {
    #[error("Invalid version string: input is empty")]
    EmptyInput,

    #[error(
        "Invalid version string '{input}': expected {expected} dot-separated components, found {found}"
    )]
    InvalidFormat {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid version string '{input}': {component} component '{value}' is not a non-negative integer")]
    InvalidNumber {
        input: String,
        component: &'static str,
        value: String,
    },

    #[error("Cannot compare '{left}' with '{right}': versions have different shapes")]
    ShapeMismatch { left: String, right: String },

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semanver
pub type Result<T> = std::result::Result<T, SemanVerError>;

impl SemanVerError {
    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        SemanVerError::Tag(msg.into())
    }

    /// Whether this error was raised while parsing a version string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SemanVerError::EmptyInput
                | SemanVerError::InvalidFormat { .. }
                | SemanVerError::InvalidNumber { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SemanVerError::tag("test tag issue");
        assert_eq!(err.to_string(), "Tag error: test tag issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SemanVerError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_parse_errors_share_prefix() {
        let errors = vec![
            SemanVerError::EmptyInput,
            SemanVerError::InvalidFormat {
                input: "1.2".to_string(),
                expected: 3,
                found: 2,
            },
            SemanVerError::InvalidNumber {
                input: "1.x.3".to_string(),
                component: "minor",
                value: "x".to_string(),
            },
        ];

        for err in errors {
            assert!(err.is_parse_error());
            assert!(
                err.to_string().starts_with("Invalid version string"),
                "unexpected message: {}",
                err
            );
        }
    }

    #[test]
    fn test_invalid_format_names_counts() {
        let err = SemanVerError::InvalidFormat {
            input: "1.2.3.4".to_string(),
            expected: 3,
            found: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("'1.2.3.4'"));
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("found 4"));
    }

    #[test]
    fn test_invalid_number_names_component() {
        let err = SemanVerError::InvalidNumber {
            input: "1.0.x".to_string(),
            component: "patch",
            value: "x".to_string(),
        };
        assert!(err.to_string().contains("patch component 'x'"));
    }

    #[test]
    fn test_non_parse_errors() {
        let errors = vec![
            SemanVerError::tag("bad"),
            SemanVerError::ShapeMismatch {
                left: "1.0.0".to_string(),
                right: "1.0.0.1".to_string(),
            },
        ];

        for err in errors {
            assert!(!err.is_parse_error());
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (SemanVerError::tag("x"), "Tag error"),
            (SemanVerError::EmptyInput, "Invalid version string"),
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
}
