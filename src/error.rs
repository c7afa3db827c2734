/// Error types for Sigma value handling
use thiserror::Error;

/// Main error type for value construction and conversion
#[derive(Error, Debug)]
pub enum SigmaError {
    /// Value is invalid for the requested construction or conversion
    #[error("Value error: {0}")]
    Value(String),

    /// Regular expression compilation failed
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Operation attempted between incompatible types
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type the operation supports
        expected: &'static str,
        /// Type actually supplied
        found: String,
    },
}

/// Result type alias for Sigma value operations
pub type Result<T> = std::result::Result<T, SigmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SigmaError::Value("Invalid number".to_string());
        assert_eq!(err.to_string(), "Value error: Invalid number");

        let err = SigmaError::TypeMismatch {
            expected: "string",
            found: "bool".to_string(),
        };
        assert_eq!(err.to_string(), "Type mismatch: expected string, found bool");
    }

    #[test]
    fn test_regex_error_conversion() {
        let err: SigmaError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, SigmaError::Regex(_)));
    }
}
