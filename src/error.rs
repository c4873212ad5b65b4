//! Error types for index construction and configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Debug, Error)]
pub enum IndexError {
    /// A coordinate failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for IndexError {
    fn from(err: toml::de::Error) -> Self {
        IndexError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IndexError::InvalidInput("Latitude out of range".into());
        assert_eq!(err.to_string(), "invalid input: Latitude out of range");

        let err = IndexError::InvalidConfig("radius must be positive".into());
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IndexError = io.into();
        assert!(matches!(err, IndexError::Io(_)));
    }
}
