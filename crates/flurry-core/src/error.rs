//! Error types for Flurry

use thiserror::Error;

/// The main error type for Flurry operations.
///
/// The simulation itself is infallible; these cover settings I/O and validation.
#[derive(Debug, Error)]
pub enum FlurryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),

    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: String, reason: String },

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Result type alias for Flurry operations
pub type Result<T> = std::result::Result<T, FlurryError>;

impl From<toml::de::Error> for FlurryError {
    fn from(err: toml::de::Error) -> Self {
        FlurryError::TomlParse(err.to_string())
    }
}

impl From<toml::ser::Error> for FlurryError {
    fn from(err: toml::ser::Error) -> Self {
        FlurryError::TomlSer(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_converts() {
        let err: FlurryError = toml::from_str::<toml::value::Table>("x = [")
            .unwrap_err()
            .into();
        assert!(matches!(err, FlurryError::TomlParse(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn out_of_range_message() {
        let err = FlurryError::ValueOutOfRange {
            field: "viewport.width".into(),
            min: 1.0,
            max: 100000.0,
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "Value out of range: viewport.width must be between 1 and 100000, got 0"
        );
    }
}
