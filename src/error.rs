// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: Maps configuration, transport, schema and filesystem failures to exit codes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status} on {endpoint}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    #[error("Handling for field type {{{type_tag}}} not supported (field {field})")]
    UnsupportedFieldType { field: String, type_tag: String },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Field {field} does not hold a {expected} value")]
    FieldValue { field: String, expected: &'static str },

    #[error("The project setting needs to be specified")]
    MissingProject,

    #[error("No connection url specified")]
    MissingUrl,

    #[error("Invalid connection url: {0}")]
    InvalidUrl(String),

    #[error("Refusing to write outside the output directory: {0}")]
    InvalidPath(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Network(_) => 3,
            Error::Api { .. } => 4,
            Error::Parse(_) => 5,
            Error::Filesystem(_) => 6,
            Error::UnsupportedFieldType { .. } => 7,
            Error::Schema(_) => 8,
            Error::FieldValue { .. } => 9,
            Error::MissingProject => 10,
            Error::MissingUrl => 11,
            Error::InvalidUrl(_) => 12,
            Error::InvalidPath(_) => 13,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::MissingProject.exit_code(), 10);
        assert_eq!(Error::MissingUrl.exit_code(), 11);
        assert_eq!(
            Error::Api {
                endpoint: "test".into(),
                status: 404,
                message: "not found".into()
            }
            .exit_code(),
            4
        );
        assert_eq!(
            Error::UnsupportedFieldType {
                field: "x".into(),
                type_tag: "unknown".into()
            }
            .exit_code(),
            7
        );
    }

    #[test]
    fn test_unsupported_type_message_names_the_tag() {
        let err = Error::UnsupportedFieldType {
            field: "teaser".into(),
            type_tag: "unknown".into(),
        };
        assert_eq!(
            err.to_string(),
            "Handling for field type {unknown} not supported (field teaser)"
        );
    }
}
