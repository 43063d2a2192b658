use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid selection: {}", .0)]
    InvalidSelection(String),

    #[error("Invalid value `{}` for option `--{}`", .value, .option)]
    InvalidOption { option: String, value: String },

    #[error("Service not found: `{}`", .0)]
    NotFound(String),

    #[error("Content API failure: {}", .0)]
    Delegation(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error dumping value to YAML: {}", .0)]
    Dump(serde_yaml::Error),

    #[error("Error parsing message template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering message template: {}", .0)]
    Render(#[from] RenderError),

    #[error("Misc error: {}", .0)]
    Misc(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Found a non-unique service ID: `{}`", .0)]
    NonUniqueServiceId(String),
}

impl Error {
    pub fn invalid_option(option: &str, value: &str) -> Self {
        Self::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Wraps any error raised by a content API so it reaches the caller as a
    /// single delegation failure carrying the collaborator's message.
    #[must_use]
    pub fn into_delegation(self) -> Self {
        match self {
            Self::Delegation(message) => Self::Delegation(message),
            other => Self::Delegation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_delegation_keeps_message() {
        let error = Error::Delegation("database offline".to_string()).into_delegation();
        assert_eq!(error.to_string(), "Content API failure: database offline");
    }

    #[test]
    fn test_into_delegation_wraps_other_errors() {
        let error = Error::io_error(
            "content store".to_string(),
            "/tmp/content.yml".to_string(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into_delegation();

        match error {
            Error::Delegation(message) => {
                assert!(message.contains("content store"));
                assert!(message.contains("denied"));
            }
            _ => panic!("Expected Delegation error"),
        }
    }

    #[test]
    fn test_invalid_option_display() {
        let error = Error::invalid_option("limit", "ten");
        assert_eq!(error.to_string(), "Invalid value `ten` for option `--limit`");
    }
}
