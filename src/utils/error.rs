use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error in `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Round-trip check failed: {message}")]
    RoundTripError { message: String },
}

impl SiteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::HttpError(e) => format!("A network request failed: {}", e),
            SiteError::SerializationError(e) => format!("Could not serialize report: {}", e),
            SiteError::TomlSerializeError(e) => {
                format!("Could not write the configuration back to TOML: {}", e)
            }
            SiteError::ConfigValidationError { field, message } => {
                format!("The configuration field `{}` is invalid: {}", field, message)
            }
            SiteError::InvalidConfigValueError { field, value, .. } => {
                format!("`{}` has an unsupported value: `{}`", field, value)
            }
            SiteError::RoundTripError { message } => {
                format!(
                    "The configuration does not survive re-serialization: {}",
                    message
                )
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::IoError(_) => "Check that the path exists and is readable",
            SiteError::HttpError(_) => "Check network connectivity and retry",
            SiteError::SerializationError(_) | SiteError::TomlSerializeError(_) => {
                "Remove unsupported values (e.g. nulls) from option tables"
            }
            SiteError::ConfigValidationError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Fix the named field in site.toml and run `sitecheck check` again"
            }
            SiteError::RoundTripError { .. } => {
                "Run `sitecheck fmt` to see the normalized form and compare"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
