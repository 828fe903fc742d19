use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("No active editor found.")]
    NoActiveSurface,

    #[error("Please select code to summarise.")]
    EmptySelection,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API error: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response format: {message}")]
    SchemaError { message: String },

    #[error("Export cancelled.")]
    ExportCancelled,

    #[error("Failed to export: {message}")]
    ExportWriteFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Flat taxonomy of the ways a summarisation or export step can end early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoActiveSurface,
    EmptySelection,
    ConfigurationError,
    TransportError,
    ApiError,
    SchemaError,
    ExportCancelled,
    ExportWriteFailed,
}

impl SummaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummaryError::NoActiveSurface => ErrorKind::NoActiveSurface,
            SummaryError::EmptySelection => ErrorKind::EmptySelection,
            SummaryError::ConfigError { .. }
            | SummaryError::InvalidConfigValueError { .. }
            | SummaryError::IoError(_)
            | SummaryError::TomlError(_) => ErrorKind::ConfigurationError,
            SummaryError::TransportError(_) => ErrorKind::TransportError,
            SummaryError::ApiError { .. } => ErrorKind::ApiError,
            SummaryError::SchemaError { .. } => ErrorKind::SchemaError,
            SummaryError::ExportCancelled => ErrorKind::ExportCancelled,
            SummaryError::ExportWriteFailed { .. } => ErrorKind::ExportWriteFailed,
        }
    }

    /// Short text shown to the user. For upstream API failures this is the
    /// raw response body, for write failures the underlying io message.
    pub fn message(&self) -> String {
        match self {
            SummaryError::ApiError { body, .. } => body.clone(),
            SummaryError::ExportWriteFailed { message } => message.clone(),
            SummaryError::ConfigError { message } => message.clone(),
            SummaryError::SchemaError { message } => {
                format!("unexpected response format: {}", message)
            }
            other => other.to_string(),
        }
    }

    /// Cancellation is an outcome the user chose, not a failure.
    pub fn is_user_cancellation(&self) -> bool {
        matches!(self, SummaryError::ExportCancelled)
    }

    pub fn missing_credential() -> Self {
        SummaryError::ConfigError {
            message: "missing credential".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
