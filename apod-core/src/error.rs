use reqwest::StatusCode;
use thiserror::Error;

/// Failure of one APOD fetch
#[derive(Debug, Error)]
pub enum ApodError {
    /// Non-2xx response carrying an `error.message`
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Non-2xx response without a usable error body
    #[error("{}", reason_phrase(.status))]
    Status { status: StatusCode },

    /// No response obtained (connect, DNS, body read)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body is not an APOD record
    #[error("Failed to parse APOD response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApodError {
    /// Text to show in the caption slot, if this failure is shown at all
    pub fn caption(&self) -> Option<String> {
        match self {
            ApodError::Decode(_) => None,
            other => Some(other.to_string()),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApodError::Api { status, .. } | ApodError::Status { status } => Some(*status),
            ApodError::Transport(e) => e.status(),
            ApodError::Decode(_) => None,
        }
    }
}

/// Textual reason phrase of a status, or its code when it has none
pub fn reason_phrase(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
