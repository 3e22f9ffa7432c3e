use crate::types::ResponseParameters;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Telegram API error {error_code}: {description}")]
    Api {
        error_code: i32,
        description: String,
        parameters: Option<ResponseParameters>,
    },

    #[error("HTTP request to {method} failed: {source}")]
    Network {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response for {method}: {source}")]
    InvalidResponse {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to read upload {path}: {source}")]
    Upload {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve download location for file {file_id}: {reason}")]
    Resolution { file_id: String, reason: String },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    /// True when the failure happened while turning a file reference into a
    /// download location, as opposed to a failed remote call.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// Seconds to wait before repeating the call, when the API asked for it.
    pub fn retry_after(&self) -> Option<u32> {
        match self {
            Self::Api {
                parameters: Some(params),
                ..
            } => params.retry_after,
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
