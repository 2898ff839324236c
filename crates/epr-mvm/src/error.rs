use epr_core::SellerId;
use thiserror::Error;

/// Errors returned by the MVM API client.
#[derive(Debug, Error)]
pub enum MvmError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429 from the MVM API after all retries were exhausted.
    #[error("rate limited by MVM API at {url}")]
    RateLimited { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The seller's `custom_fields` string is not a JSON object.
    #[error("malformed custom_fields for seller {seller_id}: {reason}")]
    MalformedCustomFields { seller_id: SellerId, reason: String },

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl MvmError {
    /// URL of the request that failed, when the error came from one.
    #[must_use]
    pub fn request_url(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.url().map(reqwest::Url::as_str),
            Self::RateLimited { url } | Self::UnexpectedStatus { url, .. } => Some(url),
            Self::Deserialize { .. } | Self::MalformedCustomFields { .. } | Self::InvalidConfig(_) => {
                None
            }
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::RateLimited { .. } => Some(429),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Deserialize { .. } | Self::MalformedCustomFields { .. } | Self::InvalidConfig(_) => {
                None
            }
        }
    }
}
