use thiserror::Error;

pub type UpstreamResult<T> = std::result::Result<T, UpstreamError>;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid upstream URL {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        UpstreamError::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// HTTP status reported by the upstream, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
