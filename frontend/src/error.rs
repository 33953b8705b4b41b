use thiserror::Error;

/// Why a translation resource could not be turned into a mapping.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("`{url}` answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed translation file: {0}")]
    Malformed(#[from] serde_json::Error),
}
