//! Third-party REST collaborators for the dashboard: quote of the day,
//! weather, and image search.
//!
//! Every client degrades instead of blocking the page: quotes and weather
//! fall back to local values on any failure, image search surfaces a
//! typed error for the caller to render as a placeholder message. Nothing
//! here retries.

pub mod pexels;
pub mod quotes;
pub mod weather;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ProviderError {
        #[error("request failed: {0}")]
        Http(#[from] Box<ureq::Error>),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("malformed response: {0}")]
        Json(#[from] serde_json::Error),

        #[error("response missing field: {0}")]
        MissingField(&'static str),
    }

    impl From<ureq::Error> for ProviderError {
        fn from(err: ureq::Error) -> Self {
            ProviderError::Http(Box::new(err))
        }
    }
}

pub use error::ProviderError;
