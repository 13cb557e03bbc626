use std::{error, fmt, sync::Arc};

use async_trait::async_trait;
use model::Trip;

pub mod client;
pub mod mock;

pub use client::{FeedSettings, LiveFeedClient, TRIPS_FEED_URL};
pub use mock::{FailingFeedClient, FixtureFeedClient};
pub use reqwest::StatusCode;

/// Anything that can deliver the current list of trips.
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>>;
}

#[async_trait]
impl<C: FeedClient + ?Sized> FeedClient for Arc<C> {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>> {
        (**self).fetch_trips().await
    }
}

#[async_trait]
impl<C: FeedClient + ?Sized> FeedClient for Box<C> {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>> {
        (**self).fetch_trips().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    Network,
    InvalidResponse,
    Decoding,
    Unexpected,
}

#[derive(Debug, Clone)]
pub enum FeedError {
    NetworkError(Arc<dyn error::Error + Send + Sync>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    DecodingError(Arc<serde_json::Error>),
    Unexpected(String),
}

pub type FeedResult<T> = Result<T, FeedError>;

impl FeedError {
    pub fn network<E: error::Error + Send + Sync + 'static>(why: E) -> Self {
        Self::NetworkError(Arc::new(why))
    }

    pub fn kind(&self) -> FeedErrorKind {
        match self {
            Self::NetworkError(_) => FeedErrorKind::Network,
            Self::InvalidResponse { .. } => FeedErrorKind::InvalidResponse,
            Self::DecodingError(_) => FeedErrorKind::Decoding,
            Self::Unexpected(_) => FeedErrorKind::Unexpected,
        }
    }

    /// The message shown to the user when a load fails with this error.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            FeedErrorKind::Network => "Network error: Please check your internet connection.",
            FeedErrorKind::InvalidResponse => "Server error: Received an invalid response.",
            FeedErrorKind::Decoding => "Data error: Unable to process the received data.",
            FeedErrorKind::Unexpected => "Unexpected error: Please try again later.",
        }
    }
}

impl error::Error for FeedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FeedError::NetworkError(why) => Some(why.as_ref()),
            FeedError::DecodingError(why) => Some(why.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeedError::NetworkError(e) => write!(f, "Network error: {}", e),
            FeedError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid response ({}) from {}: {}", status_code, url, text)
                }
                None => write!(f, "Invalid response ({}) from {}", status_code, url),
            },
            FeedError::DecodingError(e) => write!(f, "Failed to decode the data: {}", e),
            FeedError::Unexpected(e) => write!(f, "{e}"),
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::NetworkError(Arc::new(e))
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::DecodingError(Arc::new(e))
    }
}
