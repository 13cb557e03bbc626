use std::time::Duration;

use async_trait::async_trait;
use model::{ExampleData, Trip, Trips};

use crate::{FeedClient, FeedError, FeedResult};

/// Serves the three example trips, optionally after a delay. Never fails.
#[derive(Debug, Clone, Default)]
pub struct FixtureFeedClient {
    delay: Duration,
}

impl FixtureFeedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl FeedClient for FixtureFeedClient {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Trips::example_data().trips)
    }
}

/// Fails every fetch with the error it was built with.
#[derive(Debug, Clone)]
pub struct FailingFeedClient {
    error: FeedError,
}

impl FailingFeedClient {
    pub fn new(error: FeedError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl FeedClient for FailingFeedClient {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>> {
        Err(self.error.clone())
    }
}
