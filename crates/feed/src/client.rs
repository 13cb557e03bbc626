use std::{env, time::Duration};

use async_trait::async_trait;
use model::{Trip, Trips};
use serde::{Deserialize, Serialize};

use crate::{FeedClient, FeedError, FeedResult};

pub const TRIPS_FEED_URL: &str = "https://hopskipdrive-static-files.s3.us-east-2.amazonaws.com/interview-resources/Trip.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSettings {
    pub endpoint: String,
    pub proxy: Option<String>,
    /// Handed to the http client as is. Without it the transport defaults apply.
    pub timeout: Option<Duration>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: TRIPS_FEED_URL.to_owned(),
            proxy: None,
            timeout: None,
        }
    }
}

impl FeedSettings {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Reads `TRIPS_FEED_URL`, `TRIPS_FEED_PROXY` and `TRIPS_FEED_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset.
    pub fn env() -> Self {
        Self::from_vars(
            env::var("TRIPS_FEED_URL").ok(),
            env::var("TRIPS_FEED_PROXY").ok(),
            env::var("TRIPS_FEED_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Applies the given overrides to the defaults. A timeout that is not a
    /// whole number of seconds is ignored.
    pub fn from_vars(
        endpoint: Option<String>,
        proxy: Option<String>,
        timeout_secs: Option<&str>,
    ) -> Self {
        let mut settings = Self::default();

        if let Some(endpoint) = endpoint {
            settings.endpoint = endpoint;
        }
        settings.proxy = proxy;
        if let Some(timeout) = timeout_secs {
            match timeout.trim().parse::<u64>() {
                Ok(seconds) => settings.timeout = Some(Duration::from_secs(seconds)),
                Err(why) => log::warn!("ignoring TRIPS_FEED_TIMEOUT_SECS '{timeout}': {why}"),
            }
        }

        settings
    }
}

/// Fetches the trip feed over http.
pub struct LiveFeedClient {
    pub settings: FeedSettings,
    client: reqwest::Client,
}

impl LiveFeedClient {
    pub fn new(settings: FeedSettings) -> FeedResult<Self> {
        /* build the http client with optional proxy and timeout */
        let mut builder = reqwest::Client::builder();
        if let Some(proxy_url) = &settings.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|why| {
                FeedError::Unexpected(format!("invalid proxy '{proxy_url}': {why}"))
            })?;
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|why| FeedError::Unexpected(format!("http client: {why}")))?;

        Ok(Self { client, settings })
    }

    pub fn env() -> FeedResult<Self> {
        Self::new(FeedSettings::env())
    }
}

#[async_trait]
impl FeedClient for LiveFeedClient {
    async fn fetch_trips(&self) -> FeedResult<Vec<Trip>> {
        let url = &self.settings.endpoint;
        match &self.settings.proxy {
            Some(proxy_url) => log::info!("Requesting trips '{url}' using proxy '{proxy_url}'."),
            None => log::info!("Requesting trips '{url}'."),
        }

        /* perform get-request */
        let response = self.client.get(url).send().await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => {
                let body = response.text().await?;
                let trips = Trips::from_json(&body)?.trips;
                log::info!("Received {} trips.", trips.len());
                Ok(trips)
            }
            other => Err(FeedError::InvalidResponse {
                status_code: other,
                url: url.clone(),
                response: response.text().await.ok(),
            }),
        }
    }
}
