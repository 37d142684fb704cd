//! Visual Crossing timeline API client
//!
//! Fetches the forecast document for a free-text location and decodes it into
//! a [`ForecastDocument`].

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::ForecastDocument;

/// Base URL for the Visual Crossing timeline API
pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

/// Errors that can occur when fetching a forecast
///
/// The dashboard collapses all of these into one "location not found" state;
/// the variants exist for logging.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The configured base URL cannot carry a location path segment
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Client for fetching forecasts from the timeline API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastClient {
    /// Create a new ForecastClient against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a new ForecastClient with a custom HTTP client
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Builds an HTTP client with the given request timeout
    pub fn with_timeout(
        timeout: Duration,
        api_key: impl Into<String>,
    ) -> Result<Self, ForecastError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_key))
    }

    /// Point the client at a different timeline endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request URL for a location.
    ///
    /// The location is appended as a single percent-encoded path segment so
    /// that free text such as "New York, NY" or "São Paulo" is safe.
    pub fn forecast_url(&self, location: &str) -> Result<Url, ForecastError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ForecastError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ForecastError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(location);

        url.query_pairs_mut()
            .append_pair("unitGroup", "metric")
            .append_pair("key", &self.api_key)
            .append_pair("contentType", "json");

        Ok(url)
    }

    /// Fetch the forecast for a free-text location
    ///
    /// # Arguments
    /// * `location` - Location query, e.g. "Minsk" or "Vancouver, BC"
    ///
    /// # Returns
    /// * `Ok(ForecastDocument)` - Decoded forecast
    /// * `Err(ForecastError)` - If the request, status check, or parsing fails
    pub async fn fetch_forecast(&self, location: &str) -> Result<ForecastDocument, ForecastError> {
        let url = self.forecast_url(location)?;
        tracing::debug!(
            message = "making forecast request",
            location = %location,
            endpoint = %self.base_url
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::UnexpectedStatus(status));
        }

        let text = response.text().await?;
        parse_forecast(&text)
    }
}

/// Decode a provider response body
pub fn parse_forecast(body: &str) -> Result<ForecastDocument, ForecastError> {
    Ok(serde_json::from_str(body)?)
}
