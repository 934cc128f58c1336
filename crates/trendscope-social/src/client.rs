//! HTTP client for the Twitter/X v1.1 `trends/place` endpoint.
//!
//! Each request is signed with OAuth 1.0a user-context credentials. Provider
//! failures go through [`translate_failure`], which keeps rate limiting as a
//! distinct [`SocialTrendsError::RateLimited`] and folds everything else into
//! [`SocialTrendsError::Provider`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use trendscope_core::{AppConfig, TwitterCredentials};

use crate::error::{ProviderFailure, SocialTrendsError};
use crate::locations::location_name;
use crate::oauth::authorization_header;
use crate::types::{ApiErrorBody, PlaceTrends, TrendingTopic, RATE_LIMIT_CODE};

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/";
const TRENDS_PATH: &str = "1.1/trends/place.json";
const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// Client for location-based trending topics.
pub struct TwitterTrendsClient {
    client: Client,
    credentials: TwitterCredentials,
    trends_url: Url,
}

impl TwitterTrendsClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SocialTrendsError::Client`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        credentials: TwitterCredentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SocialTrendsError> {
        Self::with_base_url(credentials, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a production client from the loaded [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SocialTrendsError::MissingCredentials`] if no Twitter
    /// credentials are configured, or [`SocialTrendsError::Client`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SocialTrendsError> {
        let credentials = config
            .twitter
            .clone()
            .ok_or(SocialTrendsError::MissingCredentials)?;
        Self::new(credentials, config.request_timeout_secs, &config.user_agent)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SocialTrendsError::Client`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`SocialTrendsError::InvalidInput`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        credentials: TwitterCredentials,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SocialTrendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let trends_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .and_then(|base| base.join(TRENDS_PATH))
            .map_err(|e| {
                SocialTrendsError::InvalidInput(format!("invalid base URL '{base_url}': {e}"))
            })?;

        Ok(Self {
            client,
            credentials,
            trends_url,
        })
    }

    /// Fetches the current trending topics for `location_id` (a WOEID),
    /// in provider order.
    ///
    /// # Errors
    ///
    /// - [`SocialTrendsError::InvalidInput`] if `location_id` is below 1.
    ///   No request is sent.
    /// - [`SocialTrendsError::RateLimited`] if the provider is throttling.
    /// - [`SocialTrendsError::NoDataFound`] if the location has no trends.
    /// - [`SocialTrendsError::Provider`] on network failure, any other
    ///   non-2xx status or an unexpected response shape.
    pub async fn fetch_social_trends(
        &self,
        location_id: i64,
    ) -> Result<Vec<TrendingTopic>, SocialTrendsError> {
        if location_id < 1 {
            return Err(SocialTrendsError::InvalidInput(format!(
                "location id must be a positive WOEID, got {location_id}"
            )));
        }

        tracing::debug!(
            location_id,
            location = location_name(location_id).unwrap_or("unnamed"),
            "fetching social trends"
        );

        let place = self
            .request_place(location_id)
            .await
            .map_err(translate_failure)?;

        if let Some(loc) = place.locations.first() {
            tracing::debug!(
                woeid = loc.woeid,
                name = %loc.name,
                as_of = place.as_of.as_deref().unwrap_or(""),
                created_at = place.created_at.as_deref().unwrap_or(""),
                "trend list received"
            );
        }

        let topics: Vec<TrendingTopic> = place.trends.into_iter().map(TrendingTopic::from).collect();
        if topics.is_empty() {
            tracing::warn!(location_id, "social-trends provider returned no topics");
            return Err(SocialTrendsError::NoDataFound { location_id });
        }

        tracing::debug!(count = topics.len(), "social trends fetched");
        Ok(topics)
    }

    /// Sends the signed request and returns the first place entry.
    async fn request_place(&self, location_id: i64) -> Result<PlaceTrends, ProviderFailure> {
        let id = location_id.to_string();
        let query = [("id", id.as_str())];
        let auth = authorization_header(&self.credentials, "GET", self.trends_url.as_str(), &query);

        let response = self
            .client
            .get(self.trends_url.clone())
            .query(&query)
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        let status = response.status();
        let reset_at = rate_limit_reset(response.headers());
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_failure(status, &body, reset_at));
        }

        let places: Vec<PlaceTrends> =
            serde_json::from_str(&body).map_err(|e| ProviderFailure::Deserialize {
                context: format!("trends/place id={location_id}"),
                source: e,
            })?;

        // The endpoint wraps a single place in an array.
        Ok(places.into_iter().next().unwrap_or_default())
    }
}

/// Classifies a non-2xx response. A 429, or any status carrying error code
/// 88, is a rate limit.
fn status_failure(status: StatusCode, body: &str, reset_at: Option<DateTime<Utc>>) -> ProviderFailure {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

    if status == StatusCode::TOO_MANY_REQUESTS
        || parsed.errors.iter().any(|e| e.code == RATE_LIMIT_CODE)
    {
        return ProviderFailure::RateLimited { reset_at };
    }

    let message = parsed
        .errors
        .iter()
        .map(|e| format!("{} (code {})", e.message, e.code))
        .collect::<Vec<_>>()
        .join("; ");
    ProviderFailure::UnexpectedStatus {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            message
        },
    }
}

/// Parses the `x-rate-limit-reset` header (Unix seconds).
fn rate_limit_reset(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    headers
        .get(RATE_LIMIT_RESET_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Maps a provider-call failure onto the public error taxonomy.
fn translate_failure(failure: ProviderFailure) -> SocialTrendsError {
    tracing::warn!(error = %failure, "social-trends provider call failed");
    match failure {
        ProviderFailure::RateLimited { reset_at } => SocialTrendsError::RateLimited { reset_at },
        ProviderFailure::Http(e) => SocialTrendsError::Provider(format!("request failed: {e}")),
        ProviderFailure::UnexpectedStatus { status, message } => {
            SocialTrendsError::Provider(format!("HTTP {status}: {message}"))
        }
        ProviderFailure::Deserialize { context, source } => {
            SocialTrendsError::Provider(format!("unexpected response from {context}: {source}"))
        }
    }
}
