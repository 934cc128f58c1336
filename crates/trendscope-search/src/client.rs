//! HTTP client for the Google Trends web API.
//!
//! Wraps `reqwest` with the explore → widgetdata handshake, anti-XSSI prefix
//! stripping and typed response deserialization. Every provider-side failure
//! is funnelled through [`translate_failure`] so callers only ever see the
//! [`SearchTrendsError`] taxonomy.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use trendscope_core::AppConfig;

use crate::error::{ProviderFailure, SearchTrendsError};
use crate::keywords::validate_keywords;
use crate::normalize::{normalize_timeline, InterestTable};
use crate::timeframe::Timeframe;
use crate::types::{
    ExploreRequest, ExploreResponse, MultilineResponse, TimelinePoint, Widget,
    TIMESERIES_WIDGET_ID,
};

const DEFAULT_BASE_URL: &str = "https://trends.google.com/";
const EXPLORE_PATH: &str = "trends/api/explore";
const MULTILINE_PATH: &str = "trends/api/widgetdata/multiline";

/// Client for the Google Trends interest-over-time endpoints.
///
/// Holds no per-request state: each [`fetch_search_trends`] call primes
/// session cookies, runs the explore/widgetdata handshake and returns a fresh
/// table. Use [`GoogleTrendsClient::new`] for production or
/// [`GoogleTrendsClient::with_base_url`] to point at a mock server in tests.
///
/// [`fetch_search_trends`]: GoogleTrendsClient::fetch_search_trends
pub struct GoogleTrendsClient {
    client: Client,
    base_url: Url,
    explore_url: Url,
    multiline_url: Url,
    host_language: String,
    tz_offset_minutes: i32,
}

impl GoogleTrendsClient {
    /// Creates a new client pointed at the production Google Trends API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchTrendsError::Client`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        host_language: &str,
        tz_offset_minutes: i32,
    ) -> Result<Self, SearchTrendsError> {
        Self::with_base_url(
            timeout_secs,
            user_agent,
            host_language,
            tz_offset_minutes,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a production client from the loaded [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchTrendsError::Client`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchTrendsError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            &config.host_language,
            config.tz_offset_minutes,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchTrendsError::Client`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`SearchTrendsError::InvalidInput`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        host_language: &str,
        tz_offset_minutes: i32,
        base_url: &str,
    ) -> Result<Self, SearchTrendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;

        // Exactly one trailing slash, so `join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| {
            SearchTrendsError::InvalidInput(format!("invalid base URL '{base_url}': {reason}"))
        };
        let base_url = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let explore_url = base_url
            .join(EXPLORE_PATH)
            .map_err(|e| invalid(e.to_string()))?;
        let multiline_url = base_url
            .join(MULTILINE_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            explore_url,
            multiline_url,
            host_language: host_language.to_owned(),
            tz_offset_minutes,
        })
    }

    /// Fetches interest over time for `keywords` in `geo` across `timeframe`.
    ///
    /// Keywords are trimmed before the request is built. The returned table
    /// still carries the partial-period flag; use [`InterestTable::series`]
    /// for a chart-ready view.
    ///
    /// # Errors
    ///
    /// - [`SearchTrendsError::InvalidInput`] if `keywords` is empty or has a
    ///   blank entry. No request is sent.
    /// - [`SearchTrendsError::NoDataFound`] if the provider returns no data
    ///   points.
    /// - [`SearchTrendsError::Provider`] on network failure, non-2xx status
    ///   (including rate limiting) or an unexpected response shape.
    pub async fn fetch_search_trends(
        &self,
        keywords: &[String],
        timeframe: Timeframe,
        geo: &str,
    ) -> Result<InterestTable, SearchTrendsError> {
        let keywords = validate_keywords(keywords)?;
        let payload = ExploreRequest::new(&keywords, timeframe, geo);

        tracing::debug!(
            keywords = ?keywords,
            timeframe = timeframe.provider_code(),
            geo,
            "fetching search trends"
        );

        let points = self
            .request_timeline(&payload)
            .await
            .map_err(translate_failure)?;

        if points.is_empty() {
            tracing::warn!(keywords = ?keywords, geo, "search-trends provider returned no data");
            return Err(SearchTrendsError::NoDataFound { keywords });
        }

        let table = normalize_timeline(&keywords, points).map_err(translate_failure)?;

        tracing::debug!(
            rows = table.len(),
            columns = table.keywords().len(),
            "search trends fetched"
        );

        Ok(table)
    }

    /// Runs the explore → widgetdata handshake and returns the raw timeline.
    async fn request_timeline(
        &self,
        payload: &ExploreRequest,
    ) -> Result<Vec<TimelinePoint>, ProviderFailure> {
        self.prime_cookies().await;

        let req = serde_json::to_string(payload).map_err(|e| ProviderFailure::Deserialize {
            context: "explore request payload",
            source: e,
        })?;
        let explore: ExploreResponse = self
            .get_guarded_json(
                &self.explore_url,
                &[
                    ("hl", self.host_language.clone()),
                    ("tz", self.tz_offset_minutes.to_string()),
                    ("req", req),
                ],
                "explore",
            )
            .await?;

        let (token, widget_request) = timeseries_widget(explore.widgets)?;
        let widget_req =
            serde_json::to_string(&widget_request).map_err(|e| ProviderFailure::Deserialize {
                context: "widget request",
                source: e,
            })?;

        let multiline: MultilineResponse = self
            .get_guarded_json(
                &self.multiline_url,
                &[
                    ("hl", self.host_language.clone()),
                    ("tz", self.tz_offset_minutes.to_string()),
                    ("req", widget_req),
                    ("token", token),
                ],
                "widgetdata/multiline",
            )
            .await?;

        Ok(multiline.default.timeline_data)
    }

    /// Visits the provider home page so the cookie store holds a session
    /// cookie before `explore`. Failures are logged and otherwise ignored;
    /// the explore call reports the real error if the session is refused.
    async fn prime_cookies(&self) {
        let region = region_of(&self.host_language);
        match self
            .client
            .get(self.base_url.clone())
            .query(&[("geo", region)])
            .send()
            .await
        {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), "cookie priming request was rejected");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "cookie priming request failed");
            }
        }
    }

    /// Sends a GET request, checks the status, strips the anti-XSSI prefix
    /// and parses the remaining body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderFailure::RateLimited`] on 429,
    /// [`ProviderFailure::UnexpectedStatus`] on any other non-2xx status,
    /// [`ProviderFailure::Http`] on network failure and
    /// [`ProviderFailure::Deserialize`] if the body is not the expected JSON.
    async fn get_guarded_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, String)],
        endpoint: &'static str,
    ) -> Result<T, ProviderFailure> {
        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderFailure::RateLimited { endpoint });
        }
        if !status.is_success() {
            return Err(ProviderFailure::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(strip_xssi_prefix(&body)).map_err(|e| ProviderFailure::Deserialize {
            context: endpoint,
            source: e,
        })
    }
}

/// Maps a provider-call failure onto the public error taxonomy.
///
/// Search trends have no distinguished rate-limit error: a 429 is reported
/// as a provider error like any other refused request.
fn translate_failure(failure: ProviderFailure) -> SearchTrendsError {
    tracing::warn!(error = %failure, "search-trends provider call failed");
    let message = match failure {
        ProviderFailure::Http(e) => format!("request failed: {e}"),
        ProviderFailure::RateLimited { endpoint } => format!(
            "{endpoint} refused the request with HTTP 429 (too many requests); try again later"
        ),
        ProviderFailure::UnexpectedStatus { endpoint, status } => {
            format!("{endpoint} returned HTTP {status}")
        }
        ProviderFailure::Deserialize { context, source } => {
            format!("unexpected response from {context}: {source}")
        }
        ProviderFailure::MissingTimeseriesWidget => {
            "explore response did not include an interest-over-time widget".to_string()
        }
        ProviderFailure::MalformedTimeline(reason) => format!("malformed timeline data: {reason}"),
    };
    SearchTrendsError::Provider(message)
}

/// Picks the `TIMESERIES` widget and returns its token and request body.
fn timeseries_widget(widgets: Vec<Widget>) -> Result<(String, serde_json::Value), ProviderFailure> {
    widgets
        .into_iter()
        .find(|w| w.id == TIMESERIES_WIDGET_ID)
        .and_then(|w| w.token.map(|token| (token, w.request)))
        .ok_or(ProviderFailure::MissingTimeseriesWidget)
}

/// Drops the anti-XSSI guard (`)]}'` and similar) in front of the JSON body.
fn strip_xssi_prefix(body: &str) -> &str {
    body.find(|c| c == '{' || c == '[')
        .map_or(body, |start| &body[start..])
}

/// Region part of a language tag: `"en-US"` → `"US"`. Falls back to `"US"`.
fn region_of(host_language: &str) -> &str {
    host_language
        .rsplit_once('-')
        .map(|(_, region)| region)
        .filter(|r| !r.is_empty())
        .unwrap_or("US")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
