use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned by the social-trends fetcher.
#[derive(Debug, Error)]
pub enum SocialTrendsError {
    /// Caller-supplied parameters were rejected before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No credentials were configured for the social-trends provider.
    #[error("Twitter credentials are not configured (set TWITTER_API_KEY, TWITTER_API_KEY_SECRET, TWITTER_ACCESS_TOKEN and TWITTER_ACCESS_TOKEN_SECRET)")]
    MissingCredentials,

    /// The provider answered but listed no trends for the location.
    #[error("no trending topics found for location {location_id}")]
    NoDataFound { location_id: i64 },

    /// The provider is throttling this account.
    #[error("{}", rate_limit_message(.reset_at.as_ref()))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    /// Network or provider-side failure; the message embeds the cause.
    #[error("error fetching Twitter trends: {0}")]
    Provider(String),

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl SocialTrendsError {
    /// `true` for failures that originate at the provider, including rate
    /// limiting.
    #[must_use]
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Provider(_))
    }
}

fn rate_limit_message(reset_at: Option<&DateTime<Utc>>) -> String {
    let base = "Twitter rate limit reached. Please wait a few minutes and try again.";
    match reset_at {
        Some(at) => format!("{base} The limit resets at {} UTC.", at.format("%H:%M:%S")),
        None => base.to_string(),
    }
}

/// Provider-call failures before translation into [`SocialTrendsError`].
#[derive(Debug, Error)]
pub(crate) enum ProviderFailure {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited")]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    #[error("HTTP {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
