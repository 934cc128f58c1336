use thiserror::Error;

/// Errors returned by the search-trends fetcher.
#[derive(Debug, Error)]
pub enum SearchTrendsError {
    /// Caller-supplied parameters were rejected before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A timeframe label outside the supported set.
    #[error("unknown timeframe '{0}' (expected Monthly, Quarterly, Yearly or All Time)")]
    UnknownTimeframe(String),

    /// The provider answered but had no data points for the keywords.
    #[error("no data found for the given keywords: {}", keywords.join(", "))]
    NoDataFound { keywords: Vec<String> },

    /// Network or provider-side failure; the message embeds the cause.
    #[error("error fetching search trends: {0}")]
    Provider(String),

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Provider-call failures before translation into [`SearchTrendsError`].
#[derive(Debug, Error)]
pub(crate) enum ProviderFailure {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} rate limited the request (HTTP 429)")]
    RateLimited { endpoint: &'static str },

    #[error("{endpoint} returned HTTP {status}")]
    UnexpectedStatus { endpoint: &'static str, status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("explore response has no TIMESERIES widget")]
    MissingTimeseriesWidget,

    #[error("malformed timeline data: {0}")]
    MalformedTimeline(String),
}
