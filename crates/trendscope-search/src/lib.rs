//! Search-interest trends (Google Trends) for trendscope.
//!
//! [`GoogleTrendsClient::fetch_search_trends`] validates a keyword list,
//! runs the provider's explore/widget handshake and returns an
//! [`InterestTable`]: one row per time bucket, one 0-100 score per keyword,
//! plus the provider's partial-period flag.

pub mod client;
pub mod error;
pub mod keywords;
pub mod normalize;
pub mod timeframe;
pub mod types;

pub use client::GoogleTrendsClient;
pub use error::SearchTrendsError;
pub use keywords::{split_keywords, validate_keywords};
pub use normalize::{InterestRow, InterestSeries, InterestTable};
pub use timeframe::Timeframe;
