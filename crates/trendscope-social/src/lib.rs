//! Social trending topics (Twitter/X `trends/place`) for trendscope.
//!
//! [`TwitterTrendsClient::fetch_social_trends`] returns the provider's ranked
//! topic list for a location. [`rank::top_by_volume`] is the usual
//! post-processing step: drop topics without a volume, sort by volume, keep
//! the top ten.

pub mod client;
pub mod error;
pub mod locations;
pub mod oauth;
pub mod rank;
pub mod types;

pub use client::TwitterTrendsClient;
pub use error::SocialTrendsError;
pub use locations::{location_name, resolve_location, KNOWN_LOCATIONS, WORLDWIDE};
pub use rank::{top_by_volume, RankedTable, RankedTopic, TOP_TRENDS_LIMIT};
pub use types::{TopicTable, TrendingTopic};
