//! Wire types for the `trends/place` endpoint and the public topic model.

use serde::Deserialize;
use trendscope_core::Tabular;

/// One element of the `trends/place.json` response array.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlaceTrends {
    #[serde(default)]
    pub trends: Vec<RawTrend>,
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub locations: Vec<TrendLocation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTrend {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub promoted_content: Option<serde_json::Value>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendLocation {
    pub name: String,
    pub woeid: i64,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Error code the provider uses for an exhausted rate-limit window.
pub(crate) const RATE_LIMIT_CODE: i64 = 88;

/// A trending topic as reported by the provider, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingTopic {
    pub name: String,
    /// Posts in the last 24 hours; `None` when the provider withholds it.
    pub volume: Option<u64>,
    pub url: Option<String>,
    /// Paid placement rather than organic trend.
    pub promoted: bool,
}

impl From<RawTrend> for TrendingTopic {
    fn from(raw: RawTrend) -> Self {
        let promoted = raw
            .promoted_content
            .as_ref()
            .is_some_and(|v| !v.is_null());
        if raw.query.is_none() {
            tracing::trace!(name = %raw.name, "trend has no search query");
        }
        Self {
            name: raw.name,
            volume: raw.tweet_volume,
            url: raw.url,
            promoted,
        }
    }
}

/// CSV view of a topic list: `name`, `volume`, `url`.
///
/// A missing volume or URL is written as an empty cell.
#[derive(Debug, Clone, Copy)]
pub struct TopicTable<'a>(pub &'a [TrendingTopic]);

impl Tabular for TopicTable<'_> {
    fn headers(&self) -> Vec<String> {
        vec!["name".to_string(), "volume".to_string(), "url".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|t| {
                vec![
                    t.name.clone(),
                    t.volume.map(|v| v.to_string()).unwrap_or_default(),
                    t.url.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACE_BODY: &str = r##"[{
        "trends": [
            {"name": "#Fashion", "url": "http://twitter.com/search?q=%23Fashion",
             "promoted_content": null, "query": "%23Fashion", "tweet_volume": 52000},
            {"name": "Style", "url": "http://twitter.com/search?q=Style",
             "promoted_content": null, "query": "Style", "tweet_volume": null},
            {"name": "Sponsored", "promoted_content": {"id": 1}}
        ],
        "as_of": "2024-05-01T12:00:00Z",
        "created_at": "2024-05-01T11:55:00Z",
        "locations": [{"name": "Worldwide", "woeid": 1}]
    }]"##;

    #[test]
    fn deserializes_place_trends() {
        let places: Vec<PlaceTrends> = serde_json::from_str(PLACE_BODY).unwrap();
        assert_eq!(places.len(), 1);
        let place = &places[0];
        assert_eq!(place.trends.len(), 3);
        assert_eq!(place.locations[0].woeid, 1);
        assert_eq!(place.trends[0].tweet_volume, Some(52_000));
        assert_eq!(place.trends[1].tweet_volume, None);
    }

    #[test]
    fn converts_raw_trends_to_topics() {
        let mut places: Vec<PlaceTrends> = serde_json::from_str(PLACE_BODY).unwrap();
        let topics: Vec<TrendingTopic> = places
            .remove(0)
            .trends
            .into_iter()
            .map(TrendingTopic::from)
            .collect();
        assert_eq!(topics[0].name, "#Fashion");
        assert!(!topics[0].promoted);
        assert!(topics[2].promoted);
        assert_eq!(topics[2].url, None);
    }

    #[test]
    fn error_body_parses_codes() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errors":[{"code":88,"message":"Rate limit exceeded"}]}"#)
                .unwrap();
        assert_eq!(body.errors[0].code, RATE_LIMIT_CODE);
        assert_eq!(body.errors[0].message, "Rate limit exceeded");
    }

    #[test]
    fn topic_table_leaves_missing_cells_empty() {
        let topics = vec![TrendingTopic {
            name: "Style".to_string(),
            volume: None,
            url: None,
            promoted: false,
        }];
        let table = TopicTable(&topics);
        assert_eq!(table.headers(), vec!["name", "volume", "url"]);
        assert_eq!(table.rows(), vec![vec!["Style", "", ""]]);
    }
}
