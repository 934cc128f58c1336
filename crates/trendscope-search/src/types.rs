//! Google Trends request payloads and response shapes.
//!
//! Interest-over-time takes two calls. `explore` receives an [`ExploreRequest`]
//! and answers with a list of [`Widget`]s; the `TIMESERIES` widget carries the
//! token and request body for the `widgetdata/multiline` call, which answers
//! with a [`MultilineResponse`]. Both responses are prefixed with an anti-XSSI
//! guard that must be stripped before parsing.

use serde::{Deserialize, Serialize};

use crate::timeframe::Timeframe;

/// Widget id for the interest-over-time chart in an explore response.
pub const TIMESERIES_WIDGET_ID: &str = "TIMESERIES";

// ---------------------------------------------------------------------------
// explore
// ---------------------------------------------------------------------------

/// The `req` payload of an `explore` call.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExploreRequest {
    pub comparison_item: Vec<ComparisonItem>,
    /// Provider category id. Always 0 (all categories).
    pub category: u32,
    /// Property filter (web, images, news, ...). Empty means web search.
    pub property: String,
}

/// One keyword/window/region triple in an [`ExploreRequest`].
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ComparisonItem {
    pub keyword: String,
    pub time: String,
    pub geo: String,
}

impl ExploreRequest {
    #[must_use]
    pub fn new(keywords: &[String], timeframe: Timeframe, geo: &str) -> Self {
        let comparison_item = keywords
            .iter()
            .map(|keyword| ComparisonItem {
                keyword: keyword.clone(),
                time: timeframe.provider_code().to_string(),
                geo: geo.to_string(),
            })
            .collect();
        Self {
            comparison_item,
            category: 0,
            property: String::new(),
        }
    }
}

/// Body of an `explore` response.
#[derive(Debug, Deserialize)]
pub struct ExploreResponse {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

/// A chart widget descriptor from an `explore` response.
#[derive(Debug, Deserialize)]
pub struct Widget {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Opaque request body, echoed back verbatim to `widgetdata`.
    #[serde(default)]
    pub request: serde_json::Value,
}

// ---------------------------------------------------------------------------
// widgetdata/multiline
// ---------------------------------------------------------------------------

/// Body of a `widgetdata/multiline` response.
#[derive(Debug, Deserialize)]
pub struct MultilineResponse {
    pub default: TimelineEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEnvelope {
    #[serde(default)]
    pub timeline_data: Vec<TimelinePoint>,
}

/// One time bucket of interest-over-time data.
///
/// `time` is the bucket start as a string of Unix seconds. `value` holds one
/// score per requested keyword, in request order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub time: String,
    #[serde(default)]
    pub formatted_time: Option<String>,
    pub value: Vec<u8>,
    #[serde(default)]
    pub is_partial: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explore_request_serializes_like_the_provider_expects() {
        let keywords = vec!["fashion".to_string(), "style".to_string()];
        let req = ExploreRequest::new(&keywords, Timeframe::Monthly, "US");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "comparisonItem": [
                    { "keyword": "fashion", "time": "today 1-m", "geo": "US" },
                    { "keyword": "style", "time": "today 1-m", "geo": "US" }
                ],
                "category": 0,
                "property": ""
            })
        );
    }

    #[test]
    fn timeline_point_defaults_partial_to_false() {
        let point: TimelinePoint =
            serde_json::from_str(r#"{"time":"1704067200","value":[10,20],"hasData":[true,true]}"#)
                .unwrap();
        assert!(!point.is_partial);
        assert_eq!(point.value, vec![10, 20]);
    }

    #[test]
    fn widget_without_token_parses() {
        let resp: ExploreResponse = serde_json::from_str(
            r#"{"widgets":[{"id":"GEO_MAP","request":{}},{"id":"TIMESERIES","token":"abc","request":{"time":"today 1-m"}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.widgets.len(), 2);
        assert!(resp.widgets[0].token.is_none());
        assert_eq!(resp.widgets[1].token.as_deref(), Some("abc"));
    }
}
