//! Integration tests for `GoogleTrendsClient` using wiremock HTTP mocks.

use trendscope_search::{GoogleTrendsClient, SearchTrendsError, Timeframe};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JAN_1: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z
const DAY: i64 = 86_400;

fn test_client(base_url: &str) -> GoogleTrendsClient {
    GoogleTrendsClient::with_base_url(30, "trendscope-test/0.1", "en-US", 360, base_url)
        .expect("client construction should not fail")
}

fn keywords(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn explore_body(token: &str) -> String {
    let body = serde_json::json!({
        "widgets": [
            {
                "id": "TIMESERIES",
                "title": "Interest over time",
                "token": token,
                "request": {
                    "time": "2024-01-01 2024-01-30",
                    "resolution": "DAY",
                    "comparisonItem": []
                }
            },
            {
                "id": "GEO_MAP",
                "token": "geo-token",
                "request": {}
            }
        ]
    });
    format!(")]}}'\n{body}")
}

fn multiline_body(points: &serde_json::Value) -> String {
    let body = serde_json::json!({
        "default": {
            "timelineData": points,
            "averages": []
        }
    });
    format!(")]}}',\n{body}")
}

/// Thirty daily buckets for two keywords, the last one still partial.
fn month_of_points() -> serde_json::Value {
    let points: Vec<serde_json::Value> = (0..30)
        .map(|day| {
            let mut point = serde_json::json!({
                "time": (JAN_1 + day * DAY).to_string(),
                "formattedTime": format!("Jan {}, 2024", day + 1),
                "value": [40 + day, 100 - 2 * day],
                "hasData": [true, true]
            });
            if day == 29 {
                point["isPartial"] = serde_json::json!(true);
            }
            point
        })
        .collect();
    serde_json::Value::Array(points)
}

async fn mount_handshake(server: &MockServer, points: &serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .and(query_param("hl", "en-US"))
        .and(query_param("tz", "360"))
        .respond_with(ResponseTemplate::new(200).set_body_string(explore_body("TS-TOKEN")))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/multiline"))
        .and(query_param("token", "TS-TOKEN"))
        .respond_with(ResponseTemplate::new(200).set_body_string(multiline_body(points)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fashion_and_style_monthly_returns_daily_table() {
    let server = MockServer::start().await;
    mount_handshake(&server, &month_of_points()).await;

    let client = test_client(&server.uri());
    let table = client
        .fetch_search_trends(&keywords(&["fashion", "style"]), Timeframe::Monthly, "US")
        .await
        .expect("should return interest table");

    assert_eq!(table.keywords(), ["fashion", "style"]);
    assert_eq!(table.len(), 30);
    assert!(table
        .rows()
        .windows(2)
        .all(|w| (w[1].timestamp - w[0].timestamp).num_days() == 1));
    assert!(table
        .rows()
        .iter()
        .all(|r| r.values.len() == 2 && r.values.iter().all(|v| *v <= 100)));
    assert!(table.rows().last().unwrap().is_partial);
    assert!(!table.rows()[0].is_partial);
}

#[tokio::test]
async fn explore_request_carries_keywords_timeframe_and_geo() {
    let server = MockServer::start().await;
    mount_handshake(&server, &month_of_points()).await;

    let client = test_client(&server.uri());
    client
        .fetch_search_trends(&keywords(&[" fashion ", "style"]), Timeframe::Yearly, "GB")
        .await
        .expect("should return interest table");

    let requests = server.received_requests().await.expect("recording enabled");
    let explore = requests
        .iter()
        .find(|r| r.url.path() == "/trends/api/explore")
        .expect("explore should be called");
    let req = explore
        .url
        .query_pairs()
        .find(|(k, _)| k == "req")
        .map(|(_, v)| v.into_owned())
        .expect("req param present");
    let payload: serde_json::Value = serde_json::from_str(&req).unwrap();

    assert_eq!(payload["category"], 0);
    assert_eq!(payload["property"], "");
    assert_eq!(payload["comparisonItem"][0]["keyword"], "fashion");
    assert_eq!(payload["comparisonItem"][1]["keyword"], "style");
    assert_eq!(payload["comparisonItem"][0]["time"], "today 12-m");
    assert_eq!(payload["comparisonItem"][0]["geo"], "GB");
}

#[tokio::test]
async fn empty_timeline_is_no_data_found() {
    let server = MockServer::start().await;
    mount_handshake(&server, &serde_json::json!([])).await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_search_trends(&keywords(&["zzqxv"]), Timeframe::Monthly, "US")
        .await
        .unwrap_err();

    assert!(
        matches!(err, SearchTrendsError::NoDataFound { ref keywords } if keywords == &["zzqxv"]),
        "expected NoDataFound, got: {err:?}"
    );
}

#[tokio::test]
async fn rate_limited_explore_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_search_trends(&keywords(&["fashion"]), Timeframe::Monthly, "US")
        .await
        .unwrap_err();

    match err {
        SearchTrendsError::Provider(msg) => assert!(msg.contains("429"), "got: {msg}"),
        other => panic!("expected Provider, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_on_widgetdata_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(explore_body("TS-TOKEN")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/multiline"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_search_trends(&keywords(&["fashion"]), Timeframe::Quarterly, "US")
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(matches!(err, SearchTrendsError::Provider(_)));
    assert!(msg.contains("HTTP 500"), "got: {msg}");
}

#[tokio::test]
async fn explore_without_timeseries_widget_is_provider_error() {
    let server = MockServer::start().await;

    let body = format!(
        ")]}}'\n{}",
        serde_json::json!({ "widgets": [ { "id": "GEO_MAP", "token": "g", "request": {} } ] })
    );
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_search_trends(&keywords(&["fashion"]), Timeframe::Monthly, "US")
        .await
        .unwrap_err();

    assert!(
        matches!(err, SearchTrendsError::Provider(ref m) if m.contains("interest-over-time widget")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sorry</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_search_trends(&keywords(&["fashion"]), Timeframe::Monthly, "US")
        .await
        .unwrap_err();

    assert!(
        matches!(err, SearchTrendsError::Provider(ref m) if m.contains("explore")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn blank_keyword_is_invalid_input() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());

    let err = client
        .fetch_search_trends(&keywords(&["fashion", "  "]), Timeframe::Monthly, "US")
        .await
        .unwrap_err();

    assert!(matches!(err, SearchTrendsError::InvalidInput(_)));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "no request should be sent");
}
