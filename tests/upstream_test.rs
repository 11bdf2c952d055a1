/// Integration test for the Data API client and a full refresh cycle
///
/// A local axum server stands in for the search and videos endpoints; the
/// real `YouTubeClient` talks to it over loopback.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use livewatch::fetcher::Fetcher;
use livewatch::upstream::youtube::YouTubeClient;
use livewatch::upstream::{FetchError, VideoSource};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Upstream {
    search_body: Option<String>,
    search_status: Option<u16>,
    videos_body: Option<String>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn search(State(up): State<Upstream>, Query(query): Query<HashMap<String, String>>) -> (StatusCode, String) {
    up.queries.lock().unwrap().push(query);
    let status = StatusCode::from_u16(up.search_status.unwrap_or(200)).unwrap();
    (status, up.search_body.clone().unwrap_or_default())
}

async fn videos(State(up): State<Upstream>, Query(query): Query<HashMap<String, String>>) -> (StatusCode, String) {
    up.queries.lock().unwrap().push(query);
    match up.videos_body.clone() {
        Some(body) => (StatusCode::OK, body),
        None => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
    }
}

/// Helper: serve the fake upstream on an ephemeral port
async fn spawn_upstream(upstream: Upstream) -> YouTubeClient {
    let app = Router::new()
        .route("/search", get(search))
        .route("/videos", get(videos))
        .with_state(upstream);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind fake upstream");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    YouTubeClient::new(
        "test-key".to_string(),
        format!("http://{}/search", addr),
        format!("http://{}/videos", addr),
        Some(std::time::Duration::from_secs(5)),
    )
}

const TWO_RECENT: &str = r#"{"items":[
    {"id":{"kind":"youtube#video","videoId":"first"},"snippet":{"liveBroadcastContent":"none","publishedAt":"2024-01-01T00:00:00Z"}},
    {"id":{"kind":"youtube#video","videoId":"second"},"snippet":{"liveBroadcastContent":"none","publishedAt":"2024-02-01T00:00:00Z"}}
]}"#;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_search_sends_channel_and_filters() {
    let upstream = Upstream {
        search_body: Some(TWO_RECENT.to_string()),
        ..Default::default()
    };
    let queries = upstream.queries.clone();
    let client = spawn_upstream(upstream).await;

    let response = client.search("UC123").await.unwrap();
    assert_eq!(response.items.unwrap().len(), 2);

    let query = queries.lock().unwrap()[0].clone();
    assert_eq!(query["channelId"], "UC123");
    assert_eq!(query["key"], "test-key");
    assert_eq!(query["part"], "snippet");
    assert_eq!(query["order"], "date");
    assert_eq!(query["type"], "video");
    assert_eq!(query["videoType"], "any");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_search_error_status() {
    let client = spawn_upstream(Upstream {
        search_status: Some(403),
        search_body: Some(r#"{"error":{"code":403}}"#.to_string()),
        ..Default::default()
    })
    .await;

    match client.search("UC123").await {
        Err(FetchError::Status(403)) => {}
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_end_time_is_best_effort() {
    let upstream = Upstream {
        videos_body: Some(r#"{"items":[{"liveStreamingDetails":{"actualEndTime":"2024-02-02T00:00:00Z"}}]}"#.to_string()),
        ..Default::default()
    };
    let queries = upstream.queries.clone();
    let client = spawn_upstream(upstream).await;
    assert_eq!(client.end_time("second").await.as_deref(), Some("2024-02-02T00:00:00Z"));

    let query = queries.lock().unwrap()[0].clone();
    assert_eq!(query["id"], "second");
    assert_eq!(query["part"], "liveStreamingDetails");

    // details endpoint failing yields no value rather than an error
    let failing = spawn_upstream(Upstream::default()).await;
    assert_eq!(failing.end_time("second").await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_full_cycle_prefers_end_time() {
    let client = spawn_upstream(Upstream {
        search_body: Some(TWO_RECENT.to_string()),
        videos_body: Some(r#"{"items":[{"liveStreamingDetails":{"actualEndTime":"2024-02-02T00:00:00Z"}}]}"#.to_string()),
        ..Default::default()
    })
    .await;

    let snap = Fetcher::new(client, "UC123".to_string()).fetch().await;
    assert_eq!(snap.status, "none");
    assert_eq!(snap.video_id, "second");
    assert_eq!(snap.updated, "2024-02-02T00:00:00Z");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_full_cycle_falls_back_to_publish_time() {
    let client = spawn_upstream(Upstream {
        search_body: Some(TWO_RECENT.to_string()),
        videos_body: Some(r#"{"items":[]}"#.to_string()),
        ..Default::default()
    })
    .await;

    let snap = Fetcher::new(client, "UC123".to_string()).fetch().await;
    assert_eq!(snap.video_id, "second");
    assert_eq!(snap.updated, "2024-02-01T00:00:00Z");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_full_cycle_malformed_search() {
    let client = spawn_upstream(Upstream {
        search_body: Some("not json".to_string()),
        ..Default::default()
    })
    .await;

    let snap = Fetcher::new(client, "UC123".to_string()).fetch().await;
    assert!(snap.is_none());
}
