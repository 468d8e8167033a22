use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use cinetracker_api::api::{create_router, AppState};
use cinetracker_api::models::{Device, Mood, Platform, Weather};
use cinetracker_api::services::{Catalog, ContextSignals};

/// Signals that always report the same context
struct FixedSignals;

#[async_trait::async_trait]
impl ContextSignals for FixedSignals {
    async fn weather(&self) -> Option<Weather> {
        Some(Weather::Snowy)
    }

    async fn mood(&self) -> Option<Mood> {
        Some(Mood::Relaxed)
    }

    async fn platform(&self) -> Option<Platform> {
        Some(Platform::Disney)
    }

    async fn device(&self) -> Option<Device> {
        None
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn create_test_server() -> TestServer {
    let state = AppState::with_parts(Catalog::sample(), Arc::new(FixedSignals));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "6f1c9c2e-8c0a-4f57-9a3e-2a8f4f7d1b11";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(id),
        )
        .await;

    assert_eq!(response.header("x-request-id"), id);

    let generated = server.get("/health").await;
    assert!(!generated.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_list_movies_by_category() {
    let server = create_test_server();

    let response = server.get("/movies").await;
    response.assert_status_ok();
    let movies: Vec<Value> = response.json();
    assert_eq!(movies.len(), 8);

    let response = server.get("/movies?category=animation").await;
    let movies: Vec<Value> = response.json();
    assert_eq!(movies.len(), 2);
    assert!(movies.iter().all(|m| m["category"] == "animation"));
}

#[tokio::test]
async fn test_list_movies_rejects_unknown_category() {
    let server = create_test_server();

    let response = server.get("/movies?category=documentary").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("documentary"));
}

#[tokio::test]
async fn test_get_movie() {
    let server = create_test_server();

    let response = server.get("/movies/5").await;
    response.assert_status_ok();
    let movie: Value = response.json();
    assert_eq!(movie["title"], "Interstellar");

    let response = server.get("/movies/3").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("movie 3"));
}

#[tokio::test]
async fn test_featured_trending_and_continue() {
    let server = create_test_server();

    let featured: Value = server.get("/movies/featured").await.json();
    assert_eq!(featured["id"], 1);

    let trending: Vec<Value> = server.get("/movies/trending").await.json();
    assert_eq!(trending.len(), 1);

    let continuing: Vec<Value> = server.get("/movies/continue").await.json();
    let ids: Vec<u64> = continuing.iter().map(|m| m["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![7, 8]);
}

#[tokio::test]
async fn test_context_from_signals() {
    let server = create_test_server();

    let response = server.get("/context").await;
    response.assert_status_ok();
    let context: Value = response.json();
    assert_eq!(context["mood"], "relaxed");
    assert_eq!(context["weather"], "snowy");
    assert_eq!(context["platform"], "disney");
    assert!(context.get("device").is_none());
    assert!(context["current_time"].is_string());
}

#[tokio::test]
async fn test_suggestions_with_explicit_context() {
    let server = create_test_server();

    let response = server
        .post("/suggestions")
        .json(&json!({
            "context": {
                "current_time": "2024-09-10T04:00:00",
                "mood": "energetic"
            }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["context"]["mood"], "energetic");

    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 15);

    let mood_ids: Vec<u64> = suggestions
        .iter()
        .filter(|s| s["type"] == "mood")
        .map(|s| s["movie"]["id"].as_u64().unwrap())
        .collect();
    // Every sample movie except Elemental carries Action or Adventure
    assert_eq!(mood_ids.len(), 7);
    assert!(!mood_ids.contains(&4));

    let confidences: Vec<f64> = suggestions
        .iter()
        .map(|s| s["confidence"].as_f64().unwrap())
        .collect();
    assert!(confidences.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_suggestions_accept_utc_timestamp() {
    let server = create_test_server();

    let response = server
        .post("/suggestions")
        .json(&json!({
            "context": {
                "current_time": "2024-09-10T19:00:00.000Z",
                "platform": "netflix"
            }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["context"]["current_time"], "2024-09-10T19:00:00");

    // 19:00 on a weekday: Interstellar is an evening feature film
    let interstellar = body["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["movie"]["id"] == 5)
        .unwrap();
    assert_eq!(interstellar["type"], "time");
    assert_eq!(interstellar["context"]["time_of_day"], "evening");
}

#[tokio::test]
async fn test_suggestions_with_detected_context() {
    let server = create_test_server();

    let response = server.post("/suggestions").json(&json!({})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["context"]["mood"], "relaxed");

    let suggestions = body["suggestions"].as_array().unwrap();
    // Relaxed mood matches Spider-Verse and Elemental via Animation
    let ids: Vec<u64> = suggestions
        .iter()
        .map(|s| s["movie"]["id"].as_u64().unwrap())
        .collect();
    assert!(ids.contains(&1));
    assert!(ids.contains(&4));
}

#[tokio::test]
async fn test_suggestions_reject_bad_timestamp() {
    let server = create_test_server();

    let response = server
        .post("/suggestions")
        .json(&json!({ "context": { "current_time": "yesterday" } }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_watchlist_flow() {
    let server = create_test_server();

    let response = server
        .post("/library/watchlist")
        .json(&json!({ "movie_id": 5 }))
        .await;
    response.assert_status(StatusCode::CREATED);

    // Adding twice is a no-op
    let response = server
        .post("/library/watchlist")
        .json(&json!({ "movie_id": 5 }))
        .await;
    response.assert_status_ok();
    let watchlist: Vec<Value> = response.json();
    assert_eq!(watchlist.len(), 1);

    let response = server.delete("/library/watchlist/5").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let watchlist: Vec<Value> = server.get("/library/watchlist").await.json();
    assert!(watchlist.is_empty());

    let response = server.delete("/library/watchlist/5").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_unknown_movie_to_library() {
    let server = create_test_server();

    let response = server
        .post("/library/watched")
        .json(&json!({ "movie_id": 999 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_watched_and_watch_later_are_separate() {
    let server = create_test_server();

    server
        .post("/library/watched")
        .json(&json!({ "movie_id": 8 }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/library/watch-later")
        .json(&json!({ "movie_id": 9 }))
        .await
        .assert_status(StatusCode::CREATED);

    let watched: Vec<Value> = server.get("/library/watched").await.json();
    let later: Vec<Value> = server.get("/library/watch-later").await.json();
    assert_eq!(watched.len(), 1);
    assert_eq!(watched[0]["id"], 8);
    assert_eq!(later.len(), 1);
    assert_eq!(later[0]["id"], 9);
}
