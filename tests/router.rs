use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mindbridge::{AppState, router};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

#[derive(Debug, Deserialize)]
struct Insights {
    entry_count: usize,
    streak: u32,
    average_mood: f64,
    trend: String,
    recent: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Transcript {
    messages: Vec<Value>,
    pending: usize,
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn insights(app: &Router) -> Insights {
    let (status, body) = send(app, get("/api/insights")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn transcript(app: &Router) -> Transcript {
    let (status, body) = send(app, get("/api/chat")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn mood_submission_appends_and_bumps_streak() {
    let app = router(AppState::new());

    for mood in 1..=5u8 {
        let before = insights(&app).await;
        let (status, body) = send(
            &app,
            post_json("/api/mood", json!({ "mood": mood, "note": "evening check-in" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["recorded"]["mood"], json!(mood));
        assert_eq!(response["recorded"]["note"], json!("evening check-in"));

        let after = insights(&app).await;
        assert_eq!(after.entry_count, before.entry_count + 1);
        assert_eq!(after.streak, before.streak + 1);
    }

    let summary = insights(&app).await;
    assert_eq!(summary.average_mood, 3.0);
    assert_eq!(summary.trend, "positive");
    assert_eq!(summary.recent[0]["mood"], json!(5));
}

#[tokio::test]
async fn missing_mood_is_a_silent_noop() {
    let app = router(AppState::new());

    let (status, body) = send(&app, post_json("/api/mood", json!({ "note": "no level" }))).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_slice(&body).unwrap();
    assert!(response["recorded"].is_null());
    assert_eq!(response["entry_count"], json!(0));

    let summary = insights(&app).await;
    assert_eq!(summary.entry_count, 0);
    assert_eq!(summary.streak, 1);
    assert_eq!(summary.trend, "none");
}

#[tokio::test]
async fn out_of_range_mood_is_rejected() {
    let app = router(AppState::new());

    for mood in [json!(0), json!(6), json!(256), json!(-1), json!(4.5), json!("calm"), json!([3])] {
        let (status, _) = send(&app, post_json("/api/mood", json!({ "mood": mood.clone() }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "mood {mood}");
    }

    let request = Request::post("/mood")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("mood=300"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(insights(&app).await.entry_count, 0);
}

#[tokio::test]
async fn mood_form_redirects_home() {
    let app = router(AppState::new());
    let request = Request::post("/mood")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("mood=2&note="))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let summary = insights(&app).await;
    assert_eq!(summary.entry_count, 1);
    assert!(summary.recent[0].get("note").is_none());
}

#[tokio::test(start_paused = true)]
async fn chat_reply_follows_user_message() {
    let app = router(AppState::new());

    let (status, body) = send(&app, post_json("/api/chat", json!({ "text": "I feel so sad today" }))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let accepted: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(accepted["reply_after_ms"], json!(1000));

    let waiting = transcript(&app).await;
    assert_eq!(waiting.messages.len(), 1);
    assert_eq!(waiting.pending, 1);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let done = transcript(&app).await;
    assert_eq!(done.pending, 0);
    assert_eq!(done.messages.len(), 2);
    assert_eq!(done.messages[0]["sender"], json!("user"));
    assert_eq!(done.messages[0]["text"], json!("I feel so sad today"));
    assert_eq!(done.messages[1]["sender"], json!("assistant"));
    assert!(done.messages[1]["text"].as_str().unwrap().contains("feeling sad"));
}

#[tokio::test]
async fn empty_chat_text_is_ignored() {
    let app = router(AppState::new());

    let (status, body) = send(&app, post_json("/api/chat", json!({ "text": "   " }))).await;
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_slice(&body).unwrap();
    assert!(response["message"].is_null());

    let current = transcript(&app).await;
    assert!(current.messages.is_empty());
    assert_eq!(current.pending, 0);
}

#[tokio::test]
async fn tab_switching_keeps_session_state() {
    let app = router(AppState::new());
    send(&app, post_json("/api/mood", json!({ "mood": 4 }))).await;
    send(&app, post_json("/api/chat", json!({ "text": "hello" }))).await;

    let before = insights(&app).await;
    for tab in ["chat", "dashboard", "resources", "mood", "dashboard"] {
        let (status, body) = send(&app, post_json("/api/tab", json!({ "tab": tab }))).await;
        assert_eq!(status, StatusCode::OK);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["active_tab"], json!(tab));
    }

    let after = insights(&app).await;
    assert_eq!(after.entry_count, before.entry_count);
    assert_eq!(after.streak, before.streak);
    assert!(!transcript(&app).await.messages.is_empty());

    let (status, _) = send(&app, post_json("/api/tab", json!({ "tab": "settings" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn index_renders_requested_tab() {
    let app = router(AppState::new());

    let (status, body) = send(&app, get("/?tab=resources")).await;
    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains(r#"data-active-tab="resources""#));

    let (_, body) = send(&app, get("/")).await;
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains(r#"data-active-tab="resources""#));
}

#[tokio::test]
async fn resources_are_listed() {
    let app = router(AppState::new());
    let (status, body) = send(&app, get("/api/resources")).await;
    assert_eq!(status, StatusCode::OK);

    let directory: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(directory["emergency"][0]["title"], json!("Crisis Hotline"));
    assert_eq!(directory["regular"].as_array().unwrap().len(), 5);
    assert_eq!(directory["self_care_tips"].as_array().unwrap().len(), 4);
}
