//! HTTP routes driven in-process through the router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use ohio_therapy::config::TherapyConfig;
use ohio_therapy::engine::{SAFETY_RESOURCES, TherapistResponse, get_welcome_message};
use ohio_therapy::web::create_router;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> axum::Router {
    create_router(&TherapyConfig::default()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let response = app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "online");

    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_welcome() {
    let response = app().oneshot(get("/api/welcome")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], get_welcome_message());
}

#[tokio::test]
async fn test_chat_standard_reply() {
    let response = app()
        .oneshot(post_json("/api/chat", r#"{"message": "  I feel so anxious and scared  "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["emotion"], "anxious");
    assert_eq!(json["intent"], "exploring_feelings");
    assert_eq!(json["isCrisis"], false);
    assert_eq!(json["strategy"], "standard_care");

    let parsed: TherapistResponse = serde_json::from_value(json).unwrap();
    assert!(parsed.message.contains("\n\n"));
}

#[tokio::test]
async fn test_chat_crisis_reply() {
    let response = app()
        .oneshot(post_json("/api/chat", r#"{"message": "I want to kill myself"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["isCrisis"], true);
    assert_eq!(json["strategy"], "support");
    assert_eq!(json["intent"], "safety");
    let message = json["message"].as_str().unwrap();
    for resource in SAFETY_RESOURCES {
        assert!(message.contains(resource));
    }
}

#[tokio::test]
async fn test_chat_ignores_history_field() {
    let response = app()
        .oneshot(post_json(
            "/api/chat",
            r#"{"message": "", "conversation_history": [{"role": "user"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["emotion"], "general");
}

#[tokio::test]
async fn test_chat_rejects_malformed_body() {
    let response = app()
        .oneshot(post_json("/api/chat", r#"{"text": 5}"#))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_prompt_preview() {
    let response = app()
        .oneshot(post_json("/api/prompt", r#"{"message": "what should I do, I'm so confused"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["emotion"], "confused");
    assert_eq!(json["intent"], "seeking_advice");
    let prompt = json["prompt"].as_str().unwrap();
    assert!(prompt.contains("Message: what should I do, I'm so confused"));
    assert!(!prompt.contains("{USER_MESSAGE}"));
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_router_refuses_unusable_cors_origin() {
    let config = TherapyConfig {
        cors_origin: "https://ohio\r\n.example".to_string(),
        ..TherapyConfig::default()
    };
    assert!(create_router(&config).is_err());
}

#[tokio::test]
async fn test_exact_cors_origin_builds_router() {
    let config = TherapyConfig {
        cors_origin: "http://localhost:3000".to_string(),
        ..TherapyConfig::default()
    };
    let response = create_router(&config)
        .unwrap()
        .oneshot(get("/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_conversation_routes_only_under_api() {
    let response = app().oneshot(get("/welcome")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app()
        .oneshot(post_json("/chat", r#"{"message": "hi"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
