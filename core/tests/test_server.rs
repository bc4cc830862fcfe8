//! Router tests driven in-process through `tower::ServiceExt::oneshot`.
#![cfg(feature = "server")]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use flashcards::ai::{CompletionProvider, CompletionRequest, ProviderError};
use flashcards::server::{build_router, AppState};
use flashcards::FlashcardGenerator;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

#[derive(Default)]
struct Echo {
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionProvider for Echo {
    async fn complete(&self, _: &CompletionRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("Q: What is the capital of France?\nA: Paris.".to_owned())
    }
}

fn app(provider: &Arc<Echo>) -> Router {
    let generator = FlashcardGenerator::new(Arc::clone(provider) as Arc<dyn CompletionProvider>);
    build_router(Arc::new(AppState { generator }))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-flashcards")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_flashcards() {
    let provider = Arc::new(Echo::default());
    let body = json!({ "text": "Paris is the capital of France." }).to_string();

    let response = app(&provider).oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "flashcards": [
                { "question": "What is the capital of France?", "answer": "Paris." }
            ]
        })
    );
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_text_returns_empty_list() {
    let provider = Arc::new(Echo::default());
    let body = json!({ "text": "" }).to_string();

    let response = app(&provider).oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "flashcards": [] }));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_text_is_rejected() {
    let provider = Arc::new(Echo::default());

    let response = app(&provider)
        .oneshot(post_json(json!({ "content": "hi" }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["error"].is_string());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_type_is_rejected() {
    let provider = Arc::new(Echo::default());

    let response = app(&provider)
        .oneshot(post_json(json!({ "text": 42 }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let provider = Arc::new(Echo::default());

    let response = app(&provider)
        .oneshot(post_json("{\"text\": "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let provider = Arc::new(Echo::default());
    let request = Request::builder()
        .method("POST")
        .uri("/generate-flashcards")
        .body(Body::from(json!({ "text": "hi" }).to_string()))
        .unwrap();

    let response = app(&provider).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_health() {
    let provider = Arc::new(Echo::default());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app(&provider).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let provider = Arc::new(Echo::default());
    let request = Request::builder()
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let response = app(&provider).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No route for /nope"
    );
}

#[tokio::test]
async fn test_get_on_generate_is_405() {
    let provider = Arc::new(Echo::default());
    let request = Request::builder()
        .uri("/generate-flashcards")
        .body(Body::empty())
        .unwrap();

    let response = app(&provider).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_body_over_two_megabytes_is_accepted() {
    let provider = Arc::new(Echo::default());
    let body = json!({ "text": "word ".repeat(500_000) }).to_string();
    assert!(body.len() > 2 * 1024 * 1024);

    let response = app(&provider).oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let flashcards = body_json(response).await["flashcards"].as_array().unwrap().len();
    assert_eq!(flashcards, 5_000);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 5_000);
}
