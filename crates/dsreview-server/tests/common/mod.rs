use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use dsreview_server::{create_router, AppState};
use dsreview_store::ReviewConfig;
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const QUESTIONS_CSV: &str = "\
ID,Question,Tip,Type,Difficulty,CourseId,IsPublished,Created,PreviousVersionId,Deleted,TopicId,OriginalVersionId,Language
q1,The cat sat.,,MultipleChoice,Easy,c1,true,2024-01-01T10:00:00Z,,,t1,,en
q2,The cat sat!,,MultipleChoice,Easy,c1,true,2024-02-01T10:00:00Z,q1,,t1,q1,en
q3,Old question,,FreeText,Hard,c1,false,2023-01-01T10:00:00Z,,2024-01-01T00:00:00Z,t1,,en
q4,Older question,,FreeText,Hard,c1,false,2023-01-01T10:00:00Z,,2024-01-01T00:00:00Z,t1,,en
";

pub const ANSWERS_CSV: &str = "\
ID,Answer → ID,Answer → Answer,Answer → QuestionId,Answer → IsCorrect
q1,a1,Yes,q1,true
q1,a2,No,q1,false
";

pub struct TestApp {
    pub dir: TempDir,
    pub config: ReviewConfig,
    pub router: Router,
}

#[allow(dead_code)]
pub fn app() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp data directory");
    let config = ReviewConfig::default().with_data_dir(dir.path());
    fs::write(config.questions_path(), QUESTIONS_CSV).unwrap();
    fs::write(config.answers_path(), ANSWERS_CSV).unwrap();

    let state = Arc::new(AppState::load(config.clone()).unwrap());
    TestApp {
        dir,
        config,
        router: create_router(state),
    }
}

#[allow(dead_code)]
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

#[allow(dead_code)]
pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, &body.to_string()).await
}

#[allow(dead_code)]
pub async fn post_raw(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-request-id", "test-request")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
