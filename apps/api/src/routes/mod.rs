pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roles API
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/roles/match", post(handlers::handle_match_role))
        .route("/api/v1/roles/:name", get(handlers::handle_get_role))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::Analyzer;
    use crate::config::Config;
    use crate::lexicon::LexiconStore;
    use crate::synthesis::KeywordInjection;

    fn test_router() -> Router {
        let config = Config::from_vars(|_| None).unwrap();
        let analyzer = Analyzer::new(
            Arc::new(LexiconStore::builtin().unwrap()),
            KeywordInjection::FirstMissing,
        );
        build_router(AppState {
            analyzer: Arc::new(analyzer),
            config,
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["roles_loaded"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_list_and_get_roles() {
        let (status, body) = send(get("/api/v1/roles")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["roles"][0]["role_name"], "Software Engineer");

        let (status, body) = send(get("/api/v1/roles/data%20analyst")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role_name"], "Data Analyst");

        let (status, body) = send(get("/api/v1/roles/pastry%20chef")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_match_role() {
        let (status, body) = send(post_json(
            "/api/v1/roles/match",
            json!({ "job_description": "Hiring a DevOps Engineer" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"]["role_name"], "DevOps Engineer");
        assert_eq!(body["candidates"][0]["exact_title_match"], true);

        let (_, body) = send(post_json(
            "/api/v1/roles/match",
            json!({ "job_description": "Bakery assistant for early shifts" }),
        ))
        .await;
        assert!(body["role"].is_null());
    }

    #[tokio::test]
    async fn test_analyze_envelope() {
        let (status, body) = send(post_json(
            "/api/v1/analyze",
            json!({
                "resume_text": "John Smith\njohn@x.com\nSKILLS\nPython, React\nEDUCATION\nB.Tech in CS 2020, 8.5 CGPA",
                "job_description": "Senior Software Engineer needing Python and React"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["analysis_id"].is_string());
        assert!(body["analyzed_at"].is_string());
        assert_eq!(body["role"]["role_name"], "Software Engineer");
        assert_eq!(body["personal_info"]["name"], "John Smith");
        assert!(body["score"]["overall"].as_u64().unwrap() <= 100);
        assert!(body["sections"]["SKILLS"].is_array());
        assert!(body["generated_resume"].as_str().unwrap().contains("SKILLS"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_resume() {
        let (status, body) = send(post_json(
            "/api/v1/analyze",
            json!({ "resume_text": "   ", "job_description": "Rust" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
