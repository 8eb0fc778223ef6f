mod common;

use axum::http::StatusCode;
use common::{client_for, spawn_backend, spawn_backend_with_health, success_body, Reply};

use assessaid::api::RecommendError;

#[tokio::test]
async fn test_recommend_parses_assessments_in_order() {
    let backend = spawn_backend(Reply::Body(StatusCode::OK, success_body(&[("b", "Beta"), ("a", "Alpha")]))).await;
    let client = client_for(&backend.base_url);

    let response = client.recommend("java developer").await.unwrap();
    assert!(response.has_results());
    let names: Vec<&str> = response.recommended_assessments.iter().map(|a| a.product_name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha"]);
    assert_eq!(response.recommended_assessments[0].test_type, vec!["Knowledge & Skills".to_string()]);
    assert_eq!(backend.queries(), vec!["java developer".to_string()]);
}

#[tokio::test]
async fn test_recommend_missing_list_defaults_to_empty() {
    let body = r#"{"status":"success","message":"Nothing close enough"}"#.to_string();
    let backend = spawn_backend(Reply::Body(StatusCode::OK, body)).await;
    let response = client_for(&backend.base_url).recommend("astronaut").await.unwrap();
    assert!(!response.has_results());
    assert_eq!(response.message, "Nothing close enough");
}

#[tokio::test]
async fn test_recommend_non_2xx_is_status_error() {
    let backend = spawn_backend(Reply::Body(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"boom"}"#.into())).await;
    match client_for(&backend.base_url).recommend("sales").await {
        Err(RecommendError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert_eq!(backend.queries().len(), 1);
}

#[tokio::test]
async fn test_recommend_malformed_body_is_decode_error() {
    let backend = spawn_backend(Reply::Body(StatusCode::OK, "<html>not json</html>".into())).await;
    let result = client_for(&backend.base_url).recommend("sales").await;
    assert!(matches!(result, Err(RecommendError::Decode(_))));
}

#[tokio::test]
async fn test_recommend_duplicate_ids_rejected() {
    let backend = spawn_backend(Reply::Body(StatusCode::OK, success_body(&[("x", "One"), ("x", "Two")]))).await;
    let result = client_for(&backend.base_url).recommend("sales").await;
    assert!(matches!(result, Err(RecommendError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_recommend_unreachable_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(&format!("http://{}", addr)).recommend("sales").await;
    assert!(matches!(result, Err(RecommendError::Transport(_))));
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let backend = spawn_backend(Reply::Body(StatusCode::OK, success_body(&[]))).await;
    let report = client_for(&backend.base_url).health().await.unwrap();
    assert!(report.is_healthy());
}

#[tokio::test]
async fn test_health_warming_up_is_not_healthy() {
    let backend = spawn_backend_with_health(
        Reply::Body(StatusCode::OK, success_body(&[])),
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"status":"initializing"}"#,
    )
    .await;
    let report = client_for(&backend.base_url).health().await.unwrap();
    assert!(!report.is_healthy());
    assert_eq!(report.status, "initializing");
}
