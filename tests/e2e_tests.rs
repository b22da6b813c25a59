//! End-to-end HTTP tests.

mod common;

use serde_json::json;

use common::fixtures::{MITOCHONDRIA, TREATY_KEY, TREATY_STUDENT};
use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};

#[tokio::test]
async fn test_health_endpoint_returns_healthy() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let health = client.health().await.expect("Health check should succeed");

    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_analyze_identical_submission() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let result = client
        .analyze(json!({
            "answer_key": MITOCHONDRIA,
            "student_submission": MITOCHONDRIA,
            "student_name": "essay.txt",
        }))
        .await
        .expect("Request should succeed");

    assert_eq!(result.student_name, "essay.txt");
    assert_eq!(result.similarity_score, 1.0);
    assert_eq!(result.grade, "A");
    assert_eq!(result.highlighted_matches.matched_concepts.len(), 1);
}

#[tokio::test]
async fn test_analyze_reports_factual_mismatch() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let result = client
        .analyze(json!({
            "answer_key": TREATY_KEY,
            "student_submission": TREATY_STUDENT,
        }))
        .await
        .expect("Request should succeed");

    assert_eq!(
        result.highlighted_matches.missed_concepts,
        vec![TREATY_KEY.to_string()]
    );
    assert!(result.similarity_score < 0.7);
}

#[tokio::test]
async fn test_analyze_rejects_empty_submission() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let err = client
        .analyze(json!({
            "answer_key": MITOCHONDRIA,
            "student_submission": "",
        }))
        .await
        .unwrap_err();

    match err {
        TestClientError::BadRequest(body) => {
            assert_eq!(body.code, 400);
            assert!(body.error.contains("student submission"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let client = TestClient::new(server.url());
            tokio::spawn(async move {
                let submission = format!("The mitochondria is the powerhouse of cell number {i}.");
                client
                    .analyze(json!({
                        "answer_key": MITOCHONDRIA,
                        "student_submission": submission,
                    }))
                    .await
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.expect("Task should not panic");
        assert!(result.is_ok(), "Request {} should succeed", i);
    }
}
