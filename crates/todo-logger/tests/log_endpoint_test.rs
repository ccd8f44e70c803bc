// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tests for the `POST /log` endpoint through the public router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use todo_logger::http::router;
use todo_logger::writer::LogFile;

fn log_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/log")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_hello_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(
        LogFile::open(dir.path().join("logs").join("service.log"))
            .await
            .unwrap(),
    );
    let app = router(log.clone());

    let response = app
        .oneshot(log_request(json!({"message": "hello"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok"}));

    let content = tokio::fs::read_to_string(log.path()).await.unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.trim_end().ends_with("hello"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writes_produce_whole_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(LogFile::open(dir.path().join("service.log")).await.unwrap());
    let app = router(log.clone());

    let mut handles = Vec::new();
    for i in 0..32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let response = app
                .oneshot(log_request(json!({"message": format!("event-{}", i)})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let content = tokio::fs::read_to_string(log.path()).await.unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 32);
    for i in 0..32 {
        let suffix = format!("] event-{}", i);
        assert_eq!(
            lines.iter().filter(|l| l.ends_with(&suffix)).count(),
            1,
            "expected exactly one line for event-{}",
            i
        );
    }
}
