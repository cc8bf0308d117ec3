#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use trivia_api::db::queries::categories::create_category;
use trivia_api::db::queries::questions::create_question;
use trivia_api::db::{self, NewQuestion};
use trivia_api::server::app::{router, AppState};

pub struct TestApp {
    pub pool: SqlitePool,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::in_memory().await.unwrap();
        let router = router(AppState::new(pool.clone()));
        Self { pool, router }
    }

    pub async fn category(&self, kind: &str) -> i64 {
        create_category(&self.pool, kind).await.unwrap()
    }

    pub async fn question(&self, text: &str, category: i64) -> i64 {
        create_question(
            &self.pool,
            &NewQuestion {
                question: text.to_owned(),
                answer: format!("answer to {text}"),
                category,
                difficulty: 2,
            },
        )
        .await
        .unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
