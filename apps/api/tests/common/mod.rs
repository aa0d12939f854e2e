//! # API 統合テスト共通ヘルパー
//!
//! モックプローバーと差し替え可能な環境でルーターを組み立て、
//! `oneshot` でリクエストを送る。

#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body};
use healthgate_api::{app_builder::build_app, handler::HealthState, usecase::ReadinessUseCase};
use healthgate_domain::{EnvSource, ProcessStart, env_source::StaticEnv};
use healthgate_infra::{EndpointProber, mock::MockEndpointProber};
use http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

pub const SERVICE_NAME: &str = "api-test";

/// テスト用アプリケーション
pub struct TestApp {
    pub router: Router,
    pub env:    Arc<StaticEnv>,
    pub prober: MockEndpointProber,
}

/// レスポンスの要素
pub struct TestResponse {
    pub status:  StatusCode,
    pub headers: HeaderMap,
    pub body:    serde_json::Value,
}

impl TestApp {
    /// 起動直後のプロセスとしてアプリケーションを組み立てる
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self::started_at(pairs, ProcessStart::capture())
    }

    pub fn started_at(pairs: &[(&str, &str)], process_start: ProcessStart) -> Self {
        let env = Arc::new(StaticEnv::from_pairs(pairs.iter().copied()));
        let prober = MockEndpointProber::new();
        let router = build_router(env.clone(), Arc::new(prober.clone()), process_start);
        Self {
            router,
            env,
            prober,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// 任意の環境・プローバーでルーターを組み立てる
pub fn build_router(
    env: Arc<dyn EnvSource>,
    prober: Arc<dyn EndpointProber>,
    process_start: ProcessStart,
) -> Router {
    let state = Arc::new(HealthState {
        usecase: ReadinessUseCase::new(env, prober, process_start),
        process_start,
        service_name: SERVICE_NAME.to_string(),
    });
    build_app(state)
}

/// カテゴリ内の結果を `(key, status)` の組で取り出す
pub fn statuses(body: &serde_json::Value, category: &str) -> Vec<(String, String)> {
    body["checks"]["results"][category]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["key"].as_str().unwrap().to_string(),
                r["status"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}
