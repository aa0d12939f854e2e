//! # アプリケーション構築
//!
//! ルーター定義とミドルウェアの組み立てを担当する。
//! `main.rs` は依存の初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::get,
};
use healthgate_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{HealthState, health_check, not_found, readiness_check};

/// ルーターを構築する
///
/// ## レイヤー構成（外側から）
///
/// ```text
/// SetRequestId → Trace → CanonicalLogLine → PropagateRequestId → Cors → handler
/// ```
pub fn build_app(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/health", get(health_check))
        .route("/health/live", get(health_check))
        .route("/readyz", get(readiness_check))
        .route("/ready", get(readiness_check))
        .route("/health/ready", get(readiness_check))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// 任意オリジンからの参照を許可する CORS 設定
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("origin"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}
