//! # ヘルスチェックハンドラ
//!
//! サービスの稼働状態と、トラフィックを受け入れられる状態かを確認するためのエンドポイント。
//!
//! ## 用途
//!
//! - **Liveness**: コンテナオーケストレーターの liveness probe。依存先は一切見ない
//! - **Readiness**: readiness probe / ロードバランサーのターゲットヘルスチェック
//!
//! ## エンドポイント
//!
//! ```text
//! GET /healthz  (別名: /health, /health/live)
//! GET /readyz   (別名: /ready, /health/ready)
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "not_ready",
//!   "checks": {
//!     "overallReady": false,
//!     "results": {
//!       "env": [{ "category": "env", "key": "BAR", "status": "missing" }],
//!       "http": [],
//!       "tcp": [],
//!       "warmup": []
//!     },
//!     "uptimeSeconds": 12
//!   },
//!   "uptimeSeconds": 12,
//!   "service": "api",
//!   "timestamp": "2026-01-01T00:00:00Z"
//! }
//! ```

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use chrono::Utc;
use healthgate_domain::{ProcessStart, readiness::ReadinessReport};
use healthgate_shared::{HealthResponse, ReadinessResponse, ReadinessStatus};

use crate::{error::ApiError, usecase::ReadinessUseCase};

/// ヘルスチェックハンドラの State
pub struct HealthState {
    pub usecase:       ReadinessUseCase,
    pub process_start: ProcessStart,
    pub service_name:  String,
}

/// Liveness チェック
///
/// 設定や依存先の状態に関わらず常に 200 OK を返す。
pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        state.service_name.clone(),
        state.process_start.uptime_seconds(),
    ))
}

/// Readiness チェック
///
/// 全依存先が利用可能なら 200 OK、そうでなければ 503 Service Unavailable を返す。
/// どちらの場合もボディに判定レポートを含める。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let report = state.usecase.evaluate().await;

    let status_code = if report.overall_ready() {
        StatusCode::OK
    } else {
        for failure in report.failures() {
            tracing::debug!(
                category = %failure.category(),
                key = failure.key(),
                status = %failure.status(),
                "Readiness 不成立"
            );
        }
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = ReadinessResponse::<ReadinessReport> {
        status:         ReadinessStatus::from_ready(report.overall_ready()),
        uptime_seconds: report.uptime_seconds(),
        service:        state.service_name.clone(),
        timestamp:      Utc::now(),
        checks:         report,
    };

    (status_code, Json(body))
}

/// 未定義パスのフォールバック
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
