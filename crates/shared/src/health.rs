//! # ヘルスチェック共通型
//!
//! Liveness / Readiness エンドポイントが返すレスポンス型を提供する。

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness レスポンス
///
/// 依存先の状態は含まない。プロセスがハンドラを実行できる限り常に `"ok"`。
///
/// ## 使用例
///
/// ```
/// use healthgate_shared::HealthResponse;
///
/// let response = HealthResponse::ok("api", 12);
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 稼働状態（常に `"ok"`）
    pub status:         &'static str,
    /// 起動からの経過秒数
    pub uptime_seconds: u64,
    /// サービス名
    pub service:        String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version:        &'static str,
    /// 応答時刻（RFC 3339）
    pub timestamp:      DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok(service: impl Into<String>, uptime_seconds: u64) -> Self {
        Self {
            status: "ok",
            uptime_seconds,
            service: service.into(),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness 全体のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// 全依存先が利用可能
    Ready,
    /// 一部の依存先が利用不可、またはウォームアップ中
    NotReady,
}

impl ReadinessStatus {
    pub fn from_ready(ready: bool) -> Self {
        if ready { Self::Ready } else { Self::NotReady }
    }
}

/// Readiness レスポンス
///
/// `checks` には判定レポート（カテゴリ別の個別結果）を載せる。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse<C> {
    /// 全体のステータス
    pub status:         ReadinessStatus,
    /// 個別チェック結果
    pub checks:         C,
    /// 起動からの経過秒数
    pub uptime_seconds: u64,
    /// サービス名
    pub service:        String,
    /// 応答時刻（RFC 3339）
    pub timestamp:      DateTime<Utc>,
}
