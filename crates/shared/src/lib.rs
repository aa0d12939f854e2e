//! # Healthgate 共有ユーティリティ
//!
//! レスポンス型と Observability 基盤を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレートから依存されうる末端のクレート
//! - 判定ロジックを含まない純粋なユーティリティのみを配置
//! - HTTP / トレーシング関連の依存は `observability` feature の背後に置く

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod health;
pub mod observability;

pub use health::{HealthResponse, ReadinessResponse, ReadinessStatus};
