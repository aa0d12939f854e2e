//! # Healthgate ドメイン層
//!
//! Readiness 判定の中核となるモデルと純粋なロジックを定義する。
//!
//! ## 設計方針
//!
//! - **閉じた型**: チェック種別・結果ステータスは列挙型で表現し、
//!   網羅性をコンパイル時に保証する
//! - **I/O を持たない**: ネットワーク疎通確認はインフラ層に委譲する。
//!   環境変数の参照も [`EnvSource`] 経由に限定し、テストで差し替え可能にする
//! - **不変**: 一度構築した結果・レポートは変更しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`env_source`] - 環境変数の参照元の抽象化
//! - [`readiness`] - チェック記述子・結果・レポート・設定パース
//! - [`uptime`] - プロセス起動時刻と稼働時間
//!
//! ## 使用例
//!
//! ```rust
//! use healthgate_domain::{
//!     env_source::ProcessEnv,
//!     readiness::ReadinessConfig,
//! };
//!
//! let config = ReadinessConfig::from_env(&ProcessEnv);
//! assert!(config.timeout().as_millis() > 0);
//! ```

pub mod env_source;
pub mod readiness;
pub mod uptime;

pub use env_source::{EnvSource, ProcessEnv};
pub use uptime::ProcessStart;
