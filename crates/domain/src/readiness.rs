//! # Readiness 判定モデル
//!
//! 依存チェックの記述子・結果・集約レポートと、環境変数からの設定パースを提供する。
//!
//! ## 判定の流れ
//!
//! ```text
//! EnvSource ──▶ ReadinessConfig ──▶ CheckDescriptor[]
//!                                        │
//!            ┌───────────────┬───────────┼───────────────┐
//!            ▼               ▼           ▼               ▼
//!      env チェック     HTTP プローブ  TCP プローブ   ウォームアップ
//!       (domain)         (infra)      (infra)        (domain)
//!            └───────────────┴─────┬─────┴───────────────┘
//!                                  ▼
//!                           ReadinessReport
//! ```
//!
//! ネットワークプローブ以外（env チェック・ウォームアップ）はこのモジュールで完結する。
//!
//! ## モジュール構成
//!
//! ```text
//! readiness.rs          # 親モジュール（re-export）
//! └── readiness/
//!     ├── check.rs      # 記述子・結果・ステータス
//!     ├── config.rs     # 環境変数からの設定パース
//!     ├── env_check.rs  # 必須環境変数チェック
//!     ├── report.rs     # 集約レポートと判定
//!     └── warmup.rs     # ウォームアップゲート
//! ```

pub mod check;
pub mod config;
pub mod env_check;
pub mod report;
pub mod warmup;

pub use check::{CheckCategory, CheckDescriptor, CheckResult, CheckStatus};
pub use config::ReadinessConfig;
pub use env_check::check_env_var;
pub use report::{GroupedResults, ReadinessReport};
pub use warmup::evaluate_warmup;
