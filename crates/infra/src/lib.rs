//! # Healthgate インフラ層
//!
//! 依存先エンドポイントとのネットワーク通信を担当する。
//!
//! ## 責務
//!
//! - **HTTP プローブ**: reqwest による HEAD リクエスト
//! - **TCP プローブ**: tokio による接続確立のみの確認
//! - **時間予算**: 1 回の Readiness 判定で共有するデッドラインの適用
//!
//! ## モジュール構成
//!
//! - [`error`] - プローブエラー定義
//! - [`probe`] - [`EndpointProber`] トレイトと reqwest / tokio 実装
//! - `mock` - テスト用のインメモリ実装（`test-utils` feature 有効時のみ）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use healthgate_infra::{NetworkProber, ProbeBudget, probe::probe_tcp};
//!
//! let prober = NetworkProber::new()?;
//! let budget = ProbeBudget::starting_now(Duration::from_millis(300));
//! probe_tcp(&prober, "localhost:5432", budget).await?;
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod probe;

pub use error::ProbeError;
pub use probe::{EndpointProber, NetworkProber, ProbeBudget};
