//! # ユースケース層
//!
//! Readiness 判定のオーケストレーションを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 環境変数の参照元とプローバーを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、判定ロジックはユースケースに集約

pub mod readiness;

pub use readiness::ReadinessUseCase;
