//! # Healthgate API
//!
//! オーケストレーターやロードバランサーから参照される Liveness / Readiness
//! エンドポイントを提供する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   handler    │────▶│   usecase    │────▶│    infra     │
//! │ (axum/HTTP)  │     │ (Readiness)  │     │  (プローブ)   │
//! └──────────────┘     └──────┬───────┘     └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │    domain    │
//!                      │（設定・集約） │
//!                      └──────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの構築
//! - [`config`] - サーバー設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - Readiness 判定のオーケストレーション
//!
//! ## 依存関係
//!
//! - `healthgate_domain`: 判定設定・チェック結果・集約ロジック
//! - `healthgate_infra`: HTTP / TCP プローブ
//! - `healthgate_shared`: レスポンス型、トレーシング、Canonical Log Line

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
