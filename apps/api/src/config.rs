//! # アプリケーション設定
//!
//! 環境変数からサーバー設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。
//!
//! サーバー設定は起動時に一度だけ読み込む。Readiness の判定設定（`READY_*`）は
//! 依存先の構成変更を反映するため、リクエストごとに
//! [`ReadinessConfig`](healthgate_domain::readiness::ReadinessConfig) で読み直す。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `3001` | ポート番号 |
//! | `SERVICE_NAME` | No | `api` | レスポンスの `service` フィールド |

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_SERVICE_NAME: &str = "api";

/// サーバー設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// サービス名
    pub service_name: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 必須の環境変数はない。ポート番号が不正な場合はデフォルト値を使用する。
    pub fn from_env() -> Self {
        Self {
            host:         env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port:         parse_port(env::var("API_PORT").ok().as_deref()),
            service_name: env::var("SERVICE_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
