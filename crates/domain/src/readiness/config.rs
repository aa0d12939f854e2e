//! # Readiness 設定
//!
//! 環境変数から Readiness 判定の設定を読み込む。
//! 依存先の状態や設定はリクエスト間で変わりうるため、キャッシュせず毎回パースする。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `READY_REQUIRE_ENV` | なし | 非空であるべき環境変数名（カンマ区切り） |
//! | `READY_HTTP_ENDPOINTS` | なし | HEAD で 2xx を期待する URL（カンマ区切り） |
//! | `READY_TCP_ENDPOINTS` | なし | 接続確認する `host:port`（カンマ区切り） |
//! | `READY_MIN_UPTIME_SECS` | `0`（無効） | ウォームアップ秒数 |
//! | `READY_TIMEOUT_MS` | `300` | 全チェック共有のタイムアウト（ミリ秒）。`0` もデフォルト値として扱う |
//!
//! 数値のパースは決して失敗しない。不正な値はデフォルト値として扱う。

use std::time::Duration;

use super::CheckDescriptor;
use crate::EnvSource;

pub const REQUIRE_ENV_KEY: &str = "READY_REQUIRE_ENV";
pub const HTTP_ENDPOINTS_KEY: &str = "READY_HTTP_ENDPOINTS";
pub const TCP_ENDPOINTS_KEY: &str = "READY_TCP_ENDPOINTS";
pub const MIN_UPTIME_SECS_KEY: &str = "READY_MIN_UPTIME_SECS";
pub const TIMEOUT_MS_KEY: &str = "READY_TIMEOUT_MS";

/// `READY_TIMEOUT_MS` 未設定・不正時のタイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// Readiness 判定の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessConfig {
    required_env:   Vec<String>,
    http_endpoints: Vec<String>,
    tcp_endpoints:  Vec<String>,
    /// `None` はウォームアップ無効（0 または未設定）
    min_uptime_secs: Option<u64>,
    timeout:        Duration,
}

impl ReadinessConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let list = |key: &str| env.get(key).map(|v| split_list(&v)).unwrap_or_default();

        let min_uptime_secs = parse_u64_or(env.get(MIN_UPTIME_SECS_KEY).as_deref(), 0);
        let timeout_ms = parse_u64_or(
            env.get(TIMEOUT_MS_KEY).as_deref(),
            DEFAULT_TIMEOUT.as_millis() as u64,
        );

        Self {
            required_env: list(REQUIRE_ENV_KEY),
            http_endpoints: list(HTTP_ENDPOINTS_KEY),
            tcp_endpoints: list(TCP_ENDPOINTS_KEY),
            min_uptime_secs: (min_uptime_secs > 0).then_some(min_uptime_secs),
            // 0 ms の予算ではすべてのプローブが即時タイムアウトするため、デフォルト扱い
            timeout: if timeout_ms == 0 {
                DEFAULT_TIMEOUT
            } else {
                Duration::from_millis(timeout_ms)
            },
        }
    }

    pub fn required_env(&self) -> &[String] {
        &self.required_env
    }

    pub fn http_endpoints(&self) -> &[String] {
        &self.http_endpoints
    }

    pub fn tcp_endpoints(&self) -> &[String] {
        &self.tcp_endpoints
    }

    pub fn min_uptime_secs(&self) -> Option<u64> {
        self.min_uptime_secs
    }

    /// 全チェックで共有するタイムアウト予算
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 依存が 1 つも宣言されていないか
    ///
    /// この場合は「全チェックが空虚に成功」ではなく「依存なし」として常に Ready とする。
    pub fn declares_no_dependencies(&self) -> bool {
        self.required_env.is_empty()
            && self.http_endpoints.is_empty()
            && self.tcp_endpoints.is_empty()
            && self.min_uptime_secs.is_none()
    }

    /// 設定からチェック記述子を生成する（env → http → tcp → warmup の順）
    pub fn descriptors(&self) -> Vec<CheckDescriptor> {
        let env = self.required_env.iter().cloned().map(CheckDescriptor::EnvVar);
        let http = self
            .http_endpoints
            .iter()
            .cloned()
            .map(CheckDescriptor::HttpEndpoint);
        let tcp = self
            .tcp_endpoints
            .iter()
            .cloned()
            .map(CheckDescriptor::TcpEndpoint);
        let warmup = self.min_uptime_secs.map(CheckDescriptor::WarmupThreshold);

        env.chain(http).chain(tcp).chain(warmup).collect()
    }
}

/// カンマ区切りの値を分割し、前後の空白を除去して空要素を捨てる
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// 非負整数をパースする。未設定・空・不正値（符号、小数、桁あふれを含む）は `default`
fn parse_u64_or(raw: Option<&str>, default: u64) -> u64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return default;
    };
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(value = raw, "数値として解釈できない設定値をデフォルトで置き換えます");
        return default;
    }
    raw.parse().unwrap_or(default)
}
