//! # ネットワークプローブ
//!
//! 依存先エンドポイントへの疎通を、時間制限付きで 1 回だけ確認する。
//!
//! - HTTP: HEAD リクエストを送り、2xx なら成功（ボディは転送しない）
//! - TCP: 接続確立のみを確認し、直ちに切断する（ペイロードは送受信しない）
//!
//! ## 時間制限
//!
//! Readiness 判定 1 回につき 1 つの [`ProbeBudget`] を作り、全プローブで共有する。
//! [`probe_http`] / [`probe_tcp`] は共有デッドラインで実装を打ち切るため、
//! どのプローブもリクエスト全体の予算を超えて待たない。
//!
//! キャンセルは呼び出し側から下方向にのみ伝播する。
//! クライアント切断でハンドラの Future が破棄されると、実行中のプローブも破棄される。

use std::time::Duration;

use async_trait::async_trait;
use tokio::{net::TcpStream, time::Instant};

use crate::ProbeError;

/// 1 回の Readiness 判定で共有する時間予算
#[derive(Debug, Clone, Copy)]
pub struct ProbeBudget {
    timeout:  Duration,
    deadline: Instant,
}

impl ProbeBudget {
    /// 現在時刻から `timeout` 後をデッドラインとする予算を作る
    pub fn starting_now(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: Instant::now() + timeout,
        }
    }

    /// チェック単位のタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 全チェック共有のデッドライン
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// エンドポイントへの疎通確認を担当するトレイト
///
/// 実装はデッドラインを意識しなくてよい。打ち切りは [`probe_http`] / [`probe_tcp`] が行う。
#[async_trait]
pub trait EndpointProber: Send + Sync {
    /// URL に HEAD リクエストを送り、2xx であることを確認する
    ///
    /// # Errors
    ///
    /// - 通信エラー、または 2xx 以外のステータスの場合
    async fn head(&self, url: &str, timeout: Duration) -> Result<(), ProbeError>;

    /// `host:port` への TCP 接続を確立し、直ちに切断する
    ///
    /// # Errors
    ///
    /// - 名前解決・接続に失敗した場合
    async fn connect(&self, addr: &str) -> Result<(), ProbeError>;
}

/// 共有デッドライン内で HTTP プローブを実行する
pub async fn probe_http(
    prober: &dyn EndpointProber,
    url: &str,
    budget: ProbeBudget,
) -> Result<(), ProbeError> {
    tokio::time::timeout_at(budget.deadline(), prober.head(url, budget.timeout()))
        .await
        .unwrap_or_else(|_| Err(ProbeError::Timeout(budget.timeout())))
}

/// 共有デッドライン内で TCP プローブを実行する
pub async fn probe_tcp(
    prober: &dyn EndpointProber,
    addr: &str,
    budget: ProbeBudget,
) -> Result<(), ProbeError> {
    tokio::time::timeout_at(budget.deadline(), prober.connect(addr))
        .await
        .unwrap_or_else(|_| Err(ProbeError::Timeout(budget.timeout())))
}

/// reqwest / tokio による実装
///
/// プローブごとに接続を開いて閉じる。接続プールに空き接続を残さない。
#[derive(Debug, Clone)]
pub struct NetworkProber {
    client: reqwest::Client,
}

impl NetworkProber {
    /// # Errors
    ///
    /// - TLS バックエンドの初期化に失敗した場合
    pub fn new() -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .user_agent(concat!("healthgate/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EndpointProber for NetworkProber {
    async fn head(&self, url: &str, timeout: Duration) -> Result<(), ProbeError> {
        let response = self
            .client
            .head(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::Timeout(timeout)
                } else {
                    ProbeError::Http(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::UnexpectedStatus(status))
        }
    }

    async fn connect(&self, addr: &str) -> Result<(), ProbeError> {
        let stream = TcpStream::connect(addr).await?;
        drop(stream);
        Ok(())
    }
}
