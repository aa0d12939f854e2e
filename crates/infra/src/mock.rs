//! # テスト用モックプローバー
//!
//! ユースケース・ハンドラのテストで使用するインメモリの [`EndpointProber`]。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! healthgate-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 未登録のエンドポイントは成功として扱う。

use std::{
    collections::HashMap,
    future::pending,
    io,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{EndpointProber, ProbeError};

/// エンドポイントごとの応答
#[derive(Debug, Clone, Copy)]
enum Behavior {
    /// 指定ステータスを返す（HTTP のみ）
    Status(StatusCode),
    /// 接続を拒否する
    Refuse,
    /// 応答しない（デッドラインで打ち切られる）
    Stall,
}

#[derive(Clone, Default)]
pub struct MockEndpointProber {
    behaviors: Arc<Mutex<HashMap<String, Behavior>>>,
    calls:     Arc<Mutex<Vec<String>>>,
}

impl MockEndpointProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTP エンドポイントが指定ステータスを返すように設定する
    pub fn respond_with(&self, url: &str, status: StatusCode) {
        self.set(url, Behavior::Status(status));
    }

    /// エンドポイントへの接続を拒否させる
    pub fn refuse(&self, endpoint: &str) {
        self.set(endpoint, Behavior::Refuse);
    }

    /// エンドポイントを応答なしにする
    pub fn stall(&self, endpoint: &str) {
        self.set(endpoint, Behavior::Stall);
    }

    /// 呼び出されたエンドポイント（呼び出し順）
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, endpoint: &str, behavior: Behavior) {
        self.behaviors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(endpoint.to_string(), behavior);
    }

    fn record(&self, endpoint: &str) -> Option<Behavior> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(endpoint.to_string());
        self.behaviors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(endpoint)
            .copied()
    }
}

fn refused() -> ProbeError {
    ProbeError::Connect(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl EndpointProber for MockEndpointProber {
    async fn head(&self, url: &str, _timeout: Duration) -> Result<(), ProbeError> {
        match self.record(url) {
            None => Ok(()),
            Some(Behavior::Status(status)) if status.is_success() => Ok(()),
            Some(Behavior::Status(status)) => Err(ProbeError::UnexpectedStatus(status)),
            Some(Behavior::Refuse) => Err(refused()),
            Some(Behavior::Stall) => pending().await,
        }
    }

    async fn connect(&self, addr: &str) -> Result<(), ProbeError> {
        match self.record(addr) {
            None | Some(Behavior::Status(_)) => Ok(()),
            Some(Behavior::Refuse) => Err(refused()),
            Some(Behavior::Stall) => pending().await,
        }
    }
}
