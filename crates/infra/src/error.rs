//! # プローブエラー定義
//!
//! 依存先への疎通確認で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **例外にしない**: プローブの失敗は HTTP 層まで伝播させず、
//!   呼び出し側で個別チェックの `fail` と `detail` に変換する
//! - **人間可読な detail**: [`ProbeError::detail`] が原因チェーンを連結した文字列を返す。
//!   reqwest のエラーは最上位メッセージだけでは原因（接続拒否など）が読み取れないため

use std::{error::Error as _, io, time::Duration};

use reqwest::StatusCode;
use thiserror::Error;

/// プローブで発生するエラー
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 共有デッドラインまたはチェック単位のタイムアウトを超過
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// HTTP 通信エラー（DNS 解決失敗、接続拒否、TLS エラー、不正な URL など）
    #[error("{0}")]
    Http(#[source] reqwest::Error),

    /// 2xx 以外のステータスコード
    #[error("{0}")]
    UnexpectedStatus(StatusCode),

    /// TCP 接続エラー（接続拒否、到達不能、名前解決失敗など）
    #[error("{0}")]
    Connect(#[source] io::Error),
}

impl ProbeError {
    /// レポートの `detail` に載せる文字列
    ///
    /// 最上位メッセージに原因チェーンを `": "` で連結する。
    /// 同じ文言が連続する場合は重複を省く。
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = match self {
            Self::Http(e) => e.source(),
            Self::Connect(e) => e.source(),
            Self::Timeout(_) | Self::UnexpectedStatus(_) => None,
        };
        while let Some(cause) = source {
            let message = cause.to_string();
            if !detail.ends_with(&message) {
                detail.push_str(": ");
                detail.push_str(&message);
            }
            source = cause.source();
        }
        detail
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<io::Error> for ProbeError {
    fn from(e: io::Error) -> Self {
        Self::Connect(e)
    }
}
