//! # チェック記述子と結果
//!
//! 動的なマップで結果を運ぶのではなく、閉じた列挙型で表現する。
//! カテゴリ・ステータスを追加した場合、すべての `match` がコンパイルエラーで検出される。

use serde::Serialize;
use strum::Display;

/// 何をチェックするかを表す記述子
///
/// [`ReadinessConfig`](super::ReadinessConfig) から毎リクエスト生成される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckDescriptor {
    /// 必須環境変数（変数名）
    EnvVar(String),
    /// HTTP エンドポイント（URL）
    HttpEndpoint(String),
    /// TCP エンドポイント（`host:port`）
    TcpEndpoint(String),
    /// 最低稼働秒数
    WarmupThreshold(u64),
}

/// チェックのカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CheckCategory {
    Env,
    Http,
    Tcp,
    Warmup,
}

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckStatus {
    /// チェック成功
    Ok,
    /// ネットワークプローブの失敗
    Fail,
    /// ウォームアップ期間中
    WarmingUp,
    /// 必須環境変数が未設定または空
    Missing,
}

impl CheckStatus {
    /// Readiness を不成立にするステータスか
    pub fn blocks_readiness(self) -> bool {
        match self {
            Self::Ok => false,
            Self::Fail | Self::WarmingUp | Self::Missing => true,
        }
    }
}

/// 個別チェックの結果
///
/// 記述子 1 つにつき 1 つ生成され、以降は変更されない。
/// フィールドは読み取り専用で、構築はカテゴリ別のコンストラクタを通す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    category: CheckCategory,
    key:      String,
    status:   CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail:   Option<String>,
}

impl CheckResult {
    pub fn new(
        category: CheckCategory,
        key: impl Into<String>,
        status: CheckStatus,
        detail: Option<String>,
    ) -> Self {
        Self {
            category,
            key: key.into(),
            status,
            detail,
        }
    }

    /// 成功結果（detail なし）
    pub fn ok(category: CheckCategory, key: impl Into<String>) -> Self {
        Self::new(category, key, CheckStatus::Ok, None)
    }

    /// ネットワークプローブの失敗結果
    pub fn fail(category: CheckCategory, key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(category, key, CheckStatus::Fail, Some(detail.into()))
    }

    pub fn category(&self) -> CheckCategory {
        self.category
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}
