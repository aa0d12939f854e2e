//! # Readiness レポート
//!
//! 個別チェック結果をカテゴリ別にまとめ、全体の判定を算出する。

use serde::Serialize;

use super::{CheckCategory, CheckResult};

/// カテゴリ別の結果（カテゴリ内は入力順）
///
/// 未設定のカテゴリは空配列として出力する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedResults {
    pub env:    Vec<CheckResult>,
    pub http:   Vec<CheckResult>,
    pub tcp:    Vec<CheckResult>,
    pub warmup: Vec<CheckResult>,
}

impl GroupedResults {
    fn push(&mut self, result: CheckResult) {
        let bucket = match result.category() {
            CheckCategory::Env => &mut self.env,
            CheckCategory::Http => &mut self.http,
            CheckCategory::Tcp => &mut self.tcp,
            CheckCategory::Warmup => &mut self.warmup,
        };
        bucket.push(result);
    }

    /// すべての結果（env → http → tcp → warmup の順）
    pub fn iter(&self) -> impl Iterator<Item = &CheckResult> {
        self.env
            .iter()
            .chain(&self.http)
            .chain(&self.tcp)
            .chain(&self.warmup)
    }

    pub fn len(&self) -> usize {
        self.env.len() + self.http.len() + self.tcp.len() + self.warmup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Readiness 判定レポート
///
/// リクエストごとに 1 度だけ構築し、以降は変更しない。
///
/// ## JSON 形状
///
/// ```json
/// {
///   "overallReady": false,
///   "results": {
///     "env":    [{ "category": "env", "key": "FOO", "status": "missing" }],
///     "http":   [],
///     "tcp":    [{ "category": "tcp", "key": "db:5432", "status": "fail", "detail": "..." }],
///     "warmup": []
///   },
///   "uptimeSeconds": 12
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    overall_ready:  bool,
    results:        GroupedResults,
    uptime_seconds: u64,
}

impl ReadinessReport {
    /// 結果を集約して判定する
    ///
    /// ウォームアップ中・必須環境変数の欠落・プローブ失敗のいずれかがあれば Not Ready。
    /// ただし `declares_no_dependencies` が真なら結果に関わらず Ready とする。
    pub fn aggregate(
        results: impl IntoIterator<Item = CheckResult>,
        declares_no_dependencies: bool,
        uptime_seconds: u64,
    ) -> Self {
        let mut grouped = GroupedResults::default();
        for result in results {
            grouped.push(result);
        }

        let overall_ready = declares_no_dependencies
            || !grouped.iter().any(|r| r.status().blocks_readiness());

        Self {
            overall_ready,
            results: grouped,
            uptime_seconds,
        }
    }

    pub fn overall_ready(&self) -> bool {
        self.overall_ready
    }

    pub fn results(&self) -> &GroupedResults {
        &self.results
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.uptime_seconds
    }

    /// Readiness を不成立にした結果のみ
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.status().blocks_readiness())
    }
}
