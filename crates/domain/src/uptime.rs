//! # プロセス起動時刻
//!
//! 起動時に一度だけ記録し、以降は読み取り専用で稼働時間の算出に使う。
//! グローバル変数には置かず、値としてハンドラの State に渡す。

use std::time::{Duration, Instant};

/// プロセスの起動時刻
///
/// `Copy` な値オブジェクト。`main` で [`capture`](ProcessStart::capture) し、
/// Liveness / Readiness の両ハンドラへ渡す。
#[derive(Debug, Clone, Copy)]
pub struct ProcessStart(Instant);

impl ProcessStart {
    /// 現在時刻を起動時刻として記録する
    pub fn capture() -> Self {
        Self(Instant::now())
    }

    /// 起動時刻を `elapsed` だけ過去にずらして記録する（テスト用）
    ///
    /// 単調時計の起点より前には戻せないため、その場合は現在時刻になる。
    #[cfg(any(test, feature = "test-support"))]
    pub fn backdated(elapsed: Duration) -> Self {
        let now = Instant::now();
        Self(now.checked_sub(elapsed).unwrap_or(now))
    }

    /// 起動からの経過時間
    pub fn uptime(&self) -> Duration {
        self.0.elapsed()
    }

    /// 起動からの経過秒数（切り捨て）
    pub fn uptime_seconds(&self) -> u64 {
        self.uptime().as_secs()
    }
}
