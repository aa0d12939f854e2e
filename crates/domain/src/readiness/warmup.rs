//! # ウォームアップゲート
//!
//! 起動直後の一定期間は、依存の状態に関わらず Ready を返さない。

use std::time::Duration;

use super::{CheckCategory, CheckResult, CheckStatus, config::MIN_UPTIME_SECS_KEY};

/// 稼働時間を最低稼働秒数と比較する
///
/// 閾値 0（無効）の場合は [`ReadinessConfig`](super::ReadinessConfig) が記述子を生成しないため、
/// ここには正の閾値のみが渡る。
pub fn evaluate_warmup(threshold_secs: u64, uptime: Duration) -> CheckResult {
    let elapsed = uptime.as_secs();

    if elapsed < threshold_secs {
        CheckResult::new(
            CheckCategory::Warmup,
            MIN_UPTIME_SECS_KEY,
            CheckStatus::WarmingUp,
            Some(format!("uptime {elapsed}s < required {threshold_secs}s")),
        )
    } else {
        CheckResult::ok(CheckCategory::Warmup, MIN_UPTIME_SECS_KEY)
    }
}
