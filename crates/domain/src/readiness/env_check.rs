//! # 必須環境変数チェック

use super::{CheckCategory, CheckResult, CheckStatus};
use crate::EnvSource;

/// 必須環境変数の存在を確認する
///
/// 値が存在し、前後の空白を除いて非空であれば `ok`、それ以外は `missing`。
/// I/O を伴わないため、呼び出し元で待ち合わせずに評価できる。
pub fn check_env_var(env: &dyn EnvSource, name: &str) -> CheckResult {
    let present = env.get(name).is_some_and(|v| !v.trim().is_empty());
    let status = if present {
        CheckStatus::Ok
    } else {
        CheckStatus::Missing
    };
    CheckResult::new(CheckCategory::Env, name, status, None)
}
