//! # Readiness ユースケース
//!
//! 1 回の Readiness 判定を実行する。
//!
//! ## 処理の流れ
//!
//! 1. `READY_*` 環境変数から設定を読み直し、チェック記述子を生成する（リクエストごと）
//! 2. 判定全体で共有するデッドラインと、判定時点の稼働時間を確定する
//! 3. 記述子ごとにチェックを 1 つ実行する。HTTP / TCP プローブは並行に走り、
//!    env チェックとウォームアップは待ち合わせなしで即座に完了する
//! 4. 記述子の順序のまま結果を集約してレポートを返す
//!
//! 依存先の障害はエラーではなく個別チェックの `fail` として表現するため、
//! このユースケースは失敗しない。

use std::{sync::Arc, time::Duration};

use futures::future::join_all;
use healthgate_domain::{
    EnvSource,
    ProcessStart,
    readiness::{
        CheckCategory,
        CheckDescriptor,
        CheckResult,
        ReadinessConfig,
        ReadinessReport,
        check_env_var,
        evaluate_warmup,
    },
};
use healthgate_infra::{
    EndpointProber,
    ProbeBudget,
    ProbeError,
    probe::{probe_http, probe_tcp},
};

/// Readiness ユースケース
pub struct ReadinessUseCase {
    env:           Arc<dyn EnvSource>,
    prober:        Arc<dyn EndpointProber>,
    process_start: ProcessStart,
}

impl ReadinessUseCase {
    pub fn new(
        env: Arc<dyn EnvSource>,
        prober: Arc<dyn EndpointProber>,
        process_start: ProcessStart,
    ) -> Self {
        Self {
            env,
            prober,
            process_start,
        }
    }

    /// Readiness を判定する
    ///
    /// 所要時間は設定されたタイムアウトに処理のオーバーヘッドを加えた程度に収まる。
    #[tracing::instrument(skip_all)]
    pub async fn evaluate(&self) -> ReadinessReport {
        tracing::debug!(stage = "parsing_config", "Readiness 判定開始");
        let config = ReadinessConfig::from_env(self.env.as_ref());
        let descriptors = config.descriptors();
        let budget = ProbeBudget::starting_now(config.timeout());
        let uptime = self.process_start.uptime();

        tracing::debug!(
            stage = "probing",
            checks = descriptors.len(),
            timeout_ms = budget.timeout().as_millis() as u64,
            "依存先チェック開始"
        );
        let checks = descriptors
            .into_iter()
            .map(|descriptor| self.run_check(descriptor, budget, uptime));
        let results = join_all(checks).await;

        // 未設定のカテゴリは空配列になるだけで失敗扱いにはしない。
        // 構成していない依存先は「任意」とみなす。
        let report = ReadinessReport::aggregate(
            results,
            config.declares_no_dependencies(),
            uptime.as_secs(),
        );

        tracing::debug!(
            stage = "aggregated",
            overall_ready = report.overall_ready(),
            checks = report.results().len(),
            "Readiness 判定完了"
        );
        report
    }

    /// 記述子 1 つに対してチェックを 1 つ実行する
    async fn run_check(
        &self,
        descriptor: CheckDescriptor,
        budget: ProbeBudget,
        uptime: Duration,
    ) -> CheckResult {
        match descriptor {
            CheckDescriptor::EnvVar(name) => check_env_var(self.env.as_ref(), &name),
            CheckDescriptor::HttpEndpoint(url) => {
                let outcome = probe_http(self.prober.as_ref(), &url, budget).await;
                into_check_result(CheckCategory::Http, url, outcome)
            }
            CheckDescriptor::TcpEndpoint(addr) => {
                let outcome = probe_tcp(self.prober.as_ref(), &addr, budget).await;
                into_check_result(CheckCategory::Tcp, addr, outcome)
            }
            CheckDescriptor::WarmupThreshold(secs) => evaluate_warmup(secs, uptime),
        }
    }
}

fn into_check_result(
    category: CheckCategory,
    target: String,
    outcome: Result<(), ProbeError>,
) -> CheckResult {
    match outcome {
        Ok(()) => CheckResult::ok(category, target),
        Err(e) => {
            let detail = e.detail();
            tracing::warn!(
                category = %category,
                target = %target,
                error = %detail,
                "依存先プローブ失敗"
            );
            CheckResult::fail(category, target, detail)
        }
    }
}
