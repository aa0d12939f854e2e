//! # Healthgate API サーバー
//!
//! Liveness / Readiness エンドポイントを提供する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `API_HOST` | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | `3001` | ポート番号 |
//! | `SERVICE_NAME` | `api` | サービス名 |
//! | `LOG_FORMAT` | `pretty` | ログ形式（`json` / `pretty`） |
//! | `RUST_LOG` | `info,healthgate=debug` | ログレベル |
//!
//! Readiness の判定設定（`READY_*`）はリクエストごとに読み直すため、ここでは扱わない。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p healthgate-api
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use healthgate_api::{
    app_builder::build_app,
    config::ApiConfig,
    handler::HealthState,
    usecase::ReadinessUseCase,
};
use healthgate_domain::{ProcessEnv, ProcessStart};
use healthgate_infra::NetworkProber;
use healthgate_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 起動時刻の記録
/// 2. 環境変数の読み込み（.env ファイル）
/// 3. トレーシングの初期化
/// 4. サーバー設定の読み込み
/// 5. 依存の組み立てとルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 稼働時間の基準。以降の初期化処理の時間も含める
    let process_start = ProcessStart::capture();

    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env(config.service_name.clone()));
    let _tracing_guard = tracing::info_span!("app", service = %config.service_name).entered();

    tracing::info!(
        "API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let prober = NetworkProber::new().context("HTTP クライアントの初期化に失敗しました")?;
    let usecase = ReadinessUseCase::new(Arc::new(ProcessEnv), Arc::new(prober), process_start);
    let state = Arc::new(HealthState {
        usecase,
        process_start,
        service_name: config.service_name.clone(),
    });

    let app = build_app(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("{}:{} へのバインドに失敗しました", config.host, config.port))?;
    tracing::info!("API サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
