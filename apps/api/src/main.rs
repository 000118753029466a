//! # FormRelay API サーバー
//!
//! Web サイトのフォーム送信（見積依頼・問い合わせ）を受け取り、
//! ClickUp のタスクとして転送する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│  FormRelay   │────▶│   ClickUp    │
//! │   (form)     │     │  port: 3000  │     │   API v2     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! 環境変数は [`formrelay_api::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p formrelay-api
//!
//! # 本番環境（環境変数を直接指定）
//! CLICKUP_API_KEY=pk_... CLICKUP_LIST_ID_QUOTE=... cargo run -p formrelay-api --release
//! ```

use std::sync::Arc;

use anyhow::Context;
use formrelay_api::{
    app_builder::build_app,
    client::{ClickUpClient, ClickUpClientImpl},
    config::ApiConfig,
    usecase::SubmissionRelay,
};
use formrelay_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _tracing_guard = init_tracing(TracingConfig::from_env("form-relay"));

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    if config.clickup.api_key.is_none() {
        tracing::warn!("CLICKUP_API_KEY が未設定です。全ての送信が Server misconfigured になります");
    }

    let client: Arc<dyn ClickUpClient> = Arc::new(ClickUpClientImpl::new(&config.clickup.api_url));
    let relay = Arc::new(SubmissionRelay::new(client, &config.clickup));
    let app = build_app(relay);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "{}:{} へのバインドに失敗しました",
                config.server.host, config.server.port
            )
        })?;
    tracing::info!("FormRelay サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
