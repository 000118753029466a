//! # ClickUp クライアント
//!
//! FormRelay から ClickUp API v2 への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `POST /list/{list_id}/task` - タスク作成
//!
//! 認証は個人 API トークンを `Authorization` ヘッダーにそのまま載せる方式
//! （`Bearer` プレフィックスは付けない）。

mod error;
mod response;

use std::fmt;

use async_trait::async_trait;
pub use error::ClickUpError;
use formrelay_domain::{destination::ListId, task::TaskPayload};
use reqwest::header::AUTHORIZATION;
use response::handle_response;
use serde_json::Value;

/// ClickUp API のデフォルトのベース URL
pub const DEFAULT_API_URL: &str = "https://api.clickup.com/api/v2";

/// ClickUp API キー
///
/// `Debug` 出力ではマスクする（設定をログに出してもキーが漏れないように）。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// ヘッダーに載せるための生の値
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// ClickUp クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait ClickUpClient: Send + Sync {
    /// タスクを作成する
    ///
    /// ClickUp の `POST /list/{list_id}/task` を 1 回だけ呼び出す。リトライはしない。
    ///
    /// # 戻り値
    ///
    /// 成功時は ClickUp が返したタスク表現（JSON）をそのまま返す。
    async fn create_task(
        &self,
        list_id: &ListId,
        api_key: &ApiKey,
        payload: &TaskPayload,
    ) -> Result<Value, ClickUpError>;
}

/// ClickUp クライアント実装
#[derive(Clone)]
pub struct ClickUpClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl ClickUpClientImpl {
    /// 新しい ClickUpClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: ClickUp API のベース URL（例: `https://api.clickup.com/api/v2`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    fn task_url(&self, list_id: &ListId) -> String {
        format!(
            "{}/list/{}/task",
            self.base_url,
            urlencoding::encode(list_id.as_str())
        )
    }
}

#[async_trait]
impl ClickUpClient for ClickUpClientImpl {
    async fn create_task(
        &self,
        list_id: &ListId,
        api_key: &ApiKey,
        payload: &TaskPayload,
    ) -> Result<Value, ClickUpError> {
        let url = self.task_url(list_id);

        tracing::debug!(list_id = %list_id, "ClickUp にタスク作成をリクエストします");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, api_key.expose())
            .json(payload)
            .send()
            .await?;

        handle_response(response).await
    }
}
