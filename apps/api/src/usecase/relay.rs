//! フォーム転送ユースケース

use std::sync::Arc;

use formrelay_domain::{destination::DestinationMap, submission::SubmissionForm, task::TaskPayload};
use serde_json::Value;

use crate::{
    client::{ApiKey, ClickUpClient},
    config::ClickUpConfig,
    error::RelayError,
};

/// フォーム転送ユースケース
///
/// 設定はリクエスト間で共有する読み取り専用の状態。
pub struct SubmissionRelay {
    client:       Arc<dyn ClickUpClient>,
    api_key:      Option<ApiKey>,
    destinations: DestinationMap,
}

impl SubmissionRelay {
    pub fn new(client: Arc<dyn ClickUpClient>, config: &ClickUpConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            destinations: config.destinations.clone(),
        }
    }

    /// フォーム送信を ClickUp のタスクとして転送する
    ///
    /// 1. 必須項目（`type`, `name`, `email`）を検証
    /// 2. API キーが設定されていることを確認
    /// 3. フォーム種別を確定し、送信先リスト ID を解決
    /// 4. タスク名と説明文を組み立て
    /// 5. ClickUp にタスク作成を 1 回だけ依頼
    ///
    /// 最初に失敗したステップのエラーを返す。3 までに失敗した場合、外部 API は呼ばない。
    /// API キーの確認は種別の解決より先に行うため、キー未設定なら種別が不明でも
    /// `ServerMisconfigured`（500）になる。
    pub async fn relay(&self, form: SubmissionForm) -> Result<Value, RelayError> {
        let draft = form.require_fields()?;

        let api_key = self
            .api_key
            .as_ref()
            .ok_or(RelayError::ServerMisconfigured)?;

        let submission = draft.classify()?;
        let list_id = self.destinations.resolve(submission.form_type)?;

        let payload = TaskPayload::from_submission(&submission);

        let task = self.client.create_task(list_id, api_key, &payload).await?;

        tracing::info!(
            form_type = %submission.form_type,
            list_id = %list_id,
            "ClickUp にタスクを作成しました"
        );

        Ok(task)
    }
}
