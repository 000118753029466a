//! # フォーム送信ハンドラ
//!
//! ## エンドポイント
//!
//! ```text
//! POST    /api/sendToClickUp   フォーム送信を ClickUp タスクとして転送
//! OPTIONS /api/sendToClickUp   CORS プリフライト（204、ボディなし）
//! その他  /api/sendToClickUp   405 Method not allowed
//! ```
//!
//! ボディは Content-Type を問わず JSON として読む。JSON として解釈できない
//! ボディは空のフォームとして扱い、必須項目の検証で 400 になる。

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use formrelay_domain::submission::SubmissionForm;
use formrelay_shared::TaskResponse;

use crate::{error::RelayError, usecase::SubmissionRelay};

/// フォーム送信エンドポイントのパス
pub const SUBMISSION_PATH: &str = "/api/sendToClickUp";

/// フォーム送信を受け付けて ClickUp に転送する
///
/// 成功時は 200 OK と `{"success": true, "task": <ClickUp のタスク>}` を返す。
pub async fn submit_form(
    State(relay): State<Arc<SubmissionRelay>>,
    body: Bytes,
) -> Result<impl IntoResponse, RelayError> {
    let form = SubmissionForm::from_json(&body);

    let task = relay.relay(form).await?;

    Ok((StatusCode::OK, Json(TaskResponse::new(task))))
}

/// CORS プリフライト
///
/// CORS ヘッダーはミドルウェアで付与する。
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// POST / OPTIONS 以外のメソッド
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}
