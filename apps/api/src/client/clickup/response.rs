//! ClickUp レスポンスの共通ハンドリング

use serde_json::Value;

use super::error::ClickUpError;

/// ClickUp レスポンスを解釈する
///
/// ボディは成功・失敗を問わず JSON として読む。
///
/// - 2xx: ボディをそのまま返す
/// - それ以外: `ClickUpError::Api`（ボディ付き）
/// - ボディが JSON でない: `ClickUpError::InvalidResponse`
pub(super) async fn handle_response(response: reqwest::Response) -> Result<Value, ClickUpError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
        ClickUpError::InvalidResponse(format!(
            "ステータス {status} のボディを JSON として解釈できません: {e}"
        ))
    })?;

    if status.is_success() {
        return Ok(body);
    }

    Err(ClickUpError::Api {
        status: status.as_u16(),
        body,
    })
}
