//! ClickUp クライアントのエラー型

use serde_json::Value;
use thiserror::Error;

/// ClickUp クライアントエラー
///
/// 通信失敗と API のエラー応答を区別する。
#[derive(Debug, Clone, Error)]
pub enum ClickUpError {
    /// ネットワークエラー（接続失敗、タイムアウト、ボディ読み取り失敗）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// ClickUp が成功以外のステータスを返した
    ///
    /// `body` はエラーレスポンスの JSON をそのまま保持する。
    #[error("ClickUp API エラー（ステータス {status}）: {body}")]
    Api { status: u16, body: Value },

    /// レスポンスボディが JSON として読めない
    #[error("不正なレスポンス: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClickUpError {
    fn from(err: reqwest::Error) -> Self {
        ClickUpError::Network(err.to_string())
    }
}
