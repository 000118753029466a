//! # API エラーハンドリング
//!
//! フォーム転送のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError)   ClickUp クライアントエラー (ClickUpError)
//!                 ↓ From                       ↓ From
//!                 └──────── RelayError ────────┘
//!                               ↓ IntoResponse
//!                  HTTP レスポンス (StatusCode + JSON)
//! ```
//!
//! ## マッピング
//!
//! | RelayError | HTTP Status | `error` |
//! |------------|-------------|---------|
//! | MethodNotAllowed | 405 | `Method not allowed` |
//! | BadRequest(MissingRequiredFields) | 400 | `Missing required fields` |
//! | BadRequest(UnknownFormType) | 400 | `Unknown form type` |
//! | ServerMisconfigured | 500 | `Server misconfigured` |
//! | ExternalApi | 500 | `ClickUp API error`（`details` 付き） |
//! | Internal | 500 | `Internal server error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_domain::DomainError;
use formrelay_shared::ErrorResponse;
use serde_json::Value;
use thiserror::Error;

use crate::client::ClickUpError;

/// フォーム転送で発生するエラー
///
/// どのエラーもリクエストに対して終端的で、内部でリトライしない。
#[derive(Debug, Error)]
pub enum RelayError {
    /// POST / OPTIONS 以外のメソッド（405）
    #[error("許可されていないメソッドです")]
    MethodNotAllowed,

    /// 入力の検証エラー（400）
    #[error("不正なリクエスト: {0}")]
    BadRequest(#[from] DomainError),

    /// ClickUp API キーが設定されていない（500）
    #[error("ClickUp API キーが設定されていません")]
    ServerMisconfigured,

    /// ClickUp がエラーを返した（500）
    ///
    /// `details` は ClickUp のエラーボディ。クライアントにもそのまま返す。
    #[error("ClickUp API エラー（ステータス {status}）")]
    ExternalApi { status: u16, details: Value },

    /// 通信失敗などの予期しないエラー（500）
    ///
    /// # セキュリティ注意
    ///
    /// 詳細はクライアントに返さない。サーバーサイドのログにのみ出力する。
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<ClickUpError> for RelayError {
    fn from(err: ClickUpError) -> Self {
        match err {
            ClickUpError::Api { status, body } => RelayError::ExternalApi {
                status,
                details: body,
            },
            ClickUpError::Network(_) | ClickUpError::InvalidResponse(_) => {
                RelayError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RelayError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),
            RelayError::BadRequest(DomainError::MissingRequiredFields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Missing required fields"),
            ),
            RelayError::BadRequest(DomainError::UnknownFormType(form_type)) => {
                tracing::info!(form_type = %form_type, "不明なフォーム種別を受信しました");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Unknown form type"),
                )
            }
            RelayError::ServerMisconfigured => {
                tracing::error!(
                    error.category = "configuration",
                    error.kind = "missing_api_key",
                    "CLICKUP_API_KEY が設定されていません"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Server misconfigured"),
                )
            }
            RelayError::ExternalApi { status, details } => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "clickup_api",
                    upstream_status = status,
                    details = %details,
                    "ClickUp API がエラーを返しました"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("ClickUp API error", details),
                )
            }
            RelayError::Internal(msg) => {
                // 内部エラーの詳細はログにのみ出力（セキュリティ考慮）
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = "internal",
                    "内部エラー: {msg}"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
