//! # エラーレスポンス
//!
//! クライアントに返すエラーエンベロープ `{ "error": ..., "details"?: ... }`。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - `error` はクライアント向けの固定文言。内部エラーの詳細は含めない
//! - `details` は外部 API のエラーボディをそのまま中継する場合にのみ使う

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// 詳細なしのエラー
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error:   error.into(),
            details: None,
        }
    }

    /// 詳細付きのエラー
    pub fn with_details(error: impl Into<String>, details: Value) -> Self {
        Self {
            error:   error.into(),
            details: Some(details),
        }
    }

    /// 500 Internal Server Error
    ///
    /// 文言は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
