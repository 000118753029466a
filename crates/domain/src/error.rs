//! # ドメイン層エラー定義
//!
//! フォーム送信の検証で発生するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | クライアントへのメッセージ |
//! |-----------|----------------|--------------------------|
//! | `MissingRequiredFields` | 400 Bad Request | `Missing required fields` |
//! | `UnknownFormType` | 400 Bad Request | `Unknown form type` |
//!
//! クライアント向けの文言は API 層が決める。ここでの `Display` はログ用。
//!
//! ## 使用例
//!
//! ```rust
//! use formrelay_domain::{DomainError, submission::SubmissionForm};
//!
//! let form = SubmissionForm::from_json(br#"{"type": "quote"}"#);
//!
//! assert_eq!(form.require_fields().unwrap_err(), DomainError::MissingRequiredFields);
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// いずれもリクエスト単位で終端的なエラーであり、外部 API 呼び出しの前に発生する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須項目（`type`, `name`, `email`）のいずれかが未指定または空文字
    #[error("必須項目が不足しています")]
    MissingRequiredFields,

    /// フォーム種別が不明、または対応するリスト ID が設定されていない
    ///
    /// 受け取った種別文字列をそのまま保持する（ログ出力用）。
    #[error("不明なフォーム種別です: {0}")]
    UnknownFormType(String),
}
