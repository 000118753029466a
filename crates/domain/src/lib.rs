//! # FormRelay ドメイン層
//!
//! フォーム送信を ClickUp タスクへ変換するためのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **I/O を持たない**: HTTP や環境変数には一切依存せず、純粋な変換のみを扱う
//! - **段階的な検証**: 生の入力（[`submission::SubmissionForm`]）から
//!   検証済みの [`submission::Submission`] へ、型で段階を表現する
//! - **ドメインエラー**: 検証の失敗は [`DomainError`] で表現し、API 層で
//!   HTTP レスポンスに変換する
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → domain
//!  └──→ shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`destination`] - フォーム種別と ClickUp リスト ID の対応
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`submission`] - フォーム送信の入力モデルと検証
//! - [`task`] - ClickUp に送信するタスクペイロードの組み立て
//!
//! ## 使用例
//!
//! ```rust
//! use formrelay_domain::{submission::SubmissionForm, task::TaskPayload};
//!
//! let form = SubmissionForm::from_json(
//!     br#"{"type": "quote", "name": "Jane", "email": "jane@example.com"}"#,
//! );
//! let submission = form.require_fields()?.classify()?;
//! let payload = TaskPayload::from_submission(&submission);
//!
//! assert_eq!(payload.name, "QUOTE request from Jane");
//! # Ok::<(), formrelay_domain::DomainError>(())
//! ```

pub mod destination;
pub mod error;
pub mod submission;
pub mod task;

pub use error::DomainError;
