//! # 送信先マッピング
//!
//! フォーム種別から ClickUp のリスト ID を引く静的な対応表。
//! 起動時に設定から一度だけ構築し、リクエスト処理中は読み取り専用。

use derive_more::Display;

use crate::{DomainError, submission::FormType};

/// ClickUp リスト ID
///
/// ClickUp 側で払い出された識別子をそのまま保持する。形式は検証しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct ListId(String);

impl ListId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// フォーム種別 → リスト ID の対応表
///
/// 未設定の種別は「不明なフォーム種別」として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationMap {
    quote:   Option<ListId>,
    contact: Option<ListId>,
}

impl DestinationMap {
    pub fn new(quote: Option<ListId>, contact: Option<ListId>) -> Self {
        Self { quote, contact }
    }

    /// フォーム種別に対応するリスト ID を返す
    ///
    /// # エラー
    ///
    /// 対応するリスト ID が設定されていない場合は [`DomainError::UnknownFormType`]。
    pub fn resolve(&self, form_type: FormType) -> Result<&ListId, DomainError> {
        let list_id = match form_type {
            FormType::Quote => self.quote.as_ref(),
            FormType::Contact => self.contact.as_ref(),
        };

        list_id.ok_or_else(|| DomainError::UnknownFormType(form_type.to_string()))
    }
}
