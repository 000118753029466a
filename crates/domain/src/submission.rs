//! # フォーム送信
//!
//! フロントエンドから送られるフォーム送信（見積依頼・問い合わせ）を表現する。
//!
//! ## 検証の段階
//!
//! ```text
//! SubmissionForm ──require_fields()──▶ SubmissionDraft ──classify()──▶ Submission
//!   （生の入力）                        （必須項目あり）                 （種別確定）
//! ```
//!
//! 2 段階に分けているのは、API 層で必須項目チェックと種別解決の間に
//! サーバー設定（API キー）の検証を挟むため。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoStaticStr;

use crate::{DomainError, task::render_value};

/// フォーム種別
///
/// JSON の `type` フィールドの値（小文字）に対応する。大文字小文字は区別する。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormType {
    /// 見積依頼
    Quote,
    /// 問い合わせ
    Contact,
}

/// 生のフォーム入力
///
/// リクエストボディをそのまま受け取る。すべてのフィールドが省略可能で、
/// 検証は [`SubmissionForm::require_fields`] で行う。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub form_type: Option<String>,
    pub name:      Option<String>,
    pub email:     Option<String>,
    pub message:   Option<String>,
    /// 任意の追加項目（予算、納期など）
    pub extra:     Option<Value>,
}

impl SubmissionForm {
    /// リクエストボディからフォーム入力を読み取る
    ///
    /// フィールドごとに読み取るため、ある項目の型が合わなくても他の項目には影響しない。
    ///
    /// - JSON として不正なボディ、オブジェクト以外の JSON: 空のフォーム
    /// - `type` / `name` / `email`: 文字列以外は未指定として扱う
    /// - `message`: 文字列はそのまま、`null` は未指定、それ以外は JSON 表現の文字列
    /// - `extra`: `null` 以外をそのまま保持する
    pub fn from_json(body: &[u8]) -> Self {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let mut string_field = |key: &str| match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        let form_type = string_field("type");
        let name = string_field("name");
        let email = string_field("email");

        let message = match fields.remove("message") {
            None | Some(Value::Null) => None,
            Some(value) => Some(render_value(&value)),
        };
        let extra = fields.remove("extra").filter(|v| !v.is_null());

        Self {
            form_type,
            name,
            email,
            message,
            extra,
        }
    }

    /// 必須項目（`type`, `name`, `email`）が揃っていることを検証する
    ///
    /// 空文字は未指定と同じ扱い。
    pub fn require_fields(self) -> Result<SubmissionDraft, DomainError> {
        let (Some(form_type), Some(name), Some(email)) = (
            non_empty(self.form_type),
            non_empty(self.name),
            non_empty(self.email),
        ) else {
            return Err(DomainError::MissingRequiredFields);
        };

        Ok(SubmissionDraft {
            form_type,
            name,
            email,
            message: self.message,
            extra: self.extra,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 必須項目が揃ったフォーム入力
///
/// `form_type` はまだ文字列のまま。
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    pub form_type: String,
    pub name:      String,
    pub email:     String,
    pub message:   Option<String>,
    pub extra:     Option<Value>,
}

impl SubmissionDraft {
    /// フォーム種別を確定する
    ///
    /// `quote` / `contact` 以外は [`DomainError::UnknownFormType`]。
    pub fn classify(self) -> Result<Submission, DomainError> {
        let form_type = self
            .form_type
            .parse::<FormType>()
            .map_err(|_| DomainError::UnknownFormType(self.form_type.clone()))?;

        Ok(Submission {
            form_type,
            name: self.name,
            email: self.email,
            message: self.message,
            extra: self.extra,
        })
    }
}

/// 検証済みのフォーム送信
///
/// 1 リクエストの間だけ存在し、永続化しない。
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub form_type: FormType,
    pub name:      String,
    pub email:     String,
    pub message:   Option<String>,
    pub extra:     Option<Value>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case("quote", FormType::Quote)]
    #[case("contact", FormType::Contact)]
    fn test_小文字の種別文字列をパースできる(#[case] input: &str, #[case] expected: FormType) {
        assert_eq!(input.parse::<FormType>().unwrap(), expected);
    }

    #[rstest]
    #[case("Quote")]
    #[case("CONTACT")]
    #[case("newsletter")]
    #[case("")]
    fn test_未知の種別文字列はパースに失敗する(#[case] input: &str) {
        assert!(input.parse::<FormType>().is_err());
    }

    #[test]
    fn test_種別の文字列表現は小文字() {
        assert_eq!(FormType::Quote.to_string(), "quote");
        let contact: &'static str = FormType::Contact.into();
        assert_eq!(contact, "contact");
    }

    #[test]
    fn test_from_json_全フィールドを読み取る() {
        let form = SubmissionForm::from_json(
            br#"{
                "type": "quote",
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hello",
                "extra": {"budget": "5000"}
            }"#,
        );

        assert_eq!(
            form,
            SubmissionForm {
                form_type: Some("quote".to_string()),
                name:      Some("Jane".to_string()),
                email:     Some("jane@example.com".to_string()),
                message:   Some("Hello".to_string()),
                extra:     Some(json!({"budget": "5000"})),
            }
        );
    }

    #[rstest]
    #[case::不正なjson(b"{not json".as_slice())]
    #[case::空ボディ(b"".as_slice())]
    #[case::配列(br#"["quote", "Jane", "jane@example.com"]"#.as_slice())]
    #[case::文字列(br#""quote""#.as_slice())]
    fn test_from_json_読み取れないボディは空のフォームになる(#[case] body: &[u8]) {
        assert_eq!(SubmissionForm::from_json(body), SubmissionForm::default());
    }

    #[rstest]
    #[case::typeが数値(br#"{"type": 1, "name": "Jane", "email": "a@b.c"}"#.as_slice())]
    #[case::nameが数値(br#"{"type": "quote", "name": 42, "email": "a@b.c"}"#.as_slice())]
    #[case::emailが配列(br#"{"type": "quote", "name": "Jane", "email": ["a@b.c"]}"#.as_slice())]
    fn test_from_json_文字列でない必須項目は必須項目エラーになる(#[case] body: &[u8]) {
        assert_eq!(
            SubmissionForm::from_json(body).require_fields().unwrap_err(),
            DomainError::MissingRequiredFields
        );
    }

    #[rstest]
    #[case::数値(json!(123), "123")]
    #[case::オブジェクト(json!({"a": 1}), r#"{"a":1}"#)]
    #[case::配列(json!(["x"]), r#"["x"]"#)]
    #[case::真偽値(json!(true), "true")]
    fn test_from_json_文字列でないmessageも他の項目を保ったまま読み取る(
        #[case] message: Value,
        #[case] expected: &str,
    ) {
        let body = json!({
            "type": "quote",
            "name": "Jane",
            "email": "a@b.c",
            "message": message,
        })
        .to_string();

        let form = SubmissionForm::from_json(body.as_bytes());

        assert_eq!(form.message.as_deref(), Some(expected));
        assert!(form.require_fields().is_ok());
    }

    #[test]
    fn test_from_json_nullのフィールドは未指定として扱う() {
        let form = SubmissionForm::from_json(br#"{"type": "quote", "message": null, "extra": null}"#);

        assert_eq!(form.form_type.as_deref(), Some("quote"));
        assert_eq!(form.message, None);
        assert_eq!(form.extra, None);
    }

    fn valid_form() -> SubmissionForm {
        SubmissionForm {
            form_type: Some("contact".to_string()),
            name:      Some("Jane".to_string()),
            email:     Some("jane@example.com".to_string()),
            message:   None,
            extra:     None,
        }
    }

    #[test]
    fn test_require_fields_必須項目が揃っていれば成功する() {
        let draft = valid_form().require_fields().unwrap();

        assert_eq!(draft.form_type, "contact");
        assert_eq!(draft.name, "Jane");
        assert_eq!(draft.email, "jane@example.com");
    }

    #[rstest]
    #[case::typeなし(SubmissionForm { form_type: None, ..valid_form() })]
    #[case::nameなし(SubmissionForm { name: None, ..valid_form() })]
    #[case::emailなし(SubmissionForm { email: None, ..valid_form() })]
    #[case::type空文字(SubmissionForm { form_type: Some(String::new()), ..valid_form() })]
    #[case::name空文字(SubmissionForm { name: Some(String::new()), ..valid_form() })]
    #[case::email空文字(SubmissionForm { email: Some(String::new()), ..valid_form() })]
    fn test_require_fields_必須項目が欠けていればエラー(#[case] form: SubmissionForm) {
        assert_eq!(
            form.require_fields().unwrap_err(),
            DomainError::MissingRequiredFields
        );
    }

    #[test]
    fn test_classify_既知の種別でsubmissionになる() {
        let submission = valid_form().require_fields().unwrap().classify().unwrap();

        assert_eq!(submission.form_type, FormType::Contact);
        assert_eq!(submission.name, "Jane");
    }

    #[test]
    fn test_classify_未知の種別は入力文字列付きのエラーになる() {
        let form = SubmissionForm {
            form_type: Some("newsletter".to_string()),
            ..valid_form()
        };

        let err = form.require_fields().unwrap().classify().unwrap_err();

        assert_eq!(err, DomainError::UnknownFormType("newsletter".to_string()));
    }
}
