//! # タスクペイロード
//!
//! 検証済みのフォーム送信から、ClickUp のタスク作成 API に送る
//! `{name, description}` を組み立てる。
//!
//! ## 説明文のフォーマット
//!
//! ```text
//! Email: jane@example.com
//!
//! Message:
//! 見積をお願いします
//!
//! --- Extra ---
//! budget: 5000
//! timeline: 2 weeks
//! ```
//!
//! `--- Extra ---` 以降は `extra` がオブジェクト（または配列）のときのみ付与する。

use serde::Serialize;
use serde_json::Value;

use crate::submission::{FormType, Submission};

/// ClickUp に送信するタスク
///
/// シリアライズ結果がそのまま外部 API のリクエストボディになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub name:        String,
    pub description: String,
}

impl TaskPayload {
    /// フォーム送信からタスクを組み立てる（決定的）
    pub fn from_submission(submission: &Submission) -> Self {
        Self {
            name:        task_name(submission.form_type, &submission.name),
            description: build_description(
                &submission.email,
                submission.message.as_deref(),
                submission.extra.as_ref(),
            ),
        }
    }
}

/// タスク名を決める
pub fn task_name(form_type: FormType, name: &str) -> String {
    match form_type {
        FormType::Quote => format!("QUOTE request from {name}"),
        FormType::Contact => format!("Contact form from {name}"),
    }
}

/// タスクの説明文を組み立てる
///
/// `extra` のエントリは反復順（JSON の記述順）に 1 行ずつ出力する。
pub fn build_description(email: &str, message: Option<&str>, extra: Option<&Value>) -> String {
    let mut description = format!("Email: {email}\n\nMessage:\n{}", message.unwrap_or_default());

    let entries: Vec<(String, &Value)> = match extra {
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => return description,
    };

    description.push_str("\n\n--- Extra ---\n");
    for (key, value) in entries {
        description.push_str(&format!("{key}: {}\n", render_value(value)));
    }

    description
}

/// JSON 値を説明文用の文字列にする
///
/// 文字列は引用符なし、それ以外は JSON 表現。
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
