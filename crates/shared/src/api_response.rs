//! # 成功レスポンスエンベロープ
//!
//! タスク作成成功時のレスポンス形式 `{ "success": true, "task": T }` を提供する。

use serde::{Deserialize, Serialize};

/// タスク作成成功レスポンス
///
/// `task` には外部 API が返したタスク表現をそのまま入れる。
///
/// ## 使用例
///
/// ```
/// use formrelay_shared::TaskResponse;
///
/// let response = TaskResponse::new("task");
/// assert!(response.success);
/// assert_eq!(response.task, "task");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse<T> {
    pub success: bool,
    pub task:    T,
}

impl<T> TaskResponse<T> {
    /// 新しい成功レスポンスを作成する
    pub fn new(task: T) -> Self {
        Self {
            success: true,
            task,
        }
    }
}
