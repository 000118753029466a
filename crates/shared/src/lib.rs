//! # FormRelay 共有ユーティリティ
//!
//! レスポンスエンベロープとログ初期化など、ビジネスロジックを含まない
//! 共通部品を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各アプリの責務）
//! - ログ関連の依存は `observability` feature の背後に置く

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::TaskResponse;
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
