//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、転送ロジックはユースケース層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs            # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs     # ヘルスチェックハンドラ
//!     └── submission.rs # フォーム送信ハンドラ
//! ```

pub mod health;
pub mod submission;

pub use health::health_check;
pub use submission::{SUBMISSION_PATH, method_not_allowed, preflight, submit_form};
