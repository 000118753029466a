//! # ユースケース
//!
//! ハンドラから呼ばれるアプリケーションロジック。

pub mod relay;

pub use relay::SubmissionRelay;
