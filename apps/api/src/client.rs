//! # 外部 API クライアント
//!
//! ClickUp との通信を担当する。

pub mod clickup;

pub use clickup::{ApiKey, ClickUpClient, ClickUpClientImpl, ClickUpError};
