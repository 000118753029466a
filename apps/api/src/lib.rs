//! # FormRelay API ライブラリ
//!
//! フォーム送信を受け付け、ClickUp のタスクとして転送する API サーバーのコアモジュール。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Form UI     │────▶│ FormRelay API│────▶│ ClickUp API  │
//! │  (Browser)   │     │  port: 3000  │     │   (v2)       │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築（ミドルウェアの積み順を含む）
//! - `client`: 外部 API クライアント（ClickUp）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: API エラー定義と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（CORS ヘッダー付与）
//! - `usecase`: フォーム転送のユースケース

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;
