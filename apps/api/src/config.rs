//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! 設定は起動時に一度だけ読み込み、構造体としてユースケースに注入する。
//! リクエスト処理中にプロセスの環境変数を参照することはない。
//! テストでは [`ApiConfig::from_lookup`] に任意の取得関数を渡して構築する。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `3000` | ポート番号 |
//! | `CLICKUP_API_KEY` | No* | - | ClickUp API キー |
//! | `CLICKUP_LIST_ID_QUOTE` | No* | - | 見積依頼の送信先リスト ID |
//! | `CLICKUP_LIST_ID_CONTACT` | No* | - | 問い合わせの送信先リスト ID |
//! | `CLICKUP_API_URL` | No | `https://api.clickup.com/api/v2` | ClickUp API のベース URL |
//!
//! \* 未設定でも起動はできる。API キーが無い場合は全送信が `Server misconfigured`、
//! リスト ID が無い種別は `Unknown form type` になる。空文字は未設定と同じ扱い。

use std::env;

use formrelay_domain::destination::{DestinationMap, ListId};
use thiserror::Error;

use crate::client::{ApiKey, clickup::DEFAULT_API_URL};

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("API_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    /// URL として解釈できない
    #[error("CLICKUP_API_URL が不正です: {0}")]
    InvalidApiUrl(String),
}

/// HTTP サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// ClickUp 連携の設定
#[derive(Debug, Clone)]
pub struct ClickUpConfig {
    /// API キー（未設定の場合はリクエスト時に `Server misconfigured`）
    pub api_key:      Option<ApiKey>,
    /// API のベース URL
    pub api_url:      String,
    /// フォーム種別 → リスト ID
    pub destinations: DestinationMap,
}

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server:  ServerConfig,
    pub clickup: ClickUpConfig,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// `lookup` は変数名を受け取り、値があれば `Some` を返す。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("API_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let api_url = var("CLICKUP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url::Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidApiUrl(format!("{api_url} ({e})")))?;

        Ok(Self {
            server:  ServerConfig {
                host: var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port,
            },
            clickup: ClickUpConfig {
                api_key: var("CLICKUP_API_KEY").map(ApiKey::new),
                api_url,
                destinations: DestinationMap::new(
                    var("CLICKUP_LIST_ID_QUOTE").map(ListId::new),
                    var("CLICKUP_LIST_ID_CONTACT").map(ListId::new),
                ),
            },
        })
    }
}
