//! # Observability 基盤
//!
//! ログ初期化（`LOG_FORMAT` / `RUST_LOG`）と、Request ID の生成・スパンへの埋め込み。

/// Request ID のヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `RUST_LOG` が未設定のときのフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,formrelay=debug";

/// ログ出力形式（`LOG_FORMAT`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// 1 行 1 JSON（本番環境向け）
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// 設定値を解釈する
    ///
    /// 未設定は `Pretty`。不明な値も `Pretty` にするが、subscriber がまだ無いので
    /// 警告は stderr に直接書く。
    pub fn from_setting(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        raw.parse().unwrap_or_else(|_| {
            eprintln!("WARNING: LOG_FORMAT={raw:?} は不明な値です。pretty で出力します");
            Self::Pretty
        })
    }
}

/// ログ初期化の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// ルートスパン `app` の `service` フィールド
    pub service_name: String,
    pub log_format:   LogFormat,
    /// `EnvFilter` のディレクティブ
    pub filter:       String,
}

impl TracingConfig {
    /// `LOG_FORMAT` と `RUST_LOG` から設定を作る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// 任意の取得関数から設定を作る（空文字は未設定扱い）
    pub fn from_lookup<F>(service_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            service_name: service_name.into(),
            log_format:   LogFormat::from_setting(var("LOG_FORMAT").as_deref()),
            filter:       var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// グローバル subscriber を登録し、ルートスパン `app` に入る
///
/// 戻り値のガードを保持している間、全ログに `service` が付く。
/// JSON 形式では `span.service` と、リクエスト中は `request_id` が出力される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!(
            "WARNING: RUST_LOG={:?} を解釈できません（{e}）。{DEFAULT_LOG_FILTER} を使います",
            config.filter
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info_span!("app", service = %config.service_name).entered()
}

/// UUID v7 で Request ID を生成する `MakeRequestId` 実装
///
/// `SetRequestIdLayer` に渡す。クライアントが `X-Request-Id` を付けてきた場合は
/// レイヤー側でその値が優先される。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// `TraceLayer` 用のリクエストスパンを作る
///
/// `request_id` をスパンに含めることで、リクエスト中のすべてのログに自動で付与される。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
