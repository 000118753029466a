//! # アプリケーション構築
//!
//! ルーター定義とレイヤー構成を担当する。`main.rs` と統合テストの両方から使う。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use formrelay_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{SUBMISSION_PATH, health_check, method_not_allowed, preflight, submit_form},
    middleware::cors_headers,
    usecase::SubmissionRelay,
};

/// ルーターを構築する
///
/// 送信エンドポイントは POST / OPTIONS 以外のメソッドを 405 にし、
/// CORS ヘッダーはエラー応答を含む全レスポンスに付与する。
pub fn build_app(relay: Arc<SubmissionRelay>) -> Router {
    let submission_routes = Router::new()
        .route(
            SUBMISSION_PATH,
            post(submit_form)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(from_fn(cors_headers))
        .with_state(relay);

    Router::new()
        .merge(submission_routes)
        .route("/health", get(health_check))
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
