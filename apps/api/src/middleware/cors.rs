//! # CORS ミドルウェア
//!
//! 任意のオリジンのブラウザからフォームを送信できるよう、
//! 送信エンドポイントの全レスポンス（エラー・プリフライト含む）に
//! 固定の CORS ヘッダーを設定する。
//!
//! | ヘッダー | 値 |
//! |----------|----|
//! | `Access-Control-Allow-Origin` | `*` |
//! | `Access-Control-Allow-Methods` | `POST, OPTIONS` |
//! | `Access-Control-Allow-Headers` | `Content-Type` |

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// レスポンスに CORS ヘッダーを付与する
pub async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
