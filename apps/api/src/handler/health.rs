//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! ClickUp への疎通は確認せず、プロセスの起動状態のみを返す。

use axum::Json;
use formrelay_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK と `{"status":"healthy","version":"..."}` を返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
