//! 統合テスト共通のスタブとヘルパー

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, Response},
};
use formrelay_api::{
    app_builder::build_app,
    client::{ApiKey, ClickUpClient, ClickUpError},
    config::ClickUpConfig,
    usecase::SubmissionRelay,
};
use formrelay_domain::{
    destination::{DestinationMap, ListId},
    task::TaskPayload,
};
use serde_json::Value;

pub const QUOTE_LIST_ID: &str = "901-quote";
pub const CONTACT_LIST_ID: &str = "902-contact";

/// ClickUp へのリクエスト 1 回分の記録
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub list_id: ListId,
    pub api_key: String,
    pub payload: TaskPayload,
}

/// 固定の結果を返し、呼び出しを記録する ClickUp スタブ
pub struct StubClickUpClient {
    result: Result<Value, ClickUpError>,
    calls:  Mutex<Vec<RecordedCall>>,
}

impl StubClickUpClient {
    pub fn returning(result: Result<Value, ClickUpError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickUpClient for StubClickUpClient {
    async fn create_task(
        &self,
        list_id: &ListId,
        api_key: &ApiKey,
        payload: &TaskPayload,
    ) -> Result<Value, ClickUpError> {
        self.calls.lock().unwrap().push(RecordedCall {
            list_id: list_id.clone(),
            api_key: api_key.expose().to_string(),
            payload: payload.clone(),
        });
        self.result.clone()
    }
}

/// 全項目設定済みの ClickUp 設定
pub fn clickup_config() -> ClickUpConfig {
    ClickUpConfig {
        api_key:      Some(ApiKey::new("pk_test_key")),
        api_url:      "http://clickup.invalid/api/v2".to_string(),
        destinations: DestinationMap::new(
            Some(ListId::new(QUOTE_LIST_ID)),
            Some(ListId::new(CONTACT_LIST_ID)),
        ),
    }
}

pub fn app_with(stub: Arc<StubClickUpClient>, config: &ClickUpConfig) -> Router {
    build_app(Arc::new(SubmissionRelay::new(stub, config)))
}

pub fn request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
