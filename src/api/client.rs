//! 主経路のAPIクライアント
//!
//! 固定ベースURL・Cookie保持・JSONのContent-Typeを既定とし、
//! 失敗時はエラーボディから取り出したメッセージで `ApiError` を返す。

use job_board_common::api_error::finish_primary;
use job_board_common::request::{join_url, HttpMethod, RawResponse, RequestOptions};
use job_board_common::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{log_exchange, read_response, to_reqwest_method};

/// 共有HTTPクライアント
///
/// 内部の `reqwest::Client` とCookieストアはクローン間で共有される。
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::transport(format!("HTTPクライアントの初期化に失敗: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// 構築済みの `reqwest::Client` を使う（プロキシ設定などを呼び出し側で決める場合）
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// リクエストを送信し、成功時はボディを `T` として返す
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let result = self.send(endpoint, options).await;
        let response = log_exchange(options.method, endpoint, result)?;
        finish_primary(&response)
    }

    async fn send(&self, endpoint: &str, options: &RequestOptions) -> Result<RawResponse, ApiError> {
        let url = join_url(&self.base_url, endpoint);
        let mut builder = self.client.request(to_reqwest_method(options.method), &url);
        for (name, value) in options.effective_headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = options.body_string() {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        read_response(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, &RequestOptions::new(HttpMethod::Get)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request_with_body(HttpMethod::Post, endpoint, body).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request_with_body(HttpMethod::Put, endpoint, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, &RequestOptions::new(HttpMethod::Delete)).await
    }
}

impl ApiClient {
    async fn request_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = match to_json(body) {
            Ok(body) => body,
            // 送信前の失敗もログに残す
            Err(err) => return log_exchange(method, endpoint, Err(err)).and_then(|r| finish_primary(&r)),
        };
        self.request(endpoint, &RequestOptions::new(method).with_body(body)).await
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::transport(format!("リクエストボディのシリアライズに失敗: {}", e)))
}
