//! 旧経路のAPI呼び出し
//!
//! `reqwest::Request` を直接組み立てて `Client::execute` で送る。
//! 失敗時はレスポンスのContent-Typeを見て、JSONならエラーフィールド、
//! それ以外は本文の先頭200文字をメッセージにする。
//! 主経路とはフォールバック文言（ステータステキスト）と切り詰めの有無が異なる。

use job_board_common::api_error::finish_legacy;
use job_board_common::request::{join_url, RawResponse, RequestOptions};
use job_board_common::ApiError;
use reqwest::header::{HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::client::ApiClient;
use super::{log_exchange, read_response, to_reqwest_method};

impl ApiClient {
    pub async fn legacy_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let result = self.send_legacy(endpoint, options).await;
        let response = log_exchange(options.method, endpoint, result)?;
        finish_legacy(&response)
    }

    async fn send_legacy(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, ApiError> {
        let url = join_url(&self.base_url, endpoint);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| ApiError::transport(format!("URLが不正です: {} ({})", url, e)))?;

        let mut request = reqwest::Request::new(to_reqwest_method(options.method), parsed);
        for (name, value) in options.effective_headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::transport(format!("ヘッダ名が不正です: {}", e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::transport(format!("ヘッダ値が不正です: {}", e)))?;
            request.headers_mut().insert(name, value);
        }
        if let Some(body) = options.body_string() {
            *request.body_mut() = Some(body.into());
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        read_response(response).await
    }
}
