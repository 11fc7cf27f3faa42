//! 主経路のAPI呼び出し（gloo-net）
//!
//! 固定ベースURL・Cookie送信（credentials: include）・JSONのContent-Typeを既定とする。

use gloo::net::http::{Method, RequestBuilder};
use job_board_common::api_error::finish_primary;
use job_board_common::request::{join_url, HttpMethod, RawResponse, RequestOptions};
use job_board_common::ApiError;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use super::{api_base_url, log_exchange};

fn to_gloo_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// リクエストを送信し、成功時はボディを `T` として返す
pub async fn request<T: DeserializeOwned>(
    endpoint: &str,
    options: &RequestOptions,
) -> Result<T, ApiError> {
    let result = send(endpoint, options).await;
    let response = log_exchange(options.method, endpoint, result)?;
    finish_primary(&response)
}

async fn send(endpoint: &str, options: &RequestOptions) -> Result<RawResponse, ApiError> {
    let url = join_url(api_base_url(), endpoint);

    let mut builder = RequestBuilder::new(&url)
        .method(to_gloo_method(options.method))
        .credentials(RequestCredentials::Include);
    for (name, value) in options.effective_headers() {
        builder = builder.header(&name, &value);
    }

    let request = match options.body_string() {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::transport(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let content_type = response.headers().get("content-type");
    let body_text = response
        .text()
        .await
        .map_err(|e| ApiError::new(Some(status), e.to_string()))?;

    Ok(RawResponse {
        status,
        status_text,
        content_type,
        body_text,
    })
}
