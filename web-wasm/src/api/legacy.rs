//! 旧経路のAPI呼び出し（web-sys fetch）
//!
//! レスポンスのContent-Typeを見て、JSONならエラーフィールド、
//! それ以外は本文の先頭200文字をエラーメッセージにする。

use job_board_common::api_error::finish_legacy;
use job_board_common::request::{join_url, RawResponse, RequestOptions};
use job_board_common::ApiError;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::{api_base_url, js_error_message, log_exchange};

fn transport_error(value: JsValue) -> ApiError {
    ApiError::transport(js_error_message(&value))
}

pub async fn legacy_request<T: DeserializeOwned>(
    endpoint: &str,
    options: &RequestOptions,
) -> Result<T, ApiError> {
    let result = send(endpoint, options).await;
    let response = log_exchange(options.method, endpoint, result)?;
    finish_legacy(&response)
}

async fn send(endpoint: &str, options: &RequestOptions) -> Result<RawResponse, ApiError> {
    let url = join_url(api_base_url(), endpoint);

    let opts = RequestInit::new();
    opts.set_method(options.method.as_str());
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = options.body_string() {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport_error)?;
    for (name, value) in options.effective_headers() {
        request.headers().set(&name, &value).map_err(transport_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::transport("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

    let status = resp.status();
    let status_text = resp.status_text();
    let content_type = resp.headers().get("content-type").ok().flatten();
    let body_text = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse {
        status,
        status_text,
        content_type,
        body_text,
    })
}
