//! バックエンドAPIクライアント
//!
//! - client: 主経路（reqwestの高レベルAPI、Cookie保持）
//! - legacy: 旧経路（`reqwest::Request` を直接組み立て、Content-Typeで分岐）
//!
//! どちらも送受信を `RawResponse` までで区切り、結果を `log_exchange` に通してから
//! 成否判定する。途中のどこで失敗しても1件の構造化ログが出る。

pub mod client;
pub mod legacy;

pub use client::ApiClient;

use job_board_common::request::{ApiLogEntry, HttpMethod, RawResponse};
use job_board_common::ApiError;
use reqwest::header::CONTENT_TYPE;

pub(crate) fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// ステータステキスト: サーバのreason phrase、なければ標準の文言
fn status_text(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        .or_else(|| response.status().canonical_reason())
        .unwrap_or("")
        .to_string()
}

/// レスポンスを本文まで読み切る
pub(crate) async fn read_response(response: reqwest::Response) -> Result<RawResponse, ApiError> {
    let status = response.status().as_u16();
    let status_text = status_text(&response);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
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

/// 1回の呼び出しの結果をログに出してそのまま返す
pub(crate) fn log_exchange(
    method: HttpMethod,
    endpoint: &str,
    result: Result<RawResponse, ApiError>,
) -> Result<RawResponse, ApiError> {
    match &result {
        Ok(response) => log_call(&ApiLogEntry::from_response(method, endpoint, response)),
        Err(err) => log_call(&ApiLogEntry::from_error(method, endpoint, err)),
    }
    result
}

fn log_call(entry: &ApiLogEntry) {
    let status = entry.status.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
    if entry.is_success() {
        tracing::info!(
            method = %entry.method,
            endpoint = %entry.endpoint,
            status = %status,
            body = %entry.body,
            "API response"
        );
    } else {
        tracing::error!(
            method = %entry.method,
            endpoint = %entry.endpoint,
            status = %status,
            body = %entry.body,
            "API error"
        );
    }
}
