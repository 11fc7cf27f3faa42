//! APIリクエストの共通定義
//!
//! ネイティブ(reqwest)とブラウザ(fetch)の両クライアントで共有する:
//! - HttpMethod / RequestOptions: 呼び出し側が指定するリクエスト設定
//! - join_url: ベースURLとエンドポイントの結合
//! - RawResponse: 受信したレスポンスのうち判定に使う部分
//! - ApiLogEntry: 毎回出力する構造化ログ

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api_error::{body_for_log, ApiError};
use crate::error::Error;

/// ベースURL未設定時の既定値
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// ベースURLを上書きする環境変数名
pub const API_BASE_URL_ENV: &str = "JOB_BOARD_API_URL";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "put")]
    Put,
    #[serde(alias = "patch")]
    Patch,
    #[serde(alias = "delete")]
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(Error::Config(format!("未対応のHTTPメソッド: {}", other))),
        }
    }
}

/// 呼び出しごとのリクエスト設定
///
/// ヘッダは呼び出し側の指定が既定の `Content-Type: application/json` より優先される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// 既定ヘッダと呼び出し側ヘッダをマージした最終ヘッダ
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let overrides_content_type = self
            .headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE_HEADER));

        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        if !overrides_content_type {
            headers.push((CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        headers.extend(
            self.headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        headers
    }

    /// 送信用のボディ文字列
    pub fn body_string(&self) -> Option<String> {
        self.body.as_ref().map(|body| match body {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        })
    }
}

/// "Name: value" 形式のヘッダ指定をパース
pub fn parse_header(raw: &str) -> Result<(String, String), Error> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::Config(format!("ヘッダ形式が不正です (Name: value): {}", raw)))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Config(format!("ヘッダ名が空です: {}", raw)));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// ベースURLとエンドポイントを `/` 1つで結合
pub fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    if endpoint.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, endpoint)
}

/// 受信したレスポンス
///
/// 本文は読み切った状態で保持し、成否判定とデコードは呼び出し後にまとめて行う。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// サーバが返したreason phrase（HTTP/2やブラウザでは空のことがある）
    pub status_text: String,
    pub content_type: Option<String>,
    pub body_text: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 1回の呼び出しごとに出力する構造化ログ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiLogEntry {
    pub method: HttpMethod,
    pub endpoint: String,
    pub status: Option<u16>,
    pub body: Value,
}

impl ApiLogEntry {
    pub fn new(method: HttpMethod, endpoint: &str, status: Option<u16>, body: Value) -> Self {
        Self {
            method,
            endpoint: endpoint.to_string(),
            status,
            body,
        }
    }

    /// レスポンスを受信できた呼び出し
    pub fn from_response(method: HttpMethod, endpoint: &str, response: &RawResponse) -> Self {
        Self::new(
            method,
            endpoint,
            Some(response.status),
            body_for_log(&response.body_text),
        )
    }

    /// レスポンスを受信する前に失敗した呼び出し（URL・ヘッダ不正、接続失敗など）
    pub fn from_error(method: HttpMethod, endpoint: &str, err: &ApiError) -> Self {
        Self::new(method, endpoint, err.status, Value::String(err.message.clone()))
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(code) if (200..300).contains(&code))
    }
}

impl fmt::Display for ApiLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(f, "[API] {} {} -> {} {}", self.method, self.endpoint, status, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://x/api", "/jobs"), "http://x/api/jobs");
        assert_eq!(join_url("http://x/api/", "jobs"), "http://x/api/jobs");
        assert_eq!(join_url("http://x/api//", "//jobs/1"), "http://x/api/jobs/1");
        assert_eq!(join_url("http://x/api", ""), "http://x/api");
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!(" Delete ".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("TRACE".parse::<HttpMethod>().is_err());
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_default_headers_include_json_content_type() {
        let headers = RequestOptions::default().effective_headers();
        assert_eq!(
            headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_caller_content_type_overrides_default() {
        let options = RequestOptions::new(HttpMethod::Post)
            .with_header("content-type", "text/plain")
            .with_header("X-Trace", "abc");
        let headers = options.effective_headers();

        // BTreeMapの順序: 大文字の "X-Trace" が小文字の "content-type" より先
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0], ("X-Trace".to_string(), "abc".to_string()));
        assert_eq!(headers[1], ("content-type".to_string(), "text/plain".to_string()));
    }

    #[test]
    fn test_body_string() {
        let options = RequestOptions::new(HttpMethod::Post).with_body(json!({"a": 1}));
        assert_eq!(options.body_string().as_deref(), Some(r#"{"a":1}"#));

        let raw = RequestOptions::new(HttpMethod::Post).with_body(json!("plain"));
        assert_eq!(raw.body_string().as_deref(), Some("plain"));

        assert!(RequestOptions::default().body_string().is_none());
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Api-Key: secret:1").unwrap(),
            ("X-Api-Key".to_string(), "secret:1".to_string())
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_options_deserialize_from_js_shape() {
        let options: RequestOptions = serde_json::from_value(json!({
            "method": "PATCH",
            "body": {"x": true},
            "headers": {"X-Trace": "abc"}
        }))
        .unwrap();
        assert_eq!(options.method, HttpMethod::Patch);
        assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("abc"));

        let lower: RequestOptions = serde_json::from_value(json!({"method": "post"})).unwrap();
        assert_eq!(lower.method, HttpMethod::Post);

        let bare: RequestOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare, RequestOptions::default());
    }

    #[test]
    fn test_log_entry_display() {
        let entry = ApiLogEntry::new(HttpMethod::Get, "/me", Some(401), json!({"error": "x"}));
        assert!(!entry.is_success());
        assert_eq!(format!("{}", entry), r#"[API] GET /me -> 401 {"error":"x"}"#);

        let ok = ApiLogEntry::new(HttpMethod::Get, "/me", Some(204), Value::Null);
        assert!(ok.is_success());
    }

    #[test]
    fn test_log_entry_from_response_and_error() {
        let response = RawResponse {
            status: 200,
            status_text: "OK".into(),
            content_type: Some("application/json".into()),
            body_text: r#"{"ok":true}"#.into(),
        };
        let entry = ApiLogEntry::from_response(HttpMethod::Post, "/jobs", &response);
        assert!(entry.is_success());
        assert_eq!(entry.body, json!({"ok": true}));

        let err = ApiError::transport("ヘッダ名が不正です");
        let entry = ApiLogEntry::from_error(HttpMethod::Get, "/jobs", &err);
        assert!(!entry.is_success());
        assert_eq!(entry.status, None);
        assert_eq!(entry.body, json!("ヘッダ名が不正です"));
    }
}
