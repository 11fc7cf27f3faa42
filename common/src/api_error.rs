//! APIエラーの正規化
//!
//! バックエンドのエラーボディ `{"error": ..., "message": ...}` から
//! 人が読めるメッセージを取り出し、単一のエラー型 `ApiError` にまとめる。
//!
//! 抽出優先順位（JSONボディ）:
//! 1. `error`（文字列）
//! 2. `error.message`（ネストしたオブジェクト）
//! 3. `message`（文字列）
//! 4. 呼び出し経路ごとのフォールバック

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::request::RawResponse;

/// エラープレビューとして残す最大文字数
pub const PREVIEW_CHARS: usize = 200;

/// API呼び出しの統一エラー
///
/// 表示文字列はメッセージそのもの。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// レスポンスが得られなかった場合（接続失敗など）
    pub fn transport(description: impl Into<String>) -> Self {
        Self::new(None, description)
    }

    /// 2xxだがJSONとして解釈できなかった場合
    pub fn decode(status: u16, body_text: &str) -> Self {
        Self::new(
            Some(status),
            format!("Invalid JSON response: {}", truncate_chars(body_text, PREVIEW_CHARS)),
        )
    }
}

/// 先頭 `max` 文字を切り出す（UTF-8境界を壊さない）
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// エラーボディから既知のメッセージフィールドを取り出す
pub fn extract_error_message(body: &Value) -> Option<String> {
    let non_empty = |v: &Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    if let Some(error) = body.get("error") {
        if let Some(message) = non_empty(error) {
            return Some(message);
        }
        if let Some(message) = error.get("message").and_then(non_empty) {
            return Some(message);
        }
    }

    body.get("message").and_then(non_empty)
}

/// 主経路のトランスポート層エラー文言
pub fn status_failure_description(status: u16) -> String {
    format!("Request failed with status code {}", status)
}

/// 主経路: 非2xxレスポンスからメッセージを決定
///
/// ボディがJSONでない・既知フィールドがない場合はトランスポート層の文言を使う。
pub fn message_from_error_body(status: u16, body_text: &str) -> String {
    serde_json::from_str::<Value>(body_text)
        .ok()
        .and_then(|body| extract_error_message(&body))
        .unwrap_or_else(|| status_failure_description(status))
}

/// 主経路のエラーを構築
pub fn primary_error(status: u16, body_text: &str) -> ApiError {
    ApiError::new(Some(status), message_from_error_body(status, body_text))
}

/// Content-TypeがJSONか判定
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// 成功レスポンス本文を呼び出し側の型へ変換
///
/// 空ボディ（204など）は `null` として扱う。
pub fn decode_body<T: DeserializeOwned>(status: u16, body_text: &str) -> Result<T, ApiError> {
    let parsed = if body_text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(body_text)
    };
    parsed.map_err(|_| ApiError::decode(status, body_text))
}

/// 旧経路の成功レスポンス: JSON以外は文字列値として渡す
pub fn decode_legacy_body<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body_text: &str,
) -> Result<T, ApiError> {
    if is_json_content_type(content_type) {
        return decode_body(status, body_text);
    }
    serde_json::from_value(Value::String(body_text.to_string()))
        .map_err(|_| ApiError::decode(status, body_text))
}

/// 旧経路のフォールバック文言
///
/// ステータステキストが空（非標準コード、HTTP/2、ブラウザ）なら主経路と同じ文言を使う。
pub fn legacy_fallback_message(status: u16, status_text: &str) -> String {
    let text = status_text.trim();
    if text.is_empty() {
        status_failure_description(status)
    } else {
        text.to_string()
    }
}

/// 旧経路: Content-Typeを見てメッセージを決定
///
/// - JSON: 既知フィールド → ステータステキスト
/// - それ以外（またはJSONパース失敗）: 本文の先頭200文字 → 空ならステータステキスト
///
/// ステータステキストも空なら `Request failed with status code N`。
pub fn legacy_error_message(
    status: u16,
    status_text: &str,
    content_type: Option<&str>,
    body_text: &str,
) -> String {
    if is_json_content_type(content_type) {
        if let Ok(body) = serde_json::from_str::<Value>(body_text) {
            return extract_error_message(&body)
                .unwrap_or_else(|| legacy_fallback_message(status, status_text));
        }
    }

    let preview = truncate_chars(body_text, PREVIEW_CHARS);
    if preview.trim().is_empty() {
        legacy_fallback_message(status, status_text)
    } else {
        preview.to_string()
    }
}

/// 旧経路のエラーを構築
pub fn legacy_error(
    status: u16,
    status_text: &str,
    content_type: Option<&str>,
    body_text: &str,
) -> ApiError {
    ApiError::new(
        Some(status),
        legacy_error_message(status, status_text, content_type, body_text),
    )
}

/// 主経路: 受信済みレスポンスを結果に変換
pub fn finish_primary<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(primary_error(response.status, &response.body_text));
    }
    decode_body(response.status, &response.body_text)
}

/// 旧経路: 受信済みレスポンスを結果に変換
pub fn finish_legacy<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    let content_type = response.content_type.as_deref();
    if !response.is_success() {
        return Err(legacy_error(
            response.status,
            &response.status_text,
            content_type,
            &response.body_text,
        ));
    }
    decode_legacy_body(response.status, content_type, &response.body_text)
}

/// ログ用にボディをJSON値へ変換（JSONでなければ文字列として保持）
pub fn body_for_log(body_text: &str) -> Value {
    if body_text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body_text)
        .unwrap_or_else(|_| Value::String(truncate_chars(body_text, PREVIEW_CHARS).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_token_message() {
        let err = primary_error(401, r#"{"error":"invalid token"}"#);
        assert_eq!(err.message, "invalid token");
        assert_eq!(err.to_string(), "invalid token");
        assert_eq!(err.status, Some(401));
    }

    #[test]
    fn test_legacy_invalid_token_message() {
        let err = legacy_error(
            401,
            "Unauthorized",
            Some("application/json; charset=utf-8"),
            r#"{"error":"invalid token"}"#,
        );
        assert_eq!(err.to_string(), "invalid token");
    }

    #[test]
    fn test_extract_prefers_error_then_nested_then_message() {
        assert_eq!(
            extract_error_message(&json!({"error": "a", "message": "b"})).as_deref(),
            Some("a")
        );
        assert_eq!(
            extract_error_message(&json!({"error": {"message": "nested"}, "message": "b"}))
                .as_deref(),
            Some("nested")
        );
        assert_eq!(
            extract_error_message(&json!({"error": {"code": 3}, "message": "b"})).as_deref(),
            Some("b")
        );
        assert_eq!(extract_error_message(&json!({"error": ""})), None);
        assert_eq!(extract_error_message(&json!({"detail": "x"})), None);
        assert_eq!(extract_error_message(&json!([1, 2])), None);
    }

    #[test]
    fn test_primary_falls_back_to_transport_description() {
        assert_eq!(
            message_from_error_body(500, r#"{"detail":"boom"}"#),
            "Request failed with status code 500"
        );
        assert_eq!(
            message_from_error_body(503, "Service Unavailable"),
            "Request failed with status code 503"
        );
    }

    #[test]
    fn test_legacy_plain_text_is_truncated() {
        let message = legacy_error_message(503, "Service Unavailable", Some("text/plain"), "Service Unavailable");
        assert_eq!(message, "Service Unavailable");

        let long = "x".repeat(500);
        let message = legacy_error_message(502, "Bad Gateway", Some("text/html"), &long);
        assert_eq!(message.chars().count(), 200);
        assert_eq!(message, &long[..200]);
    }

    #[test]
    fn test_legacy_json_without_fields_uses_status_text() {
        let message =
            legacy_error_message(403, "Forbidden", Some("application/json"), r#"{"detail":"nope"}"#);
        assert_eq!(message, "Forbidden");
    }

    #[test]
    fn test_legacy_broken_json_falls_back_to_preview() {
        let message = legacy_error_message(400, "Bad Request", Some("application/json"), "<html>oops");
        assert_eq!(message, "<html>oops");
    }

    #[test]
    fn test_legacy_empty_body_uses_status_text() {
        assert_eq!(legacy_error_message(404, "Not Found", None, ""), "Not Found");
        assert_eq!(legacy_error_message(404, "Not Found", Some("text/plain"), "  "), "Not Found");
    }

    #[test]
    fn test_legacy_blank_status_text_uses_status_code() {
        assert_eq!(
            legacy_error_message(499, "", Some("application/json"), "{}"),
            "Request failed with status code 499"
        );
        assert_eq!(
            legacy_error_message(502, "  ", None, ""),
            "Request failed with status code 502"
        );
        assert_eq!(legacy_error(401, "Token Expired", None, "").message, "Token Expired");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "求人".repeat(150);
        let truncated = truncate_chars(&text, PREVIEW_CHARS);
        assert_eq!(truncated.chars().count(), 200);
        assert_eq!(truncate_chars("short", PREVIEW_CHARS), "short");
    }

    #[test]
    fn test_decode_error_preview() {
        let err = ApiError::decode(200, "not json at all");
        assert_eq!(err.message, "Invalid JSON response: not json at all");
        assert_eq!(err.status, Some(200));
    }

    #[test]
    fn test_decode_body() {
        let value: Value = decode_body(200, r#"{"ok":true}"#).unwrap();
        assert_eq!(value, json!({"ok": true}));

        let empty: Option<Value> = decode_body(204, "").unwrap();
        assert!(empty.is_none());

        let err = decode_body::<Value>(200, "<html>").unwrap_err();
        assert_eq!(err.message, "Invalid JSON response: <html>");
    }

    #[test]
    fn test_decode_legacy_body() {
        let text: String = decode_legacy_body(200, Some("text/plain"), "pong").unwrap();
        assert_eq!(text, "pong");

        let value: Value = decode_legacy_body(200, Some("application/json"), "[1,2]").unwrap();
        assert_eq!(value, json!([1, 2]));

        assert!(is_json_content_type(Some("Application/JSON; charset=utf-8")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_finish_primary_and_legacy() {
        let failed = RawResponse {
            status: 503,
            status_text: String::new(),
            content_type: Some("text/plain".into()),
            body_text: "Service Unavailable".into(),
        };
        let err = finish_primary::<Value>(&failed).unwrap_err();
        assert_eq!(err.message, "Request failed with status code 503");
        let err = finish_legacy::<Value>(&failed).unwrap_err();
        assert_eq!(err.message, "Service Unavailable");

        let ok = RawResponse {
            status: 200,
            status_text: "OK".into(),
            content_type: Some("text/plain".into()),
            body_text: "pong".into(),
        };
        assert_eq!(finish_legacy::<Value>(&ok).unwrap(), json!("pong"));
        assert!(finish_primary::<Value>(&ok).is_err());
    }

    #[test]
    fn test_body_for_log() {
        assert_eq!(body_for_log(""), Value::Null);
        assert_eq!(body_for_log(r#"{"ok":true}"#), json!({"ok": true}));
        assert_eq!(body_for_log("plain"), json!("plain"));
    }
}
