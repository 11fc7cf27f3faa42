//! JavaScript向けエクスポート
//!
//! ```js
//! const me = await apiRequest("/auth/me");
//! await legacyApiRequest("/jobs/3/apply", { method: "POST", body: { note: "hi" } });
//! ```
//!
//! 失敗時は `Error(message)` でrejectする。

use job_board_common::{ApiError, RequestOptions};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::{client, legacy, to_js};

fn parse_options(options: JsValue) -> Result<RequestOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(RequestOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| js_sys::Error::new(&format!("Invalid request options: {}", e)).into())
}

fn to_js_error(err: ApiError) -> JsValue {
    js_sys::Error::new(&err.message).into()
}

fn to_js_result(value: &Value) -> Result<JsValue, JsValue> {
    to_js(value).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

/// 主経路（gloo-net）で呼び出す
#[wasm_bindgen(js_name = "apiRequest")]
pub async fn api_request(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    let value: Value = client::request(&endpoint, &options)
        .await
        .map_err(to_js_error)?;
    to_js_result(&value)
}

/// 旧経路（web-sys fetch）で呼び出す
#[wasm_bindgen(js_name = "legacyApiRequest")]
pub async fn legacy_api_request(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    let value: Value = legacy::legacy_request(&endpoint, &options)
        .await
        .map_err(to_js_error)?;
    to_js_result(&value)
}

/// 設定されているAPIベースURL
#[wasm_bindgen(js_name = "apiBaseUrl")]
pub fn api_base_url_js() -> String {
    super::api_base_url().to_string()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use job_board_common::HttpMethod;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_missing_options_default_to_get() {
        let options = parse_options(JsValue::UNDEFINED).expect("default options");
        assert_eq!(options, RequestOptions::default());
    }

    #[wasm_bindgen_test]
    fn wasm_options_object_is_parsed() {
        let raw = js_sys::JSON::parse(r#"{"method":"POST","body":{"a":1},"headers":{"X-Trace":"t"}}"#)
            .expect("valid JSON");
        let options = parse_options(raw).expect("parsed options");
        assert_eq!(options.method, HttpMethod::Post);
        assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("t"));
    }

    #[wasm_bindgen_test]
    async fn wasm_invalid_header_name_fails_before_fetch() {
        let options = RequestOptions::default().with_header("bad header", "x");
        let err = legacy::legacy_request::<Value>("/jobs", &options)
            .await
            .unwrap_err();
        assert_eq!(err.status, None);
        assert!(!err.message.is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_error_rejects_with_message() {
        let err = to_js_error(ApiError::new(Some(401), "invalid token"));
        assert_eq!(super::super::js_error_message(&err), "invalid token");
    }
}
