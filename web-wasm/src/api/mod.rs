//! バックエンドAPI連携（ブラウザ）
//!
//! - client: 主経路（gloo-net、credentials: include）
//! - legacy: 旧経路（web-sysのRequest/fetchを直接使用）
//! - bindings: JavaScriptから呼ぶためのエクスポート

pub mod bindings;
pub mod client;
pub mod legacy;

use job_board_common::request::{ApiLogEntry, HttpMethod, RawResponse, DEFAULT_API_BASE_URL};
use job_board_common::ApiError;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// ビルド時の環境変数 `JOB_BOARD_API_URL`、未指定なら既定値
pub fn api_base_url() -> &'static str {
    option_env!("JOB_BOARD_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
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

/// 呼び出し1回分の構造化ログをコンソールへ出力
fn log_call(entry: &ApiLogEntry) {
    let record = to_js(entry).unwrap_or(JsValue::NULL);
    let label = entry.to_string();
    if entry.is_success() {
        gloo::console::log!(label, record);
    } else {
        gloo::console::error!(label, record);
    }
}

/// JS例外から表示用メッセージを取り出す
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// JSONと同じ形（Mapではなく素のObject）でJS値へ変換
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
