use wasm_bindgen::prelude::*;

use crate::models::CartItem;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Ask the host for the initial cart contents.
#[allow(clippy::future_not_send)]
pub async fn fetch_cart() -> Result<Vec<CartItem>, String> {
    let result = invoke("get_cart", JsValue::NULL)
        .await
        .map_err(|e| format!("get_cart IPC failed: {}", describe_js_error(&e)))?;

    serde_wasm_bindgen::from_value::<Vec<CartItem>>(result)
        .map_err(|e| format!("Failed to parse cart response: {e}"))
}

/// Have the host re-read its catalog, then fetch the refreshed cart.
#[allow(clippy::future_not_send)]
pub async fn reload_cart() -> Result<Vec<CartItem>, String> {
    invoke("reload_cart", JsValue::NULL)
        .await
        .map_err(|e| format!("reload_cart IPC failed: {}", describe_js_error(&e)))?;

    fetch_cart().await
}

/// Tauri rejects with plain strings; anything else is rendered as JSON.
fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| "Unknown IPC error".to_string())
}
