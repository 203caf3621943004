//! API bindings using Tauri's invoke system via JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use techstore_infra::LoadWarning;
use techstore_products::{DiscountBand, SortOrder};

use crate::types::{GridView, ViewOptions};

/// Helper to invoke Tauri commands from WASM.
///
/// The Tauri API is available via `window.__TAURI__` (`app.withGlobalTauri`).
async fn invoke_tauri<T>(cmd: &str, args: JsValue) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let window = window().ok_or_else(|| "No window object".to_string())?;

    let tauri_obj = js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map_err(|e| format!("Failed to get __TAURI__: {:?}", e))?;

    let core = js_sys::Reflect::get(&tauri_obj, &JsValue::from_str("core"))
        .map_err(|e| format!("Failed to get core: {:?}", e))?;

    let invoke_fn = js_sys::Reflect::get(&core, &JsValue::from_str("invoke"))
        .map_err(|e| format!("Failed to get invoke: {:?}", e))?;

    // Command arguments are passed as the top-level object: invoke(cmd, args)
    let invoke_function = js_sys::Function::from(invoke_fn);
    let promise = invoke_function
        .call2(&core, &JsValue::from_str(cmd), &args)
        .map_err(|e| format!("Failed to call invoke: {:?}", e))?;

    let result = JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(|e| format!("Invoke failed: {:?}", e))?;

    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to deserialize result: {:?}", e))
}

fn to_args(value: serde_json::Value) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Failed to serialize args: {:?}", e))
}

/// Entries of both selector controls.
pub async fn view_options() -> Result<ViewOptions, String> {
    invoke_tauri("view_options", JsValue::UNDEFINED).await
}

/// Render the catalog for the given selector values.
pub async fn catalog_view(band: DiscountBand, order: SortOrder) -> Result<GridView, String> {
    let args = to_args(serde_json::json!({
        "band": band,
        "order": order,
    }))?;

    invoke_tauri("catalog_view", args).await
}

/// Warning produced while loading the catalog at startup, if any.
pub async fn load_warning() -> Result<Option<LoadWarning>, String> {
    invoke_tauri("load_warning", JsValue::UNDEFINED).await
}
