use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderRequest {
    profile: Option<String>,
    sanitized: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> Result<JsValue, JsValue> {
    render_html_with_options(source, JsValue::UNDEFINED)
}

#[wasm_bindgen]
pub fn render_html_with_options(source: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let (render_options, sanitized) = options_from_js(options)?;

    let html = if sanitized {
        leafmark_core::render_sanitized(source, &render_options)
    } else {
        leafmark_core::render(source, &render_options)
    };

    serde_wasm_bindgen::to_value(&RenderResult { html })
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn options_from_js(value: JsValue) -> Result<(leafmark_core::RenderOptions, bool), JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok((leafmark_core::RenderOptions::chat(), false));
    }
    let parsed: RenderRequest =
        serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let options = match parsed.profile.as_deref() {
        None | Some("chat") => leafmark_core::RenderOptions::chat(),
        Some("history") => leafmark_core::RenderOptions::history(),
        Some(other) => {
            return Err(JsValue::from_str(&format!("unknown profile: {}", other)));
        }
    };
    Ok((options, parsed.sanitized.unwrap_or(false)))
}
