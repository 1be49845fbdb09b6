//! Reads the structured data the host injects into `window.openai`.

use gloo::console::warn;
use serde::Deserialize;
use serde_json::{Map, Value};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::config::HOST_GLOBAL;
use crate::error::HostError;

/// Snapshot of the host global. Only the fields the widget reads are kept;
/// host API methods and anything else are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostGlobals {
    pub tool_output: Option<Value>,
    pub tool_response_metadata: Option<ToolResponseMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponseMetadata {
    pub structured_content: Option<Map<String, Value>>,
}

impl HostGlobals {
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `toolResponseMetadata.structuredContent.name`, if it is a non-empty string.
    pub fn display_name(&self) -> Option<&str> {
        self.tool_response_metadata
            .as_ref()?
            .structured_content
            .as_ref()?
            .get("name")?
            .as_str()
            .filter(|name| !name.is_empty())
    }
}

/// A missing host has no name either.
pub fn display_name(host: Option<&HostGlobals>) -> Option<String> {
    host.and_then(HostGlobals::display_name).map(str::to_owned)
}

/// Walks `window.openai` one link at a time, so members the widget never
/// reads cannot spoil the read. `Ok(None)` while the host has not injected
/// its global yet.
pub fn load_host_globals(window: &Window) -> Result<Option<HostGlobals>, HostError> {
    let Some(host) = member(window, HOST_GLOBAL)? else {
        return Ok(None);
    };

    // Unused by the greeting; dropped when it has no JSON form.
    let tool_output = member(&host, "toolOutput")?.and_then(|v| to_json(&v).ok());

    let tool_response_metadata = match member(&host, "toolResponseMetadata")? {
        Some(meta) => Some(ToolResponseMetadata {
            structured_content: structured_content(&meta)?,
        }),
        None => None,
    };

    Ok(Some(HostGlobals {
        tool_output,
        tool_response_metadata,
    }))
}

fn structured_content(meta: &JsValue) -> Result<Option<Map<String, Value>>, HostError> {
    let Some(content) = member(meta, "structuredContent")? else {
        return Ok(None);
    };
    if let Ok(Value::Object(map)) = to_json(&content) {
        return Ok(Some(map));
    }

    // Payload has no JSON form: keep the name alone.
    let mut map = Map::new();
    if let Some(name) = member(&content, "name")?.and_then(|v| v.as_string()) {
        map.insert("name".to_string(), Value::String(name));
    }
    Ok(Some(map))
}

/// `target[key]`, with `undefined`, `null` and non-object targets as `None`.
fn member(target: &JsValue, key: &str) -> Result<Option<JsValue>, HostError> {
    if !(target.is_object() || target.is_function()) {
        return Ok(None);
    }
    let value = js_sys::Reflect::get(target, &JsValue::from_str(key))
        .map_err(|e| HostError::Read(format!("{key}: {}", describe(&e))))?;
    Ok((!value.is_undefined() && !value.is_null()).then_some(value))
}

fn to_json(value: &JsValue) -> Result<Value, HostError> {
    let json = js_sys::JSON::stringify(value)
        .map_err(|e| HostError::Encode(describe(&e)))?
        .as_string()
        .ok_or_else(|| HostError::Encode("value has no JSON form".into()))?;
    Ok(serde_json::from_str(&json)?)
}

/// Default reader handed to the app at mount. Failures count as "no host".
pub fn read_window_host() -> Option<HostGlobals> {
    let window = web_sys::window()?;
    match load_host_globals(&window) {
        Ok(host) => host,
        Err(e) => {
            warn!(format!("ignoring host global: {e}"));
            None
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
