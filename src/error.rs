use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid behavior config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        BehaviorError::Js(message)
    }
}

/// Logs a failed component operation and swallows it.
pub fn absorb(component: &str, result: Result<(), BehaviorError>) {
    match result {
        Ok(()) => {}
        Err(BehaviorError::MissingElement(what)) => {
            log::debug!("{}: skipped, {} not on page", component, what);
        }
        Err(e) => log::warn!("{}: {}", component, e),
    }
}
