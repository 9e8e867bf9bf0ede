//! Error types for the clipboard-copy element
//!
//! A missing copy source is never an error. These cover DOM calls that
//! throw, clipboard writes that reject, and bad registration config.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum CopyError {
    /// A DOM call threw (setAttribute, classList, customElements.define, ...)
    Dom(String),
    /// The platform clipboard rejected the write
    Clipboard(String),
    /// Invalid registration options
    Config(String),
    /// No `window` (running outside a browser)
    NoWindow,
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Dom(msg) => write!(f, "DOM error: {}", msg),
            CopyError::Clipboard(msg) => write!(f, "Clipboard write failed: {}", msg),
            CopyError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            CopyError::NoWindow => write!(f, "No window"),
        }
    }
}

impl std::error::Error for CopyError {}

impl From<JsValue> for CopyError {
    fn from(value: JsValue) -> Self {
        CopyError::Dom(js_error_message(&value))
    }
}

impl From<CopyError> for JsValue {
    fn from(err: CopyError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort message extraction from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, CopyError>;
