//! Crate error type.
//!
//! Nothing here is ever shown to the visitor. The browser host logs these
//! and carries on, so a missing element or a refused write only disables
//! the feature that hit it.

#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    /// A DOM call was rejected (bad selector, detached node, and so on).
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// `localStorage` was unavailable or refused the write.
    #[error("preference storage failed: {0}")]
    Storage(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ChromeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
