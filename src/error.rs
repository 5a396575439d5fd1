use thiserror::Error;
use wasm_bindgen::JsValue;

/// Setup-time failures. Gesture handling itself never produces one.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("element `{0}` is not mounted")]
    MissingElement(String),
    #[error("element `{0}` is not an HtmlElement")]
    NotHtmlElement(String),
    #[error("invalid site content: {0}")]
    Content(#[from] serde_json::Error),
    #[error("web api error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(v: JsValue) -> Self {
        SiteError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
