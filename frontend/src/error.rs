use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring behaviors onto the page.
///
/// A missing element is never one of these; modules skip quietly when their
/// markup isn't on the page.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{op} failed: {message}")]
    Dom { op: &'static str, message: String },
}

impl SetupError {
    pub fn dom(op: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        SetupError::Dom { op, message }
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub trait DomResultExt<T> {
    fn context(self, op: &'static str) -> Result<T, SetupError>;
}

impl<T> DomResultExt<T> for Result<T, JsValue> {
    fn context(self, op: &'static str) -> Result<T, SetupError> {
        self.map_err(|err| SetupError::dom(op, err))
    }
}
