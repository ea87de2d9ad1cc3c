use wasm_bindgen::JsValue;

pub type PageResult<T> = Result<T, PageError>;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("browser global unavailable: {0}")]
    MissingGlobal(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
