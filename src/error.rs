use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{0} has no word form; only 0 through 100 can be spelled")]
    OutOfRange(f64),

    #[error("gave up after {draws} draws with only {accepted} distinct numbers")]
    ExhaustedRetries { draws: u32, accepted: usize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    #[error("no board cell at index {0}")]
    UnknownCell(usize),

    #[error("no tray piece with board index {0}")]
    UnknownPiece(usize),

    #[cfg(feature = "serde_json")]
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
