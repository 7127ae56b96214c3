use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlopError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown keyboard layout: '{0}' (expected qwerty, azerty, qwertz, dvorak or colemak)")]
    UnknownLayout(String),
}

pub type SdResult<T> = Result<T, SlopError>;
