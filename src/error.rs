use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaddieError {
    #[error("invalid {field}: {value:?} is not a number")]
    InvalidInput { field: &'static str, value: String },

    #[error("unknown {kind}: {value:?}")]
    UnknownOption { kind: &'static str, value: String },

    #[error("no club in the bag has a configured distance")]
    NoConfiguredClub,

    #[error("profile I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaddieError>;
