use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComboError {
    #[error("Unrecognized notation in {notation:?}: {unmatched:?}")]
    Format { notation: String, unmatched: Vec<String> },
    #[error("Invalid combo: {0}")]
    Validation(String),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ComboError>;
