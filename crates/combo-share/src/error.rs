use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Expected 6 segments, found {found}")]
    SegmentCount { found: usize },
    #[error("Invalid damage value: {0:?}")]
    Damage(String),
    #[error("Invalid percent-encoding in {segment} segment: {source}")]
    Percent {
        segment: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("No {0:?} parameter in share URL")]
    MissingParam(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
