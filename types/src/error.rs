use thiserror::Error;

/// Structural mismatch against an expected message shape.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("message is not a JSON object")]
    NotAnObject,

    #[error("no recognized message variant")]
    NoVariant,

    #[error("more than one recognized message variant")]
    AmbiguousVariant,

    #[error("unknown voice name: {0}")]
    UnknownVoice(String),

    #[error("invalid `{variant}` payload: {source}")]
    Payload {
        variant: &'static str,
        source: serde_json::Error,
    },
}

impl ValidationError {
    pub(crate) fn payload(variant: &'static str, source: serde_json::Error) -> Self {
        Self::Payload { variant, source }
    }
}

/// A frame or blob whose raw bytes could not be turned into structured data.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("frame is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary frame is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),
}
