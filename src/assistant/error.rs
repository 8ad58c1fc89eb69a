use serde::Serialize;

/// Why a call to the language model produced no usable text.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("no API credential configured (expected in ${0})")]
    MissingCredential(String),
    #[error("could not encode request context: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request to language model failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("language model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("language model response could not be decoded: {0}")]
    Malformed(String),
    #[error("language model returned no text")]
    EmptyResponse,
}

/// Copyable classification of [`AiError`], safe to hand to views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiErrorKind {
    MissingCredential,
    Encode,
    Network,
    Unauthorized,
    Upstream,
    Malformed,
    Empty,
}

impl AiError {
    pub fn kind(&self) -> AiErrorKind {
        match self {
            AiError::MissingCredential(_) => AiErrorKind::MissingCredential,
            AiError::Encode(_) => AiErrorKind::Encode,
            AiError::Network(_) => AiErrorKind::Network,
            AiError::Status { status: 401 | 403, .. } => AiErrorKind::Unauthorized,
            AiError::Status { .. } => AiErrorKind::Upstream,
            AiError::Malformed(_) => AiErrorKind::Malformed,
            AiError::EmptyResponse => AiErrorKind::Empty,
        }
    }
}
