use thiserror::Error;

/// Failure of the external model call.
///
/// The HTTP layer does not tell these apart; they all become a 500 carrying
/// the display text.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request to model provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not decode model response: {0}")]
    MalformedResponse(String),

    #[error("model returned no text{}", .reason.as_ref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse { reason: Option<String> },

    #[error("{0}")]
    Other(String),
}
