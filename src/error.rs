use thiserror::Error;

/// The link matched neither a watch URL nor a short link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid YouTube URL format.")]
pub struct InvalidUrlError;

/// Failures from the transcript service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for this video.")]
    Disabled,

    #[error("No transcript found for this video.")]
    NotFound,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for TranscriptError {
    fn from(err: reqwest::Error) -> Self {
        TranscriptError::Unexpected(err.to_string())
    }
}

/// Failures from the text-generation service. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered but refused to produce any text
    #[error("no summary was produced: {0}")]
    Blocked(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error("Transcript is empty or could not be retrieved.")]
    EmptyTranscript,

    #[error("Could not generate notes, {0}")]
    Generation(#[from] GenerationError),
}
