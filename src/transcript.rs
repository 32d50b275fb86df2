use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TranscriptError;

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Anything that can list the caption segments of a video, in playback order
#[async_trait]
pub trait TranscriptService: Send + Sync {
    async fn segments(&self, video_id: &str) -> Result<Vec<Segment>, TranscriptError>;
}

/// Fetch a video's transcript as one space-separated blob.
///
/// Zero segments is not an error here; the result is simply empty.
pub async fn fetch_transcript(service: &dyn TranscriptService, video_id: &str) -> Result<String, TranscriptError> {
    let segments = service.segments(video_id).await?;
    debug!("Fetched {} segments for {video_id}", segments.len());
    Ok(join_segments(&segments))
}

pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
