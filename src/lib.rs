pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod session;
pub mod summarize;
pub mod transcript;
pub mod youtube;

pub use error::{GenerationError, InvalidUrlError, PipelineError, TranscriptError};
pub use pipeline::{Notes, NotesPipeline};
pub use transcript::Segment;

const WATCH_PARAM: &str = "v=";
const SHORT_LINK_MARKER: &str = "youtu.be/";

/// Extract the video ID from a watch URL or a youtu.be short link
pub fn extract_video_id(input: &str) -> Result<String, InvalidUrlError> {
    let input = input.trim();

    let id = short_link_id(input)
        .or_else(|| watch_id(input))
        .ok_or(InvalidUrlError)?;

    if id.is_empty() {
        return Err(InvalidUrlError);
    }
    Ok(id.to_string())
}

/// youtu.be/ID[?...], only when the marker sits in the path
fn short_link_id(input: &str) -> Option<&str> {
    let path = input.split('?').next().unwrap_or_default();
    path.split_once(SHORT_LINK_MARKER).map(|(_, id)| id)
}

/// youtube.com/watch?v=ID[&...], first query parameter named `v`
fn watch_id(input: &str) -> Option<&str> {
    input
        .split(['?', '&'])
        .skip(1)
        .find_map(|param| param.strip_prefix(WATCH_PARAM))
}

/// Thumbnail image for a video, as served by YouTube's image host
pub fn thumbnail_url(video_id: &str) -> String {
    format!("http://img.youtube.com/vi/{video_id}/0.jpg")
}
