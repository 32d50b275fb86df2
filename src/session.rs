//! Interactive form state: link input, thumbnail, "Get Detailed Notes" button
//! and the notes or error shown underneath.
//!
//! A `Session` never draws anything itself. Every transition returns the
//! elements a front end should render, so any number of sessions can share
//! one `NotesPipeline` without sharing state.

use log::{debug, error};

use crate::error::{PipelineError, TranscriptError};
use crate::pipeline::NotesPipeline;
use crate::{extract_video_id, thumbnail_url};

pub const TITLE: &str = "🎥 YouTube Transcript to Detailed Notes Converter";
pub const INPUT_LABEL: &str = "Enter YouTube Video Link:";
pub const BUTTON_LABEL: &str = "Get Detailed Notes";
pub const NOTES_HEADING: &str = "## 📝 Detailed Notes:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Idle,
    AwaitingInput,
    IdentifierShown { video_id: String, thumbnail_url: String },
    Generating,
    ResultShown { summary: String },
    ErrorShown { message: String },
}

/// Something for the front end to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Title(String),
    Thumbnail(String),
    Error(String),
    Heading(String),
    Markdown(String),
}

#[derive(Debug)]
pub struct Session {
    url: String,
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            state: State::Idle,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Show the form and start waiting for a link
    pub fn open(&mut self) -> Vec<Element> {
        self.state = State::AwaitingInput;
        vec![Element::Title(TITLE.to_string())]
    }

    /// The link input changed
    pub fn set_url(&mut self, input: &str) -> Vec<Element> {
        self.url = input.trim().to_string();
        if self.url.is_empty() {
            self.state = State::AwaitingInput;
            return vec![];
        }

        match extract_video_id(&self.url) {
            Ok(video_id) => {
                let thumbnail = thumbnail_url(&video_id);
                debug!("Showing thumbnail for {video_id}");
                self.state = State::IdentifierShown {
                    video_id,
                    thumbnail_url: thumbnail.clone(),
                };
                vec![Element::Thumbnail(thumbnail)]
            }
            Err(e) => {
                self.state = State::AwaitingInput;
                vec![Element::Error(e.to_string())]
            }
        }
    }

    /// The button was pressed. Blocks until the whole pipeline finishes.
    pub async fn press(&mut self, pipeline: &NotesPipeline) -> Vec<Element> {
        if self.url.is_empty() {
            return vec![];
        }

        self.state = State::Generating;
        match pipeline.run(&self.url).await {
            Ok(notes) => {
                self.state = State::ResultShown {
                    summary: notes.summary.clone(),
                };
                vec![
                    Element::Heading(NOTES_HEADING.to_string()),
                    Element::Markdown(notes.summary),
                ]
            }
            Err(e) => {
                if let PipelineError::Transcript(TranscriptError::Unexpected(detail)) = &e {
                    error!("Transcript retrieval failed for {}: {detail}", self.url);
                }
                let message = e.to_string();
                self.state = State::ErrorShown {
                    message: message.clone(),
                };
                vec![Element::Error(message)]
            }
        }
    }
}
