use log::{debug, info};
use serde::Serialize;

use crate::error::PipelineError;
use crate::prompt::compose_prompt;
use crate::summarize::{TextGenerator, generate};
use crate::transcript::{TranscriptService, fetch_transcript};
use crate::{extract_video_id, thumbnail_url};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notes {
    pub video_id: String,
    pub thumbnail_url: String,
    pub summary: String,
}

/// Link in, notes out: extract, fetch, compose, generate.
///
/// Collaborators are handed in at construction; the pipeline keeps no
/// per-request state, so a single instance can serve many sessions.
pub struct NotesPipeline {
    transcripts: Box<dyn TranscriptService>,
    generator: Box<dyn TextGenerator>,
    model: String,
}

impl NotesPipeline {
    pub fn new(
        transcripts: Box<dyn TranscriptService>,
        generator: Box<dyn TextGenerator>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transcripts,
            generator,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn run(&self, url: &str) -> Result<Notes, PipelineError> {
        let video_id = extract_video_id(url)?;
        info!("Fetching transcript for {video_id}");

        let transcript = fetch_transcript(self.transcripts.as_ref(), &video_id).await?;
        if transcript.is_empty() {
            return Err(PipelineError::EmptyTranscript);
        }
        debug!("Transcript for {video_id}: {} chars", transcript.len());

        let prompt = compose_prompt(&transcript);
        let summary = generate(self.generator.as_ref(), &self.model, &prompt).await?;
        info!("Generated {} chars of notes for {video_id}", summary.len());

        Ok(Notes {
            thumbnail_url: thumbnail_url(&video_id),
            video_id,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{GenerationError, InvalidUrlError, TranscriptError};
    use crate::prompt::PROMPT_TEMPLATE;
    use crate::transcript::Segment;

    #[derive(Clone, Default)]
    struct Calls(Arc<Mutex<Vec<String>>>);

    impl Calls {
        fn push(&self, call: String) {
            self.0.lock().unwrap().push(call);
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    struct FakeTranscripts {
        result: Result<Vec<Segment>, TranscriptError>,
        calls: Calls,
    }

    #[async_trait]
    impl TranscriptService for FakeTranscripts {
        async fn segments(&self, video_id: &str) -> Result<Vec<Segment>, TranscriptError> {
            self.calls.push(format!("transcript:{video_id}"));
            self.result.clone()
        }
    }

    struct FakeGenerator {
        result: Result<String, GenerationError>,
        calls: Calls,
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
            self.calls.push(format!("generate:{model}:{prompt}"));
            self.result.clone()
        }
    }

    fn pipeline(
        segments: Result<Vec<Segment>, TranscriptError>,
        summary: Result<String, GenerationError>,
    ) -> (NotesPipeline, Calls) {
        let calls = Calls::default();
        let pipeline = NotesPipeline::new(
            Box::new(FakeTranscripts {
                result: segments,
                calls: calls.clone(),
            }),
            Box::new(FakeGenerator {
                result: summary,
                calls: calls.clone(),
            }),
            "test-model",
        );
        (pipeline, calls)
    }

    fn hello_world() -> Vec<Segment> {
        vec![Segment::new("hello", 0.0, 1.0), Segment::new("world", 1.0, 1.0)]
    }

    #[tokio::test]
    async fn test_run_success() {
        let (pipeline, calls) = pipeline(Ok(hello_world()), Ok("Summary: X".to_string()));
        let notes = pipeline.run("https://www.youtube.com/watch?v=abc123&t=30").await.unwrap();

        assert_eq!(notes.video_id, "abc123");
        assert_eq!(notes.thumbnail_url, "http://img.youtube.com/vi/abc123/0.jpg");
        assert_eq!(notes.summary, "Summary: X");
        assert_eq!(
            calls.take(),
            vec![
                "transcript:abc123".to_string(),
                format!("generate:test-model:{PROMPT_TEMPLATE}hello world"),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_calls() {
        let (pipeline, calls) = pipeline(Ok(hello_world()), Ok("unused".to_string()));
        let err = pipeline.run("not-a-youtube-link").await.unwrap_err();
        assert_eq!(err, PipelineError::InvalidUrl(InvalidUrlError));
        assert!(calls.take().is_empty());
    }

    #[tokio::test]
    async fn test_empty_transcript_skips_generation() {
        let (pipeline, calls) = pipeline(Ok(vec![]), Ok("unused".to_string()));
        let err = pipeline.run("https://youtu.be/xyz789").await.unwrap_err();
        assert_eq!(err, PipelineError::EmptyTranscript);
        assert_eq!(calls.take(), vec!["transcript:xyz789".to_string()]);
    }

    #[tokio::test]
    async fn test_transcript_error_skips_generation() {
        let (pipeline, calls) = pipeline(Err(TranscriptError::Disabled), Ok("unused".to_string()));
        let err = pipeline.run("https://youtu.be/xyz789").await.unwrap_err();
        assert_eq!(err.to_string(), "Transcripts are disabled for this video.");
        assert_eq!(calls.take().len(), 1);
    }

    #[tokio::test]
    async fn test_generation_error() {
        let quota = GenerationError::Quota("limit".to_string());
        let (pipeline, _calls) = pipeline(Ok(hello_world()), Err(quota.clone()));
        let err = pipeline.run("https://youtu.be/xyz789").await.unwrap_err();
        assert_eq!(err, PipelineError::Generation(quota));
    }
}
