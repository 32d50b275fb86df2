/// Instruction placed in front of every transcript
pub const PROMPT_TEMPLATE: &str = "You are a YouTube video summarizer. You will be taking the transcript text
and summarizing the entire video, providing the important summary in points within 250 words.
Please provide the summary of the text given here: ";

/// Build the model input for a transcript
pub fn compose_prompt(transcript: &str) -> String {
    format!("{PROMPT_TEMPLATE}{transcript}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_text() {
        assert!(PROMPT_TEMPLATE.starts_with("You are a YouTube video summarizer."));
        assert!(PROMPT_TEMPLATE.contains("within 250 words.\n"));
        assert!(PROMPT_TEMPLATE.ends_with("given here: "));
    }

    #[test]
    fn test_compose_appends_transcript_verbatim() {
        let transcript = "hello world";
        let prompt = compose_prompt(transcript);
        assert!(prompt.starts_with(PROMPT_TEMPLATE));
        assert_eq!(prompt.strip_prefix(PROMPT_TEMPLATE), Some(transcript));
    }

    #[test]
    fn test_compose_recovers_awkward_transcripts() {
        for transcript in ["", " leading space", "line\nbreaks\n", "given here: twice"] {
            let prompt = compose_prompt(transcript);
            assert_eq!(&prompt[PROMPT_TEMPLATE.len()..], transcript);
        }
    }

    #[test]
    fn test_empty_transcript_is_template() {
        assert_eq!(compose_prompt(""), PROMPT_TEMPLATE);
    }
}
