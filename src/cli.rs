use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytnotes",
    about = "YouTube transcript to detailed notes converter",
    version
)]
pub struct Cli {
    /// YouTube video URL; opens the interactive form if omitted
    pub url: Option<String>,

    /// Output format for a one-shot run: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Preferred transcript language, repeat to give fallbacks [default: en]
    #[arg(short, long)]
    pub lang: Vec<String>,

    /// Write notes to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gemini model used for the notes [default: gemini-1.5-flash-latest]
    #[arg(long)]
    pub model: Option<String>,

    /// Gemini API base URL [default: https://generativelanguage.googleapis.com/v1beta]
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Show video ID, model and log location
    #[arg(short, long)]
    pub verbose: bool,
}
