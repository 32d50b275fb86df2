use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::{error, info, warn};

use ytnotes::config::{Config, Overrides};
use ytnotes::output::{render_element, render_json, render_text};
use ytnotes::session::{BUTTON_LABEL, INPUT_LABEL, Session};
use ytnotes::summarize::GeminiClient;
use ytnotes::youtube::YouTubeTranscripts;
use ytnotes::{NotesPipeline, PipelineError, TranscriptError};

mod cli;

use cli::{Cli, OutputFormat};

const API_KEY_VAR: &str = "GOOGLE_API_KEY";

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytnotes.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytnotes")
        .join("logs")
}

fn build_after_help() -> String {
    let key_line = match std::env::var(API_KEY_VAR) {
        Ok(k) if !k.trim().is_empty() => format!("  \x1b[32m✅\x1b[0m {API_KEY_VAR}"),
        _ => format!("  \x1b[31m❌\x1b[0m {API_KEY_VAR} (not set — notes generation will fail)"),
    };

    let log_path = log_dir().join("ytnotes.log");

    format!(
        "\nCREDENTIALS:\n{key_line}\n\nConfig is read from: {}\nLogs are written to: {}",
        ytnotes::config::config_path().display(),
        log_path.display()
    )
}

fn build_pipeline(cli: &Cli, config: Config, api_key: Option<String>) -> NotesPipeline {
    let client = reqwest::Client::new();

    let settings = config.resolve(Overrides {
        model: cli.model.clone(),
        languages: cli.lang.clone(),
        endpoint: cli.endpoint.clone(),
    });

    info!(
        "Using model {} at {}, transcript languages {:?}",
        settings.model, settings.endpoint, settings.languages
    );

    NotesPipeline::new(
        Box::new(YouTubeTranscripts::new(client.clone(), settings.languages)),
        Box::new(GeminiClient::with_endpoint(client, api_key, &settings.endpoint)),
        settings.model,
    )
}

async fn run_once(cli: &Cli, pipeline: &NotesPipeline, url: &str) -> Result<()> {
    let notes = match pipeline.run(url).await {
        Ok(notes) => notes,
        Err(e) => {
            if let PipelineError::Transcript(TranscriptError::Unexpected(detail)) = &e {
                error!("Transcript retrieval failed for {url}: {detail}");
            }
            bail!("{e}");
        }
    };

    if cli.verbose {
        eprintln!(
            "Video: {}\nThumbnail: {}\nModel: {}",
            notes.video_id,
            notes.thumbnail_url,
            pipeline.model(),
        );
    }

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&notes),
        OutputFormat::Json => render_json(&notes),
    };

    if let Some(ref path) = cli.output {
        std::fs::write(path, &rendered)?;
        if cli.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{rendered}");
    }
    Ok(())
}

async fn run_form(pipeline: &NotesPipeline) -> Result<()> {
    let mut session = Session::new();
    for element in session.open() {
        println!("{}", render_element(&element));
    }
    println!("{INPUT_LABEL}");
    eprintln!("(paste a link, press Enter on an empty line to {BUTTON_LABEL}, Ctrl-D to quit)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let elements = if line.trim().is_empty() {
            if !session.url().is_empty() {
                eprintln!("Generating notes...");
            }
            session.press(pipeline).await
        } else {
            session.set_url(&line)
        };

        for element in &elements {
            println!("{}", render_element(element));
        }
    }
    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry RUST_LOG, so load it before the logger reads the environment
    let dotenv_path = dotenvy::dotenv().ok();
    setup_logging()?;

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring invalid config file: {e:?}");
        Config::default()
    });

    if cli.verbose {
        let config_path = ytnotes::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Logs: {}", log_dir().join("ytnotes.log").display());
    }

    let api_key = std::env::var(API_KEY_VAR).ok();
    if api_key.is_none() {
        warn!("{API_KEY_VAR} is not set; notes generation will fail with an authentication error");
    }

    let pipeline = build_pipeline(&cli, config, api_key);

    match cli.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => run_once(&cli, &pipeline, url).await,
        _ => run_form(&pipeline).await,
    }
}
