//! voicegen: Gemini 文本转语音命令行工具
//!
//! Usage:
//!   voicegen generate --text "Hello" [--voice Kore] [--model flash|pro] [--language en-US]
//!   voicegen generate --file script.txt --speaker Alice=Kore --speaker Bob=Puck
//!   voicegen voices | models | languages
//!   voicegen set-key <KEY>
//!   voicegen status

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voicegen::request::validate_text;
use voicegen::store::{HistoryEntry, Settings};
use voicegen::utils::{estimate_audio_duration, format_duration, format_file_size};
use voicegen::{
    AppConfig, FailureKind, GenerationOutcome, GenerationRequest, GenerationWorker, Language,
    Orchestrator, SpeakerBinding, StructuredPrompt, TtsModel, Voice,
};

#[derive(Parser, Debug)]
#[command(name = "voicegen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate speech audio (WAV) with Google Gemini TTS")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a WAV file from text
    Generate(GenerateArgs),
    /// List available voices
    Voices,
    /// List available models
    Models,
    /// List supported languages
    Languages,
    /// Save the Gemini API key to the credentials file
    SetKey {
        /// API key (starts with "AIza")
        key: String,
    },
    /// Show today's API usage and configured paths
    Status,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Text to speak (use --file for longer scripts)
    #[arg(long, short = 't', conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file ("-" for stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,

    /// Voice for single-speaker mode
    #[arg(long, short = 'v', default_value = "Kore", conflicts_with = "speakers")]
    voice: Voice,

    /// Speaker binding NAME=VOICE; give twice for multi-speaker mode
    #[arg(long = "speaker", value_name = "NAME=VOICE", value_parser = parse_speaker)]
    speakers: Vec<SpeakerBinding>,

    /// Model: flash (fast) or pro (quality)
    #[arg(long, short = 'm', default_value = "flash")]
    model: TtsModel,

    /// Language hint (e.g. en-US), or "auto"
    #[arg(long, short = 'l', default_value = "auto")]
    language: String,

    /// Advanced mode: audio profile section
    #[arg(long)]
    profile: Option<String>,

    /// Advanced mode: scene section
    #[arg(long)]
    scene: Option<String>,

    /// Advanced mode: director's notes section
    #[arg(long)]
    notes: Option<String>,

    /// Output directory (remembered for next time)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn parse_speaker(s: &str) -> std::result::Result<SpeakerBinding, String> {
    let (name, voice) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VOICE, got '{}'", s))?;
    let voice: Voice = voice.parse().map_err(|e: voicegen::Error| e.to_string())?;
    Ok(SpeakerBinding::new(name.trim(), voice))
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let result = match cli.command {
        Command::Generate(args) => cmd_generate(&config, args).await,
        Command::Voices => {
            cmd_voices();
            Ok(ExitCode::SUCCESS)
        }
        Command::Models => {
            cmd_models();
            Ok(ExitCode::SUCCESS)
        }
        Command::Languages => {
            cmd_languages();
            Ok(ExitCode::SUCCESS)
        }
        Command::SetKey { key } => cmd_set_key(&config, &key),
        Command::Status => {
            cmd_status(&config);
            Ok(ExitCode::SUCCESS)
        }
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    })
}

fn cmd_voices() {
    println!("{:<16} STYLE", "VOICE");
    for voice in Voice::ALL {
        println!("{:<16} {}", voice.as_str(), voice.style());
    }
}

fn cmd_models() {
    for model in TtsModel::ALL {
        println!("{:<6} {:<32} {}", model.alias(), model.id(), model.display_name());
    }
}

fn cmd_languages() {
    println!("{:<8} Auto-detect", "auto");
    for lang in Language::all() {
        println!("{:<8} {}", lang.code(), lang.name());
    }
}

fn cmd_set_key(config: &AppConfig, key: &str) -> Result<ExitCode> {
    if key.trim().is_empty() {
        eprintln!("Please enter an API key");
        return Ok(ExitCode::FAILURE);
    }
    let store = config.credentials();
    store.save_key(key).context("saving API key")?;
    println!("API key saved to {}", store.path().display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_status(config: &AppConfig) {
    let today = Local::now().date_naive();
    let settings =
        Settings::load_or_default(&config.settings_file(), today, &config.default_output_dir);
    let usage = settings.usage();
    println!("{}", usage);
    println!(
        "Free tier estimate: {} requests/minute, ~{} left today",
        usage.requests_per_minute,
        usage.remaining_today()
    );
    println!("Output directory: {}", settings.output_dir.display());
    println!("Settings: {}", config.settings_file().display());
    println!("History: {}", config.history_log().path().display());
    let key = if config.credentials().resolve().is_some() {
        "configured"
    } else {
        "missing"
    };
    println!("API key: {}", key);
}

async fn cmd_generate(config: &AppConfig, args: GenerateArgs) -> Result<ExitCode> {
    let today = Local::now().date_naive();
    let settings_path = config.settings_file();
    let mut settings = Settings::load_or_default(&settings_path, today, &config.default_output_dir);
    if let Some(dir) = &args.output_dir {
        settings.output_dir = dir.clone();
        settings.save(&settings_path).context("saving settings")?;
    }

    let raw_text = read_text(&args)?;
    let text = StructuredPrompt::new(
        args.profile.clone().unwrap_or_default(),
        args.scene.clone().unwrap_or_default(),
        args.notes.clone().unwrap_or_default(),
        raw_text,
    )
    .compose();

    let language = match Language::parse_optional(&args.language) {
        Ok(l) => l,
        Err(e) => return Ok(report_failure(&GenerationOutcome::from_error(&e))),
    };
    let request = if args.speakers.is_empty() {
        GenerationRequest::single(text, args.voice)
    } else {
        GenerationRequest::multi(text, args.speakers)
    }
    .with_model(args.model)
    .with_language(language);

    if let Ok(tokens) = validate_text(&request.text, voicegen::request::DEFAULT_TOKEN_CEILING) {
        println!(
            "~{} tokens, estimated duration {}",
            tokens,
            format_duration(estimate_audio_duration(&request.text))
        );
    }

    let client = match config
        .client_builder()
        .maybe_api_key(config.credentials().resolve())
        .build()
    {
        Ok(client) => client,
        Err(e) => return Ok(report_failure(&GenerationOutcome::from_error(&e))),
    };

    let worker = GenerationWorker::new(Orchestrator::new(client, settings.output_dir.clone()));
    let voice_summary = request.mode.voice_summary();
    let source_text = request.text.clone();
    let handle = worker
        .try_spawn(request)
        .context("a generation is already running")?;

    let outcome = handle.finish(|m| println!("Status: {}", m)).await;

    match &outcome {
        GenerationOutcome::Success {
            output_path,
            bytes_written,
        } => {
            if let Err(e) = config.history_log().append(&HistoryEntry {
                timestamp: Local::now().naive_local(),
                voice: &voice_summary,
                output_path,
                text: &source_text,
            }) {
                tracing::warn!(error = %e, "could not append to history");
            }
            settings.record_generation(today);
            if let Err(e) = settings.save(&settings_path) {
                tracing::warn!(error = %e, "could not save settings");
            }

            println!();
            println!("Audio generated successfully!");
            println!(
                "Saved as: {} ({})",
                output_path.display(),
                format_file_size(*bytes_written)
            );
            println!("{}", settings.usage());
            Ok(ExitCode::SUCCESS)
        }
        GenerationOutcome::Failure { .. } => Ok(report_failure(&outcome)),
    }
}

fn read_text(args: &GenerateArgs) -> Result<String> {
    match (&args.text, &args.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            Ok(buf)
        }
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

fn report_failure(outcome: &GenerationOutcome) -> ExitCode {
    if let GenerationOutcome::Failure { kind, message } = outcome {
        eprintln!();
        eprintln!("{} [{}]", kind.title(), kind.code());
        eprintln!("{}", message);
        eprintln!("{}", kind.hint());
        return match kind {
            FailureKind::Validation | FailureKind::Configuration => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        };
    }
    ExitCode::SUCCESS
}
