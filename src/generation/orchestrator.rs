use super::outcome::GenerationOutcome;
use super::progress::ProgressReporter;
use crate::audio::write_wav;
use crate::client::SpeechBackend;
use crate::request::{GenerationRequest, RequestBuilder};
use crate::response::ResponseDecoder;
use crate::utils::output_file_name;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Sequences build → external call → decode → write for one request.
///
/// Owns no per-request state, so concurrent `generate` calls on one instance
/// do not interfere.
pub struct Orchestrator<B> {
    backend: B,
    output_dir: PathBuf,
    builder: RequestBuilder,
    decoder: ResponseDecoder,
    clock: Clock,
}

impl<B: SpeechBackend> Orchestrator<B> {
    pub fn new(backend: B, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            output_dir: output_dir.into(),
            builder: RequestBuilder::new(),
            decoder: ResponseDecoder::new(),
            clock: Arc::new(|| chrono::Local::now().naive_local()),
        }
    }

    pub fn with_request_builder(mut self, builder: RequestBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Replace the timestamp source used for output file names.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the audio for `text` would be written right now.
    pub fn output_path_for(&self, text: &str) -> PathBuf {
        self.output_dir.join(output_file_name(text, (self.clock)()))
    }

    /// Runs one generation. Never panics on service or disk failures; every
    /// failure comes back as [`GenerationOutcome::Failure`].
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        reporter: &dyn ProgressReporter,
    ) -> GenerationOutcome {
        match self.run(request, reporter).await {
            Ok((output_path, bytes_written)) => GenerationOutcome::Success {
                output_path,
                bytes_written,
            },
            Err(err) => {
                warn!(
                    code = err.kind().code(),
                    kind = err.kind().name(),
                    error = %err,
                    "generation failed"
                );
                reporter.report(&format!("Error: {}", err));
                GenerationOutcome::from_error(&err)
            }
        }
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        reporter: &dyn ProgressReporter,
    ) -> Result<(PathBuf, u64)> {
        reporter.report("Building request...");
        let payload = self.builder.build(request)?;

        reporter.report(if payload.is_multi_speaker() {
            "Generating multi-speaker audio..."
        } else {
            "Generating audio with Gemini TTS..."
        });
        info!(
            model = payload.model.id(),
            voices = %request.mode.voice_summary(),
            estimated_tokens = payload.estimated_tokens,
            "tts request started"
        );
        let started = Instant::now();
        let response = self.backend.generate_content(&payload).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let response = response.map_err(|e| {
            warn!(elapsed_ms, "tts request failed");
            e
        })?;

        reporter.report("Decoding audio response...");
        let audio = self.decoder.extract(&response)?;
        info!(
            elapsed_ms,
            pcm_bytes = audio.len(),
            duration_secs = audio.duration_secs(),
            "tts response received"
        );

        reporter.report("Saving audio file...");
        let output_path = self.output_path_for(request.text.trim());
        let bytes_written = write_wav(&audio, &output_path)?;

        let file_name = saved_file_name(&output_path)?;
        reporter.report(&format!("Audio saved successfully: {}", file_name));
        info!(path = %output_path.display(), bytes_written, "generation complete");

        Ok((output_path, bytes_written))
    }
}

/// Final path component, for the success message.
fn saved_file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            Error::io_write(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })
}
