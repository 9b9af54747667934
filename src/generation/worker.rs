use super::orchestrator::Orchestrator;
use super::outcome::GenerationOutcome;
use super::progress::ChannelReporter;
use crate::client::SpeechBackend;
use crate::error_code::FailureKind;
use crate::request::GenerationRequest;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Semaphore};

/// Runs generations on the tokio runtime, at most one at a time.
///
/// The interactive side calls [`GenerationWorker::try_spawn`], renders
/// progress from the returned handle and awaits the outcome without blocking.
pub struct GenerationWorker<B> {
    orchestrator: Arc<Orchestrator<B>>,
    slot: Arc<Semaphore>,
}

impl<B> Clone for GenerationWorker<B> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<B: SpeechBackend + 'static> GenerationWorker<B> {
    pub fn new(orchestrator: Orchestrator<B>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            slot: Arc::new(Semaphore::new(1)),
        }
    }

    /// `true` while a generation is in flight.
    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }

    /// Starts `request` in the background, or returns `None` if one is
    /// already running. Must be called inside a tokio runtime.
    pub fn try_spawn(&self, request: GenerationRequest) -> Option<GenerationHandle> {
        let permit = Arc::clone(&self.slot).try_acquire_owned().ok()?;
        let orchestrator = Arc::clone(&self.orchestrator);
        let (progress_tx, progress_rx) = mpsc::unbounded_channel();
        let (outcome_tx, outcome_rx) = oneshot::channel();

        tokio::spawn(async move {
            let reporter = ChannelReporter::new(progress_tx);
            let outcome = orchestrator.generate(&request, &reporter).await;
            drop(permit);
            let _ = outcome_tx.send(outcome);
        });

        Some(GenerationHandle {
            progress: progress_rx,
            outcome: outcome_rx,
        })
    }
}

/// Progress stream and eventual outcome of one background generation.
pub struct GenerationHandle {
    progress: mpsc::UnboundedReceiver<String>,
    outcome: oneshot::Receiver<GenerationOutcome>,
}

impl GenerationHandle {
    /// Next progress message; `None` once the generation has finished
    /// and every message was drained.
    pub async fn next_progress(&mut self) -> Option<String> {
        self.progress.recv().await
    }

    /// Drains progress through `on_progress`, then returns the outcome.
    pub async fn finish(mut self, mut on_progress: impl FnMut(&str)) -> GenerationOutcome {
        while let Some(message) = self.progress.recv().await {
            on_progress(&message);
        }
        self.outcome.await.unwrap_or_else(|_| GenerationOutcome::Failure {
            kind: FailureKind::Transport,
            message: "generation task ended unexpectedly".to_string(),
        })
    }
}
