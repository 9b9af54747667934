use tokio::sync::mpsc;

/// Receives stage-progress strings such as `"Saving audio file..."`.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, message: &str);
}

impl<F> ProgressReporter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _message: &str) {}
}

/// Forwards progress over a channel to whoever renders it.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelReporter {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl ProgressReporter for ChannelReporter {
    fn report(&self, message: &str) {
        // Receiver gone means nobody is watching; generation carries on.
        let _ = self.tx.send(message.to_string());
    }
}
