use crate::logs::error::TailError;
use crate::logs::reader::{log_skipped, read_existing, read_from_offset};
use crate::logs::shutdown::ShutdownSignal;
use crate::logs::types::{Entry, ReadBatch};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailState {
    Initializing,
    ReplayingExisting,
    Polling,
    Stopped,
    Errored,
}

/// Polling tail over `errors.jsonl`.
///
/// The watcher is the only owner of its offset; each cycle reopens the file,
/// seeks to the offset and emits whatever complete lines were appended.
pub struct TailWatcher {
    path: PathBuf,
    poll_interval: Duration,
    offset: u64,
    state: TailState,
}

impl TailWatcher {
    pub fn new(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            poll_interval,
            offset: 0,
            state: TailState::Initializing,
        }
    }

    pub fn state(&self) -> TailState {
        self.state
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Drive the watcher until `shutdown` fires or the session fails.
    ///
    /// Returns `Ok(())` after a clean stop. Every error leaves the watcher in
    /// [`TailState::Errored`].
    pub async fn run<F>(&mut self, mut shutdown: ShutdownSignal, mut emit: F) -> Result<(), TailError>
    where
        F: FnMut(&Entry) -> io::Result<()>,
    {
        self.state = TailState::Initializing;

        if let Err(err) = self.replay(&mut emit) {
            return Err(self.fail(err));
        }

        self.state = TailState::Polling;
        tracing::info!(path = %self.path.display(), offset = self.offset, "tailing");

        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                _ = ticker.tick() => {}
            }

            if shutdown.is_triggered() {
                break;
            }

            if let Err(err) = self.poll(&mut emit) {
                return Err(self.fail(err));
            }
        }

        self.state = TailState::Stopped;
        tracing::info!(path = %self.path.display(), "tail stopped");
        Ok(())
    }

    /// Emit every entry already in the file and remember where it ends.
    pub fn replay<F>(&mut self, emit: &mut F) -> Result<usize, TailError>
    where
        F: FnMut(&Entry) -> io::Result<()>,
    {
        if !self.path.exists() {
            return Err(TailError::NotFound {
                path: self.path.clone(),
            });
        }

        self.state = TailState::ReplayingExisting;
        self.offset = 0;
        let batch = read_existing(&self.path)?;
        self.consume(batch, emit)
    }

    /// Run one polling cycle. The offset advances even when nothing new was found.
    pub fn poll<F>(&mut self, emit: &mut F) -> Result<usize, TailError>
    where
        F: FnMut(&Entry) -> io::Result<()>,
    {
        let batch = read_from_offset(&self.path, self.offset)?;
        self.consume(batch, emit)
    }

    fn consume<F>(&mut self, batch: ReadBatch, emit: &mut F) -> Result<usize, TailError>
    where
        F: FnMut(&Entry) -> io::Result<()>,
    {
        log_skipped(&self.path, &batch);

        for entry in &batch.entries {
            emit(entry).map_err(TailError::Emit)?;
        }

        if batch.offset != self.offset {
            tracing::debug!(from = self.offset, to = batch.offset, "offset advanced");
        }
        self.offset = batch.offset;

        Ok(batch.entries.len())
    }

    fn fail(&mut self, err: TailError) -> TailError {
        self.state = TailState::Errored;
        tracing::debug!(error = %err, "tail errored");
        err
    }
}
