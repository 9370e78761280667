//! Background catalogue loading.
//!
//! The fetch runs on its own thread and hands back an owned result; the
//! event loop polls for it without blocking and is the only place the
//! result touches application state.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::source::{DataSource, LoadError, fetch_dataset};
use super::Dataset;

/// Outcome of one background load.
pub type LoadResult = Result<Dataset, LoadError>;

/// A single in-flight catalogue load.
#[derive(Debug)]
pub struct DataLoader {
    rx: Receiver<LoadResult>,
}

impl DataLoader {
    /// Start loading `source` on a worker thread.
    ///
    /// # Errors
    /// Returns an error if the worker thread cannot be spawned.
    pub fn spawn(source: DataSource) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let source_label = source.label();
        thread::Builder::new()
            .name("data-loader".to_string())
            .spawn(move || {
                let result = fetch_dataset(&source);
                let _ = tx.send(result);
            })?;
        tracing::debug!(source = %source_label, "data load started");
        Ok(Self { rx })
    }

    /// Take the result if the worker has finished.
    ///
    /// A worker that died without sending is reported as
    /// [`LoadError::Interrupted`].
    pub fn try_take(&self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }

    /// Block until the worker delivers its result.
    pub fn wait(self) -> LoadResult {
        self.rx.recv().unwrap_or(Err(LoadError::Interrupted))
    }
}
