use std::collections::BTreeMap;

use tokio::sync::mpsc;
use tokio::task;

use crate::error::SearchError;

/// Fan-out/fan-in over tokio's blocking pool.
///
/// Each job is submitted with the chunk index its output is tagged with.
/// [`WorkerPool::join`] waits for one report per job and returns the outputs
/// in ascending index order, whatever order the workers finished in.
/// Indices must be distinct.
pub struct WorkerPool<T> {
    tx: mpsc::Sender<(usize, T)>,
    rx: mpsc::Receiver<(usize, T)>,
    indices: Vec<usize>,
}

impl<T: Send + 'static> WorkerPool<T> {
    /// `expected` sizes the result channel; submitting more jobs is allowed.
    pub fn new(expected: usize) -> Self {
        let (tx, rx) = mpsc::channel(expected.max(1));
        Self { tx, rx, indices: Vec::with_capacity(expected) }
    }

    /// Starts `job` on a blocking worker; its output is reported under `index`.
    pub fn submit<F>(&mut self, index: usize, job: F)
    where
        F: FnOnce() -> T + Send + 'static,
    {
        self.indices.push(index);
        let tx = self.tx.clone();
        task::spawn_blocking(move || {
            let out = job();
            // Receiver only disappears if join() was abandoned
            let _ = tx.blocking_send((index, out));
        });
    }

    pub fn submitted(&self) -> usize {
        self.indices.len()
    }

    /// Waits for every submitted job. A job that panics never reports, which
    /// surfaces as [`SearchError::WorkerLost`] once all other senders are gone.
    pub async fn join(self) -> Result<Vec<T>, SearchError> {
        let Self { tx, mut rx, mut indices } = self;
        drop(tx);

        let mut reports: BTreeMap<usize, T> = BTreeMap::new();
        for _ in 0..indices.len() {
            match rx.recv().await {
                Some((index, out)) => {
                    reports.insert(index, out);
                }
                None => break,
            }
        }

        indices.sort_unstable();
        indices
            .into_iter()
            .map(|chunk| reports.remove(&chunk).ok_or(SearchError::WorkerLost { chunk }))
            .collect()
    }
}
