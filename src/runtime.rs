//! Concurrent search runtime.
//!
//! A single search is synchronous and single-threaded. Because a built graph
//! is immutable, independent searches can share it without locks; this
//! module runs them on a small, bounded pool of worker threads.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CostarError, CostarResult, RuntimeError, ValidationError};
use crate::graph::{CostarGraph, GraphStore};
use crate::record::PersonId;
use crate::search::{find_shortest_path_with, SearchConstraints, SearchReport};

/// Runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Number of search workers.
    pub workers: usize,
    /// Maximum queued searches.
    pub queue_capacity: usize,
    /// Constraints applied to every search.
    pub constraints: SearchConstraints,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            workers: 2,
            queue_capacity: 1024,
            constraints: SearchConstraints::default(),
        }
    }
}

impl RuntimeConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Rejects zero workers, a zero-capacity queue, or invalid constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.workers == 0 {
            return Err(ValidationError::InvalidRuntimeConfig {
                reason: "workers must be > 0".to_string(),
            });
        }
        if self.queue_capacity == 0 {
            return Err(ValidationError::InvalidRuntimeConfig {
                reason: "queue_capacity must be > 0".to_string(),
            });
        }
        self.constraints.validate()
    }
}

enum Job {
    Search {
        source: PersonId,
        target: PersonId,
        reply: Sender<CostarResult<SearchReport>>,
    },

    #[cfg(test)]
    Sleep {
        duration: Duration,
        reply: Sender<()>,
    },
}

/// Handle returned by [`SearchRuntime::submit`].
pub struct SearchHandle {
    rx: Receiver<CostarResult<SearchReport>>,
}

impl SearchHandle {
    /// Waits for the search to complete.
    ///
    /// # Errors
    /// Returns the search's own error, or [`RuntimeError::Disconnected`] if
    /// the worker went away without answering.
    pub fn join(self) -> CostarResult<SearchReport> {
        self.rx
            .recv()
            .map_err(|_| CostarError::Runtime(RuntimeError::Disconnected))?
    }

    /// Waits for the search to complete with a timeout.
    ///
    /// # Errors
    /// As [`join`](Self::join), plus [`RuntimeError::Timeout`].
    pub fn join_timeout(self, timeout: Duration) -> CostarResult<SearchReport> {
        self.rx.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => CostarError::Runtime(RuntimeError::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }),
            RecvTimeoutError::Disconnected => CostarError::Runtime(RuntimeError::Disconnected),
        })?
    }
}

/// Bounded worker pool running searches against a shared graph.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use costar::{
///     build_graph, Appearance, PersonId, PersonRecord, RuntimeConfig, SearchRuntime, WorkRecord,
/// };
///
/// let graph = Arc::new(build_graph(
///     [PersonRecord::new("a", "Alice", None), PersonRecord::new("b", "Bob", None)],
///     [WorkRecord::new("m", "Film", None)],
///     [Appearance::new("a", "m"), Appearance::new("b", "m")],
/// ));
/// let runtime = SearchRuntime::new(graph, RuntimeConfig::default()).unwrap();
/// let report = runtime.search(PersonId::new("a"), PersonId::new("b")).unwrap();
/// assert_eq!(report.outcome.degrees(), Some(1));
/// ```
pub struct SearchRuntime<G: CostarGraph + 'static = GraphStore> {
    graph: Arc<G>,
    tx: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    queue_capacity: usize,
}

impl<G: CostarGraph + 'static> SearchRuntime<G> {
    /// Starts the worker pool.
    ///
    /// # Errors
    /// Returns a validation error for a bad config, or
    /// [`RuntimeError::Spawn`] if a worker thread cannot be started.
    pub fn new(graph: Arc<G>, config: RuntimeConfig) -> CostarResult<Self> {
        config.validate()?;
        let (tx, rx) = bounded::<Job>(config.queue_capacity);
        let constraints = config.constraints;

        let mut handles = Vec::with_capacity(config.workers);
        for idx in 0..config.workers {
            let rx: Receiver<Job> = rx.clone();
            let graph = Arc::clone(&graph);
            let handle = thread::Builder::new()
                .name(format!("costar-search-{idx}"))
                .spawn(move || loop {
                    match rx.recv() {
                        Ok(Job::Search { source, target, reply }) => {
                            let result =
                                find_shortest_path_with(&*graph, &source, &target, constraints)
                                    .map_err(CostarError::from);
                            let _ = reply.send(result);
                        }
                        Err(_) => break,

                        #[cfg(test)]
                        Ok(Job::Sleep { duration, reply }) => {
                            thread::sleep(duration);
                            let _ = reply.send(());
                        }
                    }
                })
                .map_err(RuntimeError::Spawn)?;
            handles.push(handle);
        }
        debug!(
            workers = config.workers,
            queue_capacity = config.queue_capacity,
            "search runtime started"
        );

        Ok(Self {
            graph,
            tx: Some(tx),
            workers: handles,
            queue_capacity: config.queue_capacity,
        })
    }

    /// The graph the workers search.
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn sender(&self) -> Result<&Sender<Job>, RuntimeError> {
        self.tx.as_ref().ok_or(RuntimeError::Disconnected)
    }

    fn try_submit(&self, job: Job) -> Result<(), RuntimeError> {
        match self.sender()?.try_send(job) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(RuntimeError::QueueFull {
                capacity: self.queue_capacity,
            }),
            Err(TrySendError::Disconnected(_)) => Err(RuntimeError::Disconnected),
        }
    }

    /// Queues a search without waiting for it.
    ///
    /// # Errors
    /// Returns [`RuntimeError::QueueFull`] if the queue is at capacity.
    pub fn submit(&self, source: PersonId, target: PersonId) -> Result<SearchHandle, RuntimeError> {
        let (reply, rx) = bounded(1);
        self.try_submit(Job::Search { source, target, reply })?;
        Ok(SearchHandle { rx })
    }

    /// Runs one search on the pool and waits for it.
    ///
    /// # Errors
    /// Returns runtime errors from submission or the search's own error.
    pub fn search(&self, source: PersonId, target: PersonId) -> CostarResult<SearchReport> {
        self.submit(source, target)?.join()
    }

    /// Runs a batch of searches, blocking while the queue is full, and
    /// returns their results in input order.
    pub fn search_all<I>(&self, pairs: I) -> Vec<CostarResult<SearchReport>>
    where
        I: IntoIterator<Item = (PersonId, PersonId)>,
    {
        let handles: Vec<Result<SearchHandle, RuntimeError>> = pairs
            .into_iter()
            .map(|(source, target)| -> Result<SearchHandle, RuntimeError> {
                let (reply, rx) = bounded(1);
                self.sender()?
                    .send(Job::Search { source, target, reply })
                    .map_err(|_| RuntimeError::Disconnected)?;
                Ok(SearchHandle { rx })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.map_err(CostarError::from).and_then(SearchHandle::join))
            .collect()
    }

    #[cfg(test)]
    fn submit_sleep(&self, duration: Duration) -> Result<Receiver<()>, RuntimeError> {
        let (reply, rx) = bounded::<()>(1);
        self.try_submit(Job::Sleep { duration, reply })?;
        Ok(rx)
    }
}

impl<G: CostarGraph + 'static> Drop for SearchRuntime<G> {
    fn drop(&mut self) {
        // Closing the channel lets workers drain queued jobs and exit.
        drop(self.tx.take());
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}
