//! Error types for costar.
//!
//! Errors are strongly typed per layer using thiserror and rolled up into
//! [`CostarError`]. Outcomes that are expected during normal operation (no
//! connection, an ambiguous name, an exhausted expansion budget) are *not*
//! errors; see [`SearchOutcome`](crate::search::SearchOutcome) and
//! [`Resolution`](crate::resolve::Resolution).

#[cfg(feature = "csv")]
use std::path::PathBuf;

use thiserror::Error;

use crate::record::PersonId;

/// Validation errors for caller-supplied configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid search constraints: {reason}")]
    InvalidSearchConstraints {
        reason: String,
    },

    #[error("Invalid runtime config: {reason}")]
    InvalidRuntimeConfig {
        reason: String,
    },
}

/// Errors raised by the frontier containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontierError {
    #[error("remove() called on an empty frontier")]
    Empty,

    #[error("frontier returned a node this search never created")]
    UnknownNode,
}

/// Errors raised before or during a search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unknown person: {id}")]
    UnknownPerson {
        id: PersonId,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The engine broke one of its own invariants.
    #[error("Internal search error: {0}")]
    Internal(#[from] FrontierError),
}

/// Errors raised while loading the flat-file tables.
#[cfg(feature = "csv")]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Data directory not found: {}", path.display())]
    MissingDirectory {
        path: PathBuf,
    },

    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Errors raised by the concurrent search runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Search queue is full (capacity {capacity})")]
    QueueFull {
        capacity: usize,
    },

    #[error("Search workers are gone")]
    Disconnected,

    #[error("Search did not finish within {duration_ms}ms")]
    Timeout {
        duration_ms: u64,
    },

    #[error("Failed to spawn search worker: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Top-level error type for costar.
#[derive(Debug, Error)]
pub enum CostarError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[cfg(feature = "csv")]
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl CostarError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Search(SearchError::Validation(_)))
    }

    /// Returns true if this is a search error.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Returns true if this error came from the worker runtime.
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }

    /// Returns true if resubmitting the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Runtime(e) => {
                matches!(e, RuntimeError::QueueFull { .. } | RuntimeError::Timeout { .. })
            }
            _ => false,
        }
    }
}

/// Result type alias for costar operations.
pub type CostarResult<T> = Result<T, CostarError>;
