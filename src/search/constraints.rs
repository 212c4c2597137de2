//! Search constraints (resource limits).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default cap on node expansions for a single search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Constraints that bound a search's resource usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConstraints {
    /// Maximum number of nodes whose neighbors may be expanded.
    ///
    /// `None` disables the cap. A search that hits the cap reports
    /// [`SearchOutcome::LimitExceeded`](super::SearchOutcome::LimitExceeded).
    pub max_expansions: Option<usize>,
}

impl Default for SearchConstraints {
    fn default() -> Self {
        Self {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
        }
    }
}

impl SearchConstraints {
    /// Constraints with no expansion cap.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_expansions: None }
    }

    /// Constraints capping expansions at `max`.
    #[must_use]
    pub const fn with_max_expansions(max: usize) -> Self {
        Self {
            max_expansions: Some(max),
        }
    }

    /// Validate constraints.
    ///
    /// # Errors
    /// Rejects a cap of zero, which could never expand the source.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_expansions == Some(0) {
            return Err(ValidationError::InvalidSearchConstraints {
                reason: "max_expansions must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
