//! Read-only graph access used by search and name resolution.
//!
//! The search engine and resolver only see this trait, so alternative
//! backends (a sampled subgraph, a test fixture) can stand in for
//! [`GraphStore`](super::GraphStore).

use std::collections::BTreeSet;

use crate::record::{Person, PersonId, Work, WorkId};

/// Read access to a people/works graph.
///
/// Implementations must be immutable for the duration of any search; every
/// method is a pure read.
pub trait CostarGraph: Send + Sync {
    /// Look up a person by ID.
    fn person(&self, id: &PersonId) -> Option<&Person>;

    /// Look up a work by ID.
    fn work(&self, id: &WorkId) -> Option<&Work>;

    /// All person IDs whose name matches `name` case-insensitively.
    ///
    /// Returns an empty set when nobody has that name.
    fn ids_for_name(&self, name: &str) -> BTreeSet<PersonId>;

    /// Every `(work, co-star)` pair reachable in one hop from `id`.
    ///
    /// The person is paired with themselves for each of their works. An
    /// unknown ID has no neighbors.
    fn neighbors_of(&self, id: &PersonId) -> BTreeSet<(WorkId, PersonId)>;

    /// Returns true if `id` is a known person.
    fn contains_person(&self, id: &PersonId) -> bool {
        self.person(id).is_some()
    }
}
