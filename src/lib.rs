//! # costar - degrees of separation over a co-star graph
//!
//! People and the works they appear in form a bipartite graph; two people
//! are connected when they share a work. costar finds the shortest chain of
//! shared works between two people.
//!
//! ## Core Concepts
//!
//! - **GraphStore**: immutable person, work and name tables, built once
//! - **Frontier**: the queue of states waiting to be expanded
//! - **SearchEngine**: breadth-first search producing a [`Path`] or a
//!   [`SearchOutcome`] explaining why there is none
//! - **Resolution**: case-insensitive name lookup with caller-driven
//!   tie-breaking
//!
//! ## Usage
//!
//! ```rust
//! use costar::{
//!     build_graph, find_shortest_path, resolve_name, Appearance, PersonRecord, WorkRecord,
//! };
//!
//! let graph = build_graph(
//!     [
//!         PersonRecord::new("a", "Alice", None),
//!         PersonRecord::new("b", "Bob", None),
//!         PersonRecord::new("c", "Carol", None),
//!     ],
//!     [WorkRecord::new("m1", "First", Some(2001)), WorkRecord::new("m2", "Second", Some(2004))],
//!     [
//!         Appearance::new("a", "m1"),
//!         Appearance::new("b", "m1"),
//!         Appearance::new("b", "m2"),
//!         Appearance::new("c", "m2"),
//!     ],
//! );
//!
//! let source = resolve_name(&graph, "alice", None).unwrap();
//! let target = resolve_name(&graph, "CAROL", None).unwrap();
//! let outcome = find_shortest_path(&graph, &source, &target).unwrap();
//! assert_eq!(outcome.degrees(), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod record;
pub mod resolve;
pub mod runtime;
pub mod search;

#[cfg(feature = "csv")]
pub mod loader;

// Re-export primary types at crate root for convenience
pub use error::{
    CostarError, CostarResult, FrontierError, RuntimeError, SearchError, ValidationError,
};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use graph::{build_graph, BuildSummary, CostarGraph, GraphBuilder, GraphStore};
pub use record::{Appearance, Person, PersonId, PersonRecord, Work, WorkId, WorkRecord};
pub use resolve::{resolve, resolve_name, Candidate, Chooser, Resolution};
pub use runtime::{RuntimeConfig, SearchHandle, SearchRuntime};
pub use search::{
    find_shortest_path, find_shortest_path_with, Path, PathStep, SearchConstraints, SearchEngine,
    SearchOutcome, SearchReport, SearchStats,
};

#[cfg(feature = "csv")]
pub use error::LoadError;
#[cfg(feature = "csv")]
pub use loader::{load_directory, load_directory_with_summary, LoadSummary};
