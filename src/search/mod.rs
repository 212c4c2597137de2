//! Shortest-hop search between two people.
//!
//! The engine expands states breadth-first from the source, keeping an
//! explored set so no person is scheduled twice, and reconstructs the path
//! from parent links when the target is dequeued. Searches are bounded by
//! [`SearchConstraints`]; running out of budget is reported as
//! [`SearchOutcome::LimitExceeded`], never as "not connected".

pub mod constraints;
pub mod engine;
pub mod node;
pub mod path;

pub use constraints::{SearchConstraints, DEFAULT_MAX_EXPANSIONS};
pub use engine::{
    find_shortest_path, find_shortest_path_with, SearchEngine, SearchOutcome, SearchReport,
    SearchStats,
};
pub use node::{NodeRef, SearchNode, SearchTree};
pub use path::{Link, Path, PathStep};
