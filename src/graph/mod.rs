//! The people/works graph.
//!
//! [`GraphStore`] holds the person table, the work table and the name index.
//! It is built once through [`GraphBuilder`] (or [`build_graph`]) and is
//! read-only afterwards.

mod store;
mod traits;

pub use store::{build_graph, normalize_name, BuildSummary, GraphBuilder, GraphStore};
pub use traits::CostarGraph;
