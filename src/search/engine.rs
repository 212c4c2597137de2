//! Breadth-first shortest-path search.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{FrontierError, SearchError, ValidationError};
use crate::frontier::{Frontier, QueueFrontier};
use crate::graph::CostarGraph;
use crate::record::PersonId;
use crate::search::constraints::SearchConstraints;
use crate::search::node::{NodeRef, SearchTree};
use crate::search::path::Path;

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The target was reached.
    Found {
        path: Path,
    },
    /// Every state reachable from the source was explored without reaching
    /// the target.
    NoPath,
    /// The expansion cap was hit before the search could finish.
    LimitExceeded {
        expansions: usize,
        limit: usize,
    },
}

impl SearchOutcome {
    /// Returns true if a path was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns the path, if one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path } => Some(path),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the path if one was found.
    #[must_use]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found { path } => Some(path),
            _ => None,
        }
    }

    /// Degrees of separation, if a path was found.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(Path::degrees)
    }
}

/// Work done by a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes whose neighbors were enumerated.
    pub expanded: usize,
    /// Distinct states ever scheduled, including the source.
    pub explored: usize,
    /// Largest number of nodes pending at once.
    pub max_frontier: usize,
}

/// Outcome of a search together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Shortest-hop search over a [`CostarGraph`].
///
/// # Example
/// ```
/// use costar::{build_graph, Appearance, PersonId, PersonRecord, SearchEngine, WorkRecord};
///
/// let graph = build_graph(
///     [PersonRecord::new("a", "Alice", None), PersonRecord::new("b", "Bob", None)],
///     [WorkRecord::new("m", "Film", None)],
///     [Appearance::new("a", "m"), Appearance::new("b", "m")],
/// );
/// let report = SearchEngine::new(&graph)
///     .search(&PersonId::new("a"), &PersonId::new("b"))
///     .unwrap();
/// assert_eq!(report.outcome.degrees(), Some(1));
/// ```
#[derive(Debug)]
pub struct SearchEngine<'g, G: CostarGraph + ?Sized> {
    graph: &'g G,
    constraints: SearchConstraints,
}

impl<'g, G: CostarGraph + ?Sized> SearchEngine<'g, G> {
    /// Creates an engine with default constraints.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            constraints: SearchConstraints::default(),
        }
    }

    /// Creates an engine with explicit constraints.
    ///
    /// # Errors
    /// Returns a validation error if the constraints are invalid.
    pub fn with_constraints(
        graph: &'g G,
        constraints: SearchConstraints,
    ) -> Result<Self, ValidationError> {
        constraints.validate()?;
        Ok(Self { graph, constraints })
    }

    /// The constraints this engine enforces.
    #[must_use]
    pub const fn constraints(&self) -> &SearchConstraints {
        &self.constraints
    }

    /// Finds a shortest path from `source` to `target`.
    ///
    /// # Errors
    /// Returns [`SearchError::UnknownPerson`] if either endpoint is not in
    /// the graph.
    pub fn search(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<SearchReport, SearchError> {
        self.search_with(QueueFrontier::new(), source, target)
    }

    /// Runs the search loop with a caller-supplied frontier.
    ///
    /// Only a first-in first-out frontier yields shortest paths; any other
    /// order still returns a valid connecting path if one exists.
    ///
    /// # Errors
    /// Returns [`SearchError::UnknownPerson`] if either endpoint is not in
    /// the graph, or [`SearchError::Internal`] if the frontier misbehaves.
    pub fn search_with<F>(
        &self,
        mut frontier: F,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<SearchReport, SearchError>
    where
        F: Frontier<NodeRef>,
    {
        for id in [source, target] {
            if !self.graph.contains_person(id) {
                return Err(SearchError::UnknownPerson { id: id.clone() });
            }
        }
        debug!(%source, %target, "search started");

        let (mut tree, root) = SearchTree::with_root(source.clone());
        let mut explored: HashSet<PersonId> = HashSet::new();
        explored.insert(source.clone());
        frontier.add(root);

        let mut stats = SearchStats {
            explored: 1,
            max_frontier: 1,
            ..SearchStats::default()
        };

        let outcome = loop {
            if frontier.is_empty() {
                debug!(explored = stats.explored, "frontier exhausted");
                break SearchOutcome::NoPath;
            }
            let current = frontier.remove()?;
            let node = tree
                .get(current)
                .ok_or(SearchError::Internal(FrontierError::UnknownNode))?;

            if &node.state == target {
                let path = tree.path_to(current);
                debug!(degrees = path.degrees(), expanded = stats.expanded, "target reached");
                break SearchOutcome::Found { path };
            }

            if let Some(limit) = self.constraints.max_expansions {
                if stats.expanded >= limit {
                    warn!(limit, explored = stats.explored, "expansion limit exceeded");
                    break SearchOutcome::LimitExceeded {
                        expansions: stats.expanded,
                        limit,
                    };
                }
            }

            let state = node.state.clone();
            stats.expanded += 1;
            trace!(%state, "expanding");
            for (work, person) in self.graph.neighbors_of(&state) {
                if explored.contains(&person) {
                    continue;
                }
                explored.insert(person.clone());
                let child = tree.push_child(current, work, person);
                frontier.add(child);
            }
            stats.explored = explored.len();
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        };

        Ok(SearchReport { outcome, stats })
    }
}

/// Finds a shortest path between two people using default constraints.
///
/// # Errors
/// Returns [`SearchError::UnknownPerson`] if either endpoint is not in the
/// graph.
pub fn find_shortest_path<G>(
    graph: &G,
    source: &PersonId,
    target: &PersonId,
) -> Result<SearchOutcome, SearchError>
where
    G: CostarGraph + ?Sized,
{
    Ok(SearchEngine::new(graph).search(source, target)?.outcome)
}

/// Finds a shortest path between two people under explicit constraints.
///
/// # Errors
/// Returns a validation error for invalid constraints, or
/// [`SearchError::UnknownPerson`] if either endpoint is not in the graph.
pub fn find_shortest_path_with<G>(
    graph: &G,
    source: &PersonId,
    target: &PersonId,
    constraints: SearchConstraints,
) -> Result<SearchReport, SearchError>
where
    G: CostarGraph + ?Sized,
{
    SearchEngine::with_constraints(graph, constraints)?.search(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::StackFrontier;
    use crate::graph::{build_graph, GraphStore};
    use crate::record::{Appearance, PersonRecord, WorkId, WorkRecord};
    use crate::search::path::PathStep;

    fn pid(s: &str) -> PersonId {
        PersonId::new(s)
    }

    /// a -m1- b -m2- c, plus an isolated d.
    fn chain() -> GraphStore {
        build_graph(
            [
                PersonRecord::new("a", "Alice", None),
                PersonRecord::new("b", "Bob", None),
                PersonRecord::new("c", "Carol", None),
                PersonRecord::new("d", "Dave", None),
            ],
            [WorkRecord::new("m1", "One", None), WorkRecord::new("m2", "Two", None)],
            [
                Appearance::new("a", "m1"),
                Appearance::new("b", "m1"),
                Appearance::new("b", "m2"),
                Appearance::new("c", "m2"),
            ],
        )
    }

    #[test]
    fn finds_two_hop_path() {
        let g = chain();
        let outcome = find_shortest_path(&g, &pid("a"), &pid("c")).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.steps(), &[PathStep::new("m1", "b"), PathStep::new("m2", "c")]);
        assert_eq!(outcome.degrees(), Some(2));
    }

    #[test]
    fn same_source_and_target_is_empty_path() {
        let g = chain();
        let report = SearchEngine::new(&g).search(&pid("b"), &pid("b")).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Found { path: Path::default() });
        assert_eq!(report.stats.expanded, 0);
    }

    #[test]
    fn disconnected_is_no_path_after_exploring_component() {
        let g = chain();
        let report = SearchEngine::new(&g).search(&pid("a"), &pid("d")).unwrap();
        assert_eq!(report.outcome, SearchOutcome::NoPath);
        assert_eq!(report.stats.explored, 3);
        assert_eq!(report.stats.expanded, 3);
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let g = chain();
        let err = find_shortest_path(&g, &pid("a"), &pid("zz")).unwrap_err();
        assert!(matches!(err, SearchError::UnknownPerson { id } if id == pid("zz")));
    }

    #[test]
    fn limit_exceeded_is_distinct_from_no_path() {
        let g = chain();
        let one = SearchConstraints::with_max_expansions(1);
        let report = find_shortest_path_with(&g, &pid("a"), &pid("c"), one).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcome::LimitExceeded {
                expansions: 1,
                limit: 1
            }
        );
        assert!(report.outcome.path().is_none());
    }

    #[test]
    fn queued_target_behind_the_front_still_hits_the_limit() {
        // a stars with b in m1 and with c in m2; b is dequeued before c.
        let g = build_graph(
            ["a", "b", "c"].map(|id| PersonRecord::new(id, id, None)),
            ["m1", "m2"].map(|id| WorkRecord::new(id, id, None)),
            [("a", "m1"), ("b", "m1"), ("a", "m2"), ("c", "m2")]
                .map(|(p, w)| Appearance::new(p, w)),
        );
        let one = SearchConstraints::with_max_expansions(1);
        let report = find_shortest_path_with(&g, &pid("a"), &pid("c"), one).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcome::LimitExceeded {
                expansions: 1,
                limit: 1
            }
        );
        assert_eq!(report.stats.explored, 3);

        let two = SearchConstraints::with_max_expansions(2);
        let report = find_shortest_path_with(&g, &pid("a"), &pid("b"), two).unwrap();
        assert_eq!(report.outcome.degrees(), Some(1));
    }

    /// Claims to hold items but never yields one.
    struct EmptyButClaimsItems;

    impl Frontier<NodeRef> for EmptyButClaimsItems {
        fn add(&mut self, _item: NodeRef) {}

        fn remove(&mut self) -> Result<NodeRef, FrontierError> {
            Err(FrontierError::Empty)
        }

        fn is_empty(&self) -> bool {
            false
        }

        fn len(&self) -> usize {
            1
        }
    }

    /// Yields a handle that belongs to some other search tree.
    struct ForeignHandles(NodeRef);

    impl Frontier<NodeRef> for ForeignHandles {
        fn add(&mut self, _item: NodeRef) {}

        fn remove(&mut self) -> Result<NodeRef, FrontierError> {
            Ok(self.0)
        }

        fn is_empty(&self) -> bool {
            false
        }

        fn len(&self) -> usize {
            1
        }
    }

    #[test]
    fn failing_frontier_is_an_internal_error() {
        let g = chain();
        let err = SearchEngine::new(&g)
            .search_with(EmptyButClaimsItems, &pid("a"), &pid("c"))
            .unwrap_err();
        assert!(matches!(err, SearchError::Internal(FrontierError::Empty)));
    }

    #[test]
    fn handle_outside_the_tree_is_an_internal_error() {
        let (mut other, root) = SearchTree::with_root(pid("x"));
        let child = other.push_child(root, WorkId::new("m9"), pid("y"));
        let far = other.push_child(child, WorkId::new("m9"), pid("z"));

        let g = chain();
        let err = SearchEngine::new(&g)
            .search_with(ForeignHandles(far), &pid("d"), &pid("a"))
            .unwrap_err();
        assert!(matches!(err, SearchError::Internal(FrontierError::UnknownNode)));
    }

    #[test]
    fn zero_cap_is_rejected() {
        let g = chain();
        let zero = SearchConstraints::with_max_expansions(0);
        let err = find_shortest_path_with(&g, &pid("a"), &pid("c"), zero).unwrap_err();
        assert!(matches!(err, SearchError::Validation(_)));
    }

    #[test]
    fn unbounded_search_still_terminates() {
        let g = chain();
        let unbounded = SearchConstraints::unbounded();
        let report = find_shortest_path_with(&g, &pid("c"), &pid("a"), unbounded).unwrap();
        assert_eq!(report.outcome.degrees(), Some(2));
    }

    #[test]
    fn prefers_direct_link_over_longer_chain() {
        // a-b-c-d chain plus a direct a-d film.
        let g = build_graph(
            ["a", "b", "c", "d"].map(|id| PersonRecord::new(id, id, None)),
            ["ab", "bc", "cd", "ad"].map(|id| WorkRecord::new(id, id, None)),
            [
                ("a", "ab"),
                ("b", "ab"),
                ("b", "bc"),
                ("c", "bc"),
                ("c", "cd"),
                ("d", "cd"),
                ("a", "ad"),
                ("d", "ad"),
            ]
            .map(|(p, w)| Appearance::new(p, w)),
        );
        let outcome = find_shortest_path(&g, &pid("a"), &pid("d")).unwrap();
        assert_eq!(outcome.path().unwrap().steps(), &[PathStep::new("ad", "d")]);
    }

    #[test]
    fn stack_frontier_still_connects() {
        let g = chain();
        let report = SearchEngine::new(&g)
            .search_with(StackFrontier::new(), &pid("a"), &pid("c"))
            .unwrap();
        let path = report.outcome.path().unwrap();
        assert_eq!(path.target(), Some(&pid("c")));
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(SearchOutcome::LimitExceeded {
            expansions: 5,
            limit: 5,
        })
        .unwrap();
        assert_eq!(json["outcome"], "limit_exceeded");
        assert_eq!(json["limit"], 5);
    }
}
