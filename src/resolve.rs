//! Name resolution.
//!
//! Turns a human-readable name into a single [`PersonId`]. Matching is exact
//! but case-insensitive. When several people share a name, the caller is
//! handed the full candidate list and decides; this module performs no I/O.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::CostarGraph;
use crate::record::PersonId;

/// A person sharing the queried name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
}

/// Result of looking a name up in the name index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resolution", content = "value", rename_all = "snake_case")]
pub enum Resolution {
    /// Exactly one person has this name.
    Unique(PersonId),
    /// Several people have this name, sorted by ID.
    Ambiguous(Vec<Candidate>),
    /// Nobody has this name.
    NotFound,
}

impl Resolution {
    /// Returns the ID for an unambiguous match.
    #[must_use]
    pub fn unique(&self) -> Option<&PersonId> {
        match self {
            Self::Unique(id) => Some(id),
            _ => None,
        }
    }

    /// Settles the resolution using a caller-supplied choice.
    ///
    /// A unique match ignores `choice`. For an ambiguous match, the choice
    /// must be one of the candidates.
    #[must_use]
    pub fn settle(self, choice: Option<&PersonId>) -> Option<PersonId> {
        match self {
            Self::Unique(id) => Some(id),
            Self::Ambiguous(candidates) => choice.and_then(|c| select_candidate(&candidates, c)),
            Self::NotFound => None,
        }
    }
}

/// Picks the caller's tie-break out of an ambiguous match.
pub trait Chooser {
    /// Returns the chosen ID, or `None` to give up.
    fn choose(&mut self, query: &str, candidates: &[Candidate]) -> Option<PersonId>;
}

impl<F> Chooser for F
where
    F: FnMut(&[Candidate]) -> Option<PersonId>,
{
    fn choose(&mut self, _query: &str, candidates: &[Candidate]) -> Option<PersonId> {
        self(candidates)
    }
}

/// Looks `name` up in the graph's name index.
///
/// # Examples
///
/// ```
/// use costar::{build_graph, resolve, PersonId, PersonRecord, Resolution};
///
/// let graph = build_graph([PersonRecord::new("7", "Tom Hanks", Some(1956))], [], []);
/// assert_eq!(resolve(&graph, "tom hanks"), Resolution::Unique(PersonId::new("7")));
/// assert_eq!(resolve(&graph, "Tom Cruise"), Resolution::NotFound);
/// ```
pub fn resolve<G>(graph: &G, name: &str) -> Resolution
where
    G: CostarGraph + ?Sized,
{
    let ids = graph.ids_for_name(name);
    let mut candidates: Vec<Candidate> = ids
        .into_iter()
        .filter_map(|id| {
            graph.person(&id).map(|p| Candidate {
                name: p.name.clone(),
                birth: p.birth,
                id,
            })
        })
        .collect();

    match candidates.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Unique(candidates.remove(0).id),
        _ => {
            candidates.sort_by(|a, b| a.id.cmp(&b.id));
            Resolution::Ambiguous(candidates)
        }
    }
}

/// Resolves `query` to a single person, asking `chooser` to break ties.
///
/// Returns `None` when nobody matches, when the name is ambiguous and no
/// chooser is given, or when the chooser picks someone outside the
/// candidate set.
pub fn resolve_name<G>(
    graph: &G,
    query: &str,
    chooser: Option<&mut dyn Chooser>,
) -> Option<PersonId>
where
    G: CostarGraph + ?Sized,
{
    match resolve(graph, query) {
        Resolution::Unique(id) => Some(id),
        Resolution::NotFound => {
            debug!(query, "no person with this name");
            None
        }
        Resolution::Ambiguous(candidates) => {
            let chooser = chooser?;
            let choice = chooser.choose(query, &candidates)?;
            let picked = select_candidate(&candidates, &choice);
            if picked.is_none() {
                debug!(query, %choice, "choice is not among the candidates");
            }
            picked
        }
    }
}

/// Returns `choice` if it names one of `candidates`.
#[must_use]
pub fn select_candidate(candidates: &[Candidate], choice: &PersonId) -> Option<PersonId> {
    candidates.iter().find(|c| &c.id == choice).map(|c| c.id.clone())
}
