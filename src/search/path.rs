//! Search results: the hop-by-hop path between two people.

use std::iter;

use serde::{Deserialize, Serialize};

use crate::record::{PersonId, WorkId};

/// One hop of a path: the shared work and the person reached through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub work: WorkId,
    pub person: PersonId,
}

impl PathStep {
    /// Creates a path step.
    #[must_use]
    pub fn new(work: impl Into<WorkId>, person: impl Into<PersonId>) -> Self {
        Self {
            work: work.into(),
            person: person.into(),
        }
    }
}

/// A single edge of a path, with both endpoints spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    pub from: &'a PersonId,
    pub work: &'a WorkId,
    pub to: &'a PersonId,
}

/// Ordered `(work, person)` hops from the source (exclusive) to the target
/// (inclusive).
///
/// An empty path means source and target are the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Degrees of separation: the number of shared works crossed.
    #[must_use]
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    /// Returns true for the zero-hop path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The hops, in source to target order.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Iterates over the hops.
    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }

    /// The last person on the path, if any hop was taken.
    #[must_use]
    pub fn target(&self) -> Option<&PersonId> {
        self.steps.last().map(|s| &s.person)
    }

    /// Pairs each hop with the person it starts from, beginning at `source`.
    pub fn links<'a>(&'a self, source: &'a PersonId) -> impl Iterator<Item = Link<'a>> + 'a {
        iter::once(source)
            .chain(self.steps.iter().map(|s| &s.person))
            .zip(self.steps.iter())
            .map(|(from, step)| Link {
                from,
                work: &step.work,
                to: &step.person,
            })
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = PathStep;
    type IntoIter = std::vec::IntoIter<PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
