//! Identifiers and records for people and works.
//!
//! Both sides of the bipartite graph are keyed by opaque string identifiers
//! taken verbatim from the source tables. Records are immutable once the
//! [`GraphStore`](crate::graph::GraphStore) has been built.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a person.
///
/// # Examples
///
/// ```
/// use costar::PersonId;
///
/// let id = PersonId::new("102");
/// assert_eq!(id.as_str(), "102");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Creates a person ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Stable identifier of a work (a movie, in the bundled data set).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    /// Creates a work ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WorkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Input row describing a person, before appearances are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub birth: Option<u16>,
}

impl PersonRecord {
    /// Creates a person record.
    #[must_use]
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth: Option<u16>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth,
        }
    }
}

/// Input row describing a work, before appearances are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: WorkId,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
}

impl WorkRecord {
    /// Creates a work record.
    #[must_use]
    pub fn new(id: impl Into<WorkId>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
        }
    }
}

/// A single "person appears in work" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub person_id: PersonId,
    pub work_id: WorkId,
}

impl Appearance {
    /// Creates an appearance row.
    #[must_use]
    pub fn new(person_id: impl Into<PersonId>, work_id: impl Into<WorkId>) -> Self {
        Self {
            person_id: person_id.into(),
            work_id: work_id.into(),
        }
    }
}

/// A person as held by the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    /// Works this person appears in.
    pub works: BTreeSet<WorkId>,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            birth: record.birth,
            works: BTreeSet::new(),
        }
    }
}

/// A work as held by the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub year: Option<u16>,
    /// People appearing in this work.
    pub stars: BTreeSet<PersonId>,
}

impl From<WorkRecord> for Work {
    fn from(record: WorkRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            year: record.year,
            stars: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_and_order_by_string() {
        let a = PersonId::new("102");
        let b = PersonId::from("129");
        assert_eq!(a.to_string(), "102");
        assert!(a < b);
        assert_eq!(WorkId::from(String::from("m1")).as_str(), "m1");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = PersonId::new("158");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"158\"");
        let back: WorkId = serde_json::from_str("\"104257\"").unwrap();
        assert_eq!(back, WorkId::new("104257"));
    }

    #[test]
    fn records_convert_with_empty_membership() {
        let person: Person = PersonRecord::new("1", "Kevin Bacon", Some(1958)).into();
        assert!(person.works.is_empty());
        assert_eq!(person.birth, Some(1958));

        let work: Work = WorkRecord::new("m", "Apollo 13", None).into();
        assert!(work.stars.is_empty());
        assert_eq!(work.year, None);
    }
}
