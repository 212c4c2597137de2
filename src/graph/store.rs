//! In-memory graph store.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::graph::traits::CostarGraph;
use crate::record::{Appearance, Person, PersonId, PersonRecord, Work, WorkId, WorkRecord};

/// Normalizes a name into its name-index key.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Immutable people/works graph.
///
/// Edges are implicit: two people are adjacent when they share a work.
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    works: HashMap<WorkId, Work>,
    by_name: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStore {
    /// Starts building a new graph.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of people in the graph.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of works in the graph.
    #[must_use]
    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    /// Iterates over every person, in no particular order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Iterates over every work, in no particular order.
    pub fn works(&self) -> impl Iterator<Item = &Work> {
        self.works.values()
    }
}

impl CostarGraph for GraphStore {
    fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    fn work(&self, id: &WorkId) -> Option<&Work> {
        self.works.get(id)
    }

    fn ids_for_name(&self, name: &str) -> BTreeSet<PersonId> {
        self.by_name
            .get(&normalize_name(name))
            .cloned()
            .unwrap_or_default()
    }

    fn neighbors_of(&self, id: &PersonId) -> BTreeSet<(WorkId, PersonId)> {
        let Some(person) = self.people.get(id) else {
            return BTreeSet::new();
        };

        let mut neighbors = BTreeSet::new();
        for work_id in &person.works {
            let Some(work) = self.works.get(work_id) else {
                continue;
            };
            for star in &work.stars {
                neighbors.insert((work_id.clone(), star.clone()));
            }
        }
        neighbors
    }
}

/// Counters describing how the input rows were applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub people: usize,
    pub works: usize,
    /// Appearance rows that linked a known person to a known work.
    pub appearances_linked: usize,
    /// Appearance rows naming an unknown person or work.
    pub appearances_dropped: usize,
    /// Person or work rows that replaced an earlier row with the same ID.
    pub duplicate_records: usize,
}

/// Incremental builder for [`GraphStore`].
///
/// People and works must be added before the appearances that reference
/// them; appearances naming unknown IDs are dropped.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    store: GraphStore,
    summary: BuildSummary,
}

impl GraphBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person. A repeated ID replaces the earlier name and birth year
    /// but keeps any appearances already linked.
    pub fn add_person(&mut self, record: PersonRecord) -> &mut Self {
        let key = normalize_name(&record.name);
        let store = &mut self.store;

        if let Some(existing) = store.people.get_mut(&record.id) {
            let prev_key = normalize_name(&existing.name);
            if prev_key != key {
                if let Some(set) = store.by_name.get_mut(&prev_key) {
                    set.remove(&record.id);
                    if set.is_empty() {
                        store.by_name.remove(&prev_key);
                    }
                }
            }
            existing.name = record.name;
            existing.birth = record.birth;
            self.summary.duplicate_records += 1;
            store.by_name.entry(key).or_default().insert(record.id);
            return self;
        }

        store.by_name.entry(key).or_default().insert(record.id.clone());
        store.people.insert(record.id.clone(), Person::from(record));
        self.summary.people += 1;
        self
    }

    /// Adds a work. A repeated ID replaces the earlier title and year but
    /// keeps any appearances already linked.
    pub fn add_work(&mut self, record: WorkRecord) -> &mut Self {
        if let Some(existing) = self.store.works.get_mut(&record.id) {
            existing.title = record.title;
            existing.year = record.year;
            self.summary.duplicate_records += 1;
            return self;
        }

        self.store.works.insert(record.id.clone(), Work::from(record));
        self.summary.works += 1;
        self
    }

    /// Links a person to a work. Returns false (and drops the row) when either
    /// side is unknown.
    pub fn add_appearance(&mut self, appearance: Appearance) -> bool {
        let Appearance { person_id, work_id } = appearance;
        let store = &mut self.store;

        let person = store.people.get_mut(&person_id);
        let work = store.works.get_mut(&work_id);
        let (Some(person), Some(work)) = (person, work) else {
            debug!(person = %person_id, work = %work_id, "dropping appearance with unknown id");
            self.summary.appearances_dropped += 1;
            return false;
        };

        person.works.insert(work_id);
        work.stars.insert(person_id);
        self.summary.appearances_linked += 1;
        true
    }

    /// Counters for the rows applied so far.
    #[must_use]
    pub const fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    /// Finishes the build.
    #[must_use]
    pub fn build(self) -> GraphStore {
        let s = self.summary;
        info!(
            people = s.people,
            works = s.works,
            linked = s.appearances_linked,
            dropped = s.appearances_dropped,
            duplicates = s.duplicate_records,
            "graph built"
        );
        self.store
    }
}

/// Builds a graph from people, works and appearance rows.
///
/// Appearance rows that reference an unknown person or work are dropped
/// rather than reported as errors.
///
/// # Examples
///
/// ```
/// use costar::{build_graph, Appearance, CostarGraph, PersonId, PersonRecord, WorkRecord};
///
/// let graph = build_graph(
///     [PersonRecord::new("a", "Alice", None), PersonRecord::new("b", "Bob", None)],
///     [WorkRecord::new("m1", "First", Some(1999))],
///     [Appearance::new("a", "m1"), Appearance::new("b", "m1"), Appearance::new("z", "m1")],
/// );
/// assert_eq!(graph.neighbors_of(&PersonId::new("a")).len(), 2);
/// ```
pub fn build_graph<P, W, A>(people: P, works: W, appearances: A) -> GraphStore
where
    P: IntoIterator<Item = PersonRecord>,
    W: IntoIterator<Item = WorkRecord>,
    A: IntoIterator<Item = Appearance>,
{
    let mut builder = GraphBuilder::new();
    for person in people {
        builder.add_person(person);
    }
    for work in works {
        builder.add_work(work);
    }
    for appearance in appearances {
        builder.add_appearance(appearance);
    }
    builder.build()
}
