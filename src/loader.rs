//! CSV ingestion for the people / movies / stars tables.
//!
//! A data directory holds three files with header rows:
//!
//! - `people.csv`: `id,name,birth`
//! - `movies.csv`: `id,title,year`
//! - `stars.csv`: `person_id,movie_id`
//!
//! Loading is lenient. Rows that cannot be decoded are skipped with a
//! warning, unparseable years become `None`, and star rows naming unknown
//! people or movies are dropped by the graph builder. Only I/O failures and
//! a missing directory are errors.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::graph::{BuildSummary, GraphBuilder, GraphStore};
use crate::record::{Appearance, PersonRecord, WorkRecord};

/// File name of the people table.
pub const PEOPLE_FILE: &str = "people.csv";
/// File name of the movies table.
pub const MOVIES_FILE: &str = "movies.csv";
/// File name of the stars (appearances) table.
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// What a load did, row by row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub build: BuildSummary,
    /// Rows skipped because they could not be decoded.
    pub skipped_rows: usize,
}

/// Loads a graph from a data directory.
///
/// # Errors
/// Returns [`LoadError`] if the directory or one of the three files is
/// missing, or if reading fails at the I/O level.
pub fn load_directory(dir: impl AsRef<Path>) -> Result<GraphStore, LoadError> {
    load_directory_with_summary(dir).map(|(graph, _)| graph)
}

/// Like [`load_directory`], also returning row counters.
///
/// # Errors
/// See [`load_directory`].
pub fn load_directory_with_summary(
    dir: impl AsRef<Path>,
) -> Result<(GraphStore, LoadSummary), LoadError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory { path: dir.to_path_buf() });
    }

    let mut builder = GraphBuilder::new();
    let mut skipped = 0;

    skipped += read_file(&dir.join(PEOPLE_FILE), |row: PersonRow| {
        builder.add_person(PersonRecord::new(row.id, row.name, row.birth));
    })?;
    skipped += read_file(&dir.join(MOVIES_FILE), |row: MovieRow| {
        builder.add_work(WorkRecord::new(row.id, row.title, row.year));
    })?;
    skipped += read_file(&dir.join(STARS_FILE), |row: StarRow| {
        builder.add_appearance(Appearance::new(row.person_id, row.movie_id));
    })?;

    let summary = LoadSummary {
        build: *builder.summary(),
        skipped_rows: skipped,
    };
    info!(dir = %dir.display(), skipped, "data loaded");
    Ok((builder.build(), summary))
}

/// Loads a graph from three already-open CSV sources.
///
/// # Errors
/// Returns the underlying [`csv::Error`] on an I/O failure.
pub fn load_from_readers<P, M, S>(people: P, movies: M, stars: S) -> Result<GraphStore, csv::Error>
where
    P: Read,
    M: Read,
    S: Read,
{
    let mut builder = GraphBuilder::new();
    read_table(people, PEOPLE_FILE, |row: PersonRow| {
        builder.add_person(PersonRecord::new(row.id, row.name, row.birth));
    })?;
    read_table(movies, MOVIES_FILE, |row: MovieRow| {
        builder.add_work(WorkRecord::new(row.id, row.title, row.year));
    })?;
    read_table(stars, STARS_FILE, |row: StarRow| {
        builder.add_appearance(Appearance::new(row.person_id, row.movie_id));
    })?;
    Ok(builder.build())
}

fn read_file<T, F>(path: &Path, sink: F) -> Result<usize, LoadError>
where
    T: DeserializeOwned,
    F: FnMut(T),
{
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let label = path.file_name().and_then(|n| n.to_str()).unwrap_or("table");
    read_table(file, label, sink).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Streams rows of `reader` into `sink`, returning how many were skipped.
fn read_table<T, R, F>(reader: R, label: &str, mut sink: F) -> Result<usize, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut(T),
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut skipped = 0;
    for row in rdr.deserialize::<T>() {
        match row {
            Ok(row) => sink(row),
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                warn!(table = label, error = %err, "skipping malformed row");
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}
