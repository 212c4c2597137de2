#![cfg(feature = "csv")]

use std::fs;
use std::path::Path;

use costar::loader::{MOVIES_FILE, PEOPLE_FILE, STARS_FILE};
use costar::{
    find_shortest_path, load_directory, load_directory_with_summary, resolve, CostarGraph,
    LoadError, PersonId, Resolution,
};

fn write_tables(dir: &Path, people: &str, movies: &str, stars: &str) {
    fs::write(dir.join(PEOPLE_FILE), people).unwrap();
    fs::write(dir.join(MOVIES_FILE), movies).unwrap();
    fs::write(dir.join(STARS_FILE), stars).unwrap();
}

const PEOPLE: &str = "\
id,name,birth
102,Kevin Bacon,1958
129,Tom Cruise,1962
144,Cary Elwes,1962
158,Tom Hanks,1956
1597,Mandy Patinkin,1952
163,Dustin Hoffman,1937
1697,Chris Sarandon,1942
193,Demi Moore,1962
197,Jack Nicholson,1937
200,Bill Paxton,1955
398,Sally Field,1946
420,Valeria Golino,1965
596520,Gerald R. Molen,1935
641,Gary Sinise,1955
705,Robin Wright,1966
914612,Emma Watson,1990
";

const MOVIES: &str = "\
id,title,year
112384,\"Apollo 13\",1995
104257,\"A Few Good Men\",1992
109830,\"Forrest Gump\",1994
93779,\"The Princess Bride\",1987
95953,\"Rain Man\",1988
";

const STARS: &str = "\
person_id,movie_id
102,104257
102,112384
129,104257
129,95953
144,93779
158,109830
158,112384
1597,93779
163,95953
1697,93779
193,104257
197,104257
200,112384
398,109830
420,95953
596520,95953
641,109830
641,112384
705,109830
705,93779
";

#[test]
fn loads_the_small_dataset_and_finds_bacon_numbers() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path(), PEOPLE, MOVIES, STARS);

    let (graph, summary) = load_directory_with_summary(dir.path()).unwrap();
    assert_eq!(graph.person_count(), 16);
    assert_eq!(graph.work_count(), 5);
    assert_eq!(summary.build.appearances_linked, 20);
    assert_eq!(summary.build.appearances_dropped, 0);
    assert_eq!(summary.skipped_rows, 0);

    let bacon = PersonId::new("102");
    let hanks = PersonId::new("158");
    let wright = PersonId::new("705");
    let watson = PersonId::new("914612");

    assert_eq!(find_shortest_path(&graph, &bacon, &hanks).unwrap().degrees(), Some(1));
    // Bacon -> Hanks (Apollo 13) -> Wright (Forrest Gump).
    assert_eq!(find_shortest_path(&graph, &bacon, &wright).unwrap().degrees(), Some(2));
    // Emma Watson has no movies in this data set.
    assert!(find_shortest_path(&graph, &bacon, &watson).unwrap().path().is_none());
}

#[test]
fn malformed_rows_are_skipped_or_dropped() {
    let dir = tempfile::tempdir().unwrap();
    write_tables(
        dir.path(),
        "id,name,birth\n1,Alice,1970\n2,Bob,unknown\n3\n",
        "id,title,year\n10,Film,\n",
        "person_id,movie_id\n1,10\n2,10\n404,10\n1,404\n",
    );

    let (graph, summary) = load_directory_with_summary(dir.path()).unwrap();
    assert_eq!(summary.skipped_rows, 1);
    assert_eq!(summary.build.appearances_dropped, 2);
    assert_eq!(graph.person(&PersonId::new("2")).unwrap().birth, None);
    assert_eq!(resolve(&graph, "bob"), Resolution::Unique(PersonId::new("2")));
}

#[test]
fn missing_directory_and_files_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(load_directory(&missing), Err(LoadError::MissingDirectory { .. })));

    fs::write(dir.path().join(PEOPLE_FILE), "id,name,birth\n").unwrap();
    let err = load_directory(dir.path()).unwrap_err();
    let LoadError::Io { path, .. } = err else {
        panic!("expected an I/O error, got {err:?}");
    };
    assert!(path.ends_with(MOVIES_FILE));
}
