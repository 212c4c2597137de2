//! degrees - how many shared movies separate two people?
//!
//! Loads a `people.csv` / `movies.csv` / `stars.csv` directory, asks for two
//! names and prints the shortest chain of co-stars between them.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use costar::search::DEFAULT_MAX_EXPANSIONS;
use costar::{
    load_directory, resolve_name, Candidate, Chooser, CostarGraph, PersonId, SearchConstraints,
    SearchEngine, SearchOutcome,
};

#[derive(Debug, Parser)]
#[command(name = "degrees")]
#[command(about = "Degrees of separation between two people via shared movies")]
#[command(version)]
struct Cli {
    /// Data directory holding people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,

    /// Give up after expanding this many people
    #[arg(long, default_value_t = DEFAULT_MAX_EXPANSIONS, conflicts_with = "no_limit")]
    max_expansions: usize,

    /// Search without an expansion limit
    #[arg(long)]
    no_limit: bool,

    /// Print the path as JSON instead of prose
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn constraints(&self) -> SearchConstraints {
        if self.no_limit {
            SearchConstraints::unbounded()
        } else {
            SearchConstraints::with_max_expansions(self.max_expansions)
        }
    }
}

/// Asks which of several same-named people was meant.
struct PromptChooser<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Chooser for PromptChooser<'_, R, W> {
    fn choose(&mut self, query: &str, candidates: &[Candidate]) -> Option<PersonId> {
        let mut listing = format!("Which '{query}'?\n");
        for c in candidates {
            let birth = c.birth.map(|b| b.to_string()).unwrap_or_default();
            listing.push_str(&format!("ID: {}, Name: {}, Birth: {birth}\n", c.id, c.name));
        }
        self.output.write_all(listing.as_bytes()).ok()?;

        let answer = prompt(&mut *self.input, &mut *self.output, "Intended Person ID: ").ok()??;
        let id = PersonId::new(answer);
        if !candidates.iter().any(|c| c.id == id) {
            debug!(%id, "answer is not one of the candidates");
            return None;
        }
        Some(id)
    }
}

/// Prints `label` and reads one trimmed line; `None` at end of input.
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_for_person<G, R, W>(graph: &G, input: &mut R, output: &mut W) -> Result<PersonId>
where
    G: CostarGraph + ?Sized,
    R: BufRead,
    W: Write,
{
    let answer = prompt(&mut *input, &mut *output, "Name: ").context("failed to read name")?;
    let Some(name) = answer else {
        bail!("No name given.");
    };
    let mut chooser = PromptChooser { input, output };
    match resolve_name(graph, &name, Some(&mut chooser)) {
        Some(id) => Ok(id),
        None => bail!("Person not found."),
    }
}

fn person_name<'g, G: CostarGraph + ?Sized>(graph: &'g G, id: &PersonId) -> &'g str {
    graph.person(id).map_or("?", |p| p.name.as_str())
}

/// Human-readable lines for a search outcome, hops numbered from 1.
fn render<G>(graph: &G, source: &PersonId, outcome: &SearchOutcome) -> Vec<String>
where
    G: CostarGraph + ?Sized,
{
    match outcome {
        SearchOutcome::Found { path } => {
            let mut lines = vec![format!("{} degrees of separation.", path.degrees())];
            for (i, link) in path.links(source).enumerate() {
                let title = graph.work(link.work).map_or("?", |w| w.title.as_str());
                lines.push(format!(
                    "{}: {} and {} starred in {}",
                    i + 1,
                    person_name(graph, link.from),
                    person_name(graph, link.to),
                    title
                ));
            }
            lines
        }
        SearchOutcome::NoPath => vec!["Not connected.".to_string()],
        SearchOutcome::LimitExceeded { expansions, limit } => vec![
            format!(
                "Search space too large: gave up after {expansions} expansions (limit {limit})."
            ),
            "Re-run with --no-limit or a larger --max-expansions.".to_string(),
        ],
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let default_filter = format!("costar={log_level},degrees={log_level}");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("Loading data...");
    let graph = load_directory(&cli.directory)
        .with_context(|| format!("failed to load {}", cli.directory.display()))?;
    println!("Data loaded.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let source = ask_for_person(&graph, &mut input, &mut output)?;
    let target = ask_for_person(&graph, &mut input, &mut output)?;

    let engine = SearchEngine::with_constraints(&graph, cli.constraints())?;
    let report = engine.search(&source, &target)?;
    debug!(?report.stats, "search finished");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for line in render(&graph, &source, &report.outcome) {
        println!("{line}");
    }

    Ok(())
}
