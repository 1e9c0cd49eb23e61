//! Interactive numbered menu
//!
//! 1 load graph, 2 set source, 3 set destination and compute,
//! 4 save and continue, 5 save and exit. End of input leaves without saving.

use std::io::{self, BufRead, Write};
use std::path::Path;

use waypath_core::config::RouteConfig;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{bfs_search, dijkstra_search, LocationId, RoadGraph};
use waypath_core::ingest;
use waypath_core::report::{render_graph, render_neighbors, PathReport};
use waypath_core::results::ResultLog;

const MENU: &str = "1-Load locations\n2-Enter source\n3-Enter destination\n4-Save solution to file and continue\n5-Save solution to file and exit\n";

/// Parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Load,
    SetSource,
    Compute,
    Save,
    SaveAndExit,
    Invalid,
}

impl MenuChoice {
    fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Load,
            "2" => MenuChoice::SetSource,
            "3" => MenuChoice::Compute,
            "4" => MenuChoice::Save,
            "5" => MenuChoice::SaveAndExit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// State carried across menu iterations
pub struct Session {
    config: RouteConfig,
    graph: RoadGraph,
    source: Option<LocationId>,
    log: ResultLog,
}

impl Session {
    pub fn new(config: RouteConfig) -> Self {
        Self {
            config,
            graph: RoadGraph::new(),
            source: None,
            log: ResultLog::new(),
        }
    }

    /// Drive the menu until option 5 or end of input.
    ///
    /// Only failures reading `input` or writing `out` end the session.
    /// Everything else is printed as a diagnostic and the menu repeats.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        loop {
            write!(out, "{}", MENU)?;
            writeln!(out, "Please enter your operation:")?;

            let Some(line) = read_line(&mut input)? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            };

            let choice = MenuChoice::parse(&line);
            tracing::debug!(?choice, "menu selection");

            let outcome = match choice {
                MenuChoice::Load => self.load(),
                MenuChoice::SetSource => match self.require_graph() {
                    Ok(()) => {
                        let name = ask(&mut input, out, "Please enter the source location:")?;
                        self.set_source(&name)
                    }
                    Err(e) => Err(e),
                },
                MenuChoice::Compute => match self.require_source() {
                    Ok(source) => {
                        let name =
                            ask(&mut input, out, "Please enter the destination location:")?;
                        self.compute(source, &name)
                    }
                    Err(e) => Err(e),
                },
                MenuChoice::Save => self.save(),
                MenuChoice::SaveAndExit => match self.save() {
                    Ok(text) => {
                        write!(out, "{}", text)?;
                        writeln!(out, "Exiting program.")?;
                        return Ok(());
                    }
                    // unsaved results keep the session open
                    Err(e) => Err(e),
                },
                MenuChoice::Invalid => Ok("Invalid choice. Please try again.\n".to_string()),
            };

            let text = outcome.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "menu operation failed");
                format!("{}\n", diagnostic(&e))
            });
            write!(out, "{}", text)?;
        }
    }

    fn load(&mut self) -> Result<String> {
        let added = ingest::load_into(&mut self.graph, Path::new(&self.config.graph_file))?;
        tracing::debug!(edges = added, "menu load");
        Ok(render_graph(&self.graph, &self.config.distance_unit))
    }

    fn require_graph(&self) -> Result<()> {
        if self.graph.is_empty() {
            return Err(WaypathError::GraphNotLoaded);
        }
        Ok(())
    }

    fn require_source(&self) -> Result<LocationId> {
        self.require_graph()?;
        self.source.ok_or(WaypathError::SourceNotSet)
    }

    fn set_source(&mut self, name: &str) -> Result<String> {
        // an unknown name clears any earlier selection
        self.source = self.graph.lookup(name);
        let id = self.source.ok_or_else(|| WaypathError::not_found(name))?;

        Ok(format!(
            "Location {} has index {}\nDirect neighbors\n{}",
            name,
            id,
            render_neighbors(&self.graph, id, &self.config.distance_unit)
        ))
    }

    fn compute(&mut self, source: LocationId, name: &str) -> Result<String> {
        let destination = self.graph.resolve(name)?;

        let unit = &self.config.distance_unit;
        let registry = self.graph.registry();
        let bfs = PathReport::from_result(&bfs_search(&self.graph, source, destination), registry)
            .render_human(unit);
        let weighted =
            PathReport::from_result(&dijkstra_search(&self.graph, source, destination), registry)
                .render_human(unit);

        let text = format!("{}{}", bfs, weighted);
        self.log.record(bfs, weighted);
        Ok(text)
    }

    fn save(&self) -> Result<String> {
        let path = Path::new(&self.config.results_file);
        if self.log.flush(path)? {
            Ok(format!("Results saved to {}\n", self.config.results_file))
        } else {
            Ok("Nothing to save yet.\n".to_string())
        }
    }
}

/// Print `prompt` and read the answer
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    writeln!(out, "{}", prompt)?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// User-facing message for a failed menu operation
fn diagnostic(error: &WaypathError) -> String {
    match error {
        WaypathError::GraphNotLoaded => {
            "No locations loaded. Please load locations first.".to_string()
        }
        WaypathError::SourceNotSet => "Please enter the source location first.".to_string(),
        WaypathError::LocationNotFound { name } => format!("Location '{}' not found.", name),
        other => format!("Error: {}", other),
    }
}

/// Run the menu on the process's stdin/stdout
pub fn execute(config: RouteConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Session::new(config).run(stdin.lock(), &mut out)
}
