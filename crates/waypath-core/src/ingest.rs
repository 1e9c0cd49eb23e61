//! Edge-list ingestion
//!
//! Each line reads `<source>\t<destination>\t<weight>`, with optional
//! trailing whitespace after the weight. Blank lines are skipped. Anything
//! else is rejected with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::{Result, WaypathError};
use crate::graph::types::Weight;
use crate::graph::RoadGraph;
use crate::trace_time;

/// One parsed line of the edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

/// Parse a single line. `line_no` is 1-based and only used for errors.
pub fn parse_edge_line(line: &str, line_no: usize) -> Result<Option<EdgeRecord>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = line.splitn(3, '\t');
    let source = fields.next().unwrap_or_default();
    let destination = fields
        .next()
        .ok_or_else(|| WaypathError::malformed_edge(line_no, "missing destination field"))?;
    let weight = fields
        .next()
        .ok_or_else(|| WaypathError::malformed_edge(line_no, "missing weight field"))?;

    if source.is_empty() {
        return Err(WaypathError::malformed_edge(line_no, "empty source name"));
    }
    if destination.is_empty() {
        return Err(WaypathError::malformed_edge(line_no, "empty destination name"));
    }

    let weight = weight.trim();
    let weight: Weight = weight.parse().map_err(|_| {
        WaypathError::malformed_edge(
            line_no,
            format!("weight '{}' is not a non-negative integer", weight),
        )
    })?;

    Ok(Some(EdgeRecord {
        source: source.to_string(),
        destination: destination.to_string(),
        weight,
    }))
}

/// Read every edge from `reader` into `graph`, returning the number added.
/// On error, edges from earlier lines stay in the graph.
pub fn ingest_into<R: BufRead>(graph: &mut RoadGraph, reader: R) -> Result<usize> {
    let mut added = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| {
            WaypathError::io_operation("read graph", format!("line {}", line_no), e)
        })?;
        if let Some(record) = parse_edge_line(&line, line_no)? {
            graph.connect(&record.source, &record.destination, record.weight);
            added += 1;
        }
    }
    Ok(added)
}

/// Append the edges of the file at `path` to `graph`
#[tracing::instrument(skip(graph), fields(path = %path.display()))]
pub fn load_into(graph: &mut RoadGraph, path: &Path) -> Result<usize> {
    let start = Instant::now();
    let file = File::open(path)
        .map_err(|e| WaypathError::io_operation("open graph file", path.display(), e))?;
    let added = ingest_into(graph, BufReader::new(file))?;

    tracing::debug!(
        edges = added,
        locations = graph.vertex_count(),
        "loaded graph file"
    );
    trace_time!(start, "load_graph");
    Ok(added)
}

/// Build a fresh graph from the file at `path`
pub fn load_graph(path: &Path) -> Result<RoadGraph> {
    let mut graph = RoadGraph::new();
    load_into(&mut graph, path)?;
    Ok(graph)
}
