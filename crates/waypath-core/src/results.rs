//! Result log
//!
//! Holds the most recent BFS and weighted reports until they are flushed,
//! then appends them to a text file. The file is never truncated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, WaypathError};

/// The pair of rendered reports produced by one path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPair {
    pub bfs: String,
    pub weighted: String,
}

/// Pending reports awaiting an append to the result log
#[derive(Debug, Clone, Default)]
pub struct ResultLog {
    latest: Option<ReportPair>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the retained pair with a newer computation
    pub fn record(&mut self, bfs: String, weighted: String) {
        self.latest = Some(ReportPair { bfs, weighted });
    }

    pub fn latest(&self) -> Option<&ReportPair> {
        self.latest.as_ref()
    }

    /// Append the retained pair (BFS first) to `path`.
    ///
    /// Returns whether anything was written. The pair stays retained, so
    /// saving twice appends it twice.
    pub fn flush(&self, path: &Path) -> Result<bool> {
        let Some(pair) = &self.latest else {
            tracing::debug!(path = %path.display(), "nothing computed yet, skipping save");
            return Ok(false);
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| WaypathError::io_operation("open result log", path.display(), e))?;
        file.write_all(pair.bfs.as_bytes())
            .and_then(|()| file.write_all(pair.weighted.as_bytes()))
            .map_err(|e| {
                WaypathError::io_operation("append to result log", path.display(), e)
            })?;

        tracing::debug!(path = %path.display(), "appended reports to result log");
        Ok(true)
    }
}
