use crate::tree_analysis::domain::ErrorRecord;
use std::path::PathBuf;

/// BuildTreesRequest - Internal request DTO for the tree-building batch run
///
/// Output locations are owned by the already-prepared [`TreeSink`] adapter,
/// not by the request.
///
/// [`TreeSink`]: crate::ports::outbound::TreeSink
#[derive(Debug, Clone)]
pub struct BuildTreesRequest {
    /// Directory whose immediate children are candidate project directories
    pub repos_dir: PathBuf,
    /// Comma-separated group-id prefixes passed to the build tool
    pub includes: String,
}

impl BuildTreesRequest {
    pub fn new(repos_dir: PathBuf, includes: String) -> Self {
        Self {
            repos_dir,
            includes,
        }
    }
}

/// Outcome of one batch run across all projects.
///
/// The driver threads this accumulator through the run explicitly; nothing
/// is held in global state between per-project calls.
#[derive(Debug, Default, Clone)]
pub struct BuildTreesSummary {
    /// Projects whose tree was parsed and written as JSON
    pub succeeded: Vec<String>,
    /// Projects that produced an error record (missing pom or tool failure)
    pub error_records: Vec<ErrorRecord>,
    /// Projects whose tool output parsed to no root; nothing was written
    pub parse_empty: Vec<String>,
}

impl BuildTreesSummary {
    pub fn total_processed(&self) -> usize {
        self.succeeded.len() + self.error_records.len() + self.parse_empty.len()
    }
}
