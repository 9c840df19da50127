use crate::application::read_models::UsageReportRow;
use crate::ports::outbound::CorpusError;
use std::path::PathBuf;

/// AnalyzeRequest - Internal request DTO for the usage-analysis use case
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Directory containing the per-project `*.json` tree files
    pub json_dir: PathBuf,
    /// When true, dependent counts include transitive dependents
    pub recursive: bool,
}

impl AnalyzeRequest {
    pub fn new(json_dir: PathBuf, recursive: bool) -> Self {
        Self {
            json_dir,
            recursive,
        }
    }
}

/// AnalyzeResponse - result of the usage analysis
#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    /// Rows sorted by dependent count descending
    pub rows: Vec<UsageReportRow>,
    /// Projects whose tree file loaded successfully
    pub projects_analyzed: Vec<String>,
    /// Files that failed to load, excluded from the rows
    pub errors: Vec<CorpusError>,
}
