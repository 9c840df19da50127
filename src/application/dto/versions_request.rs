use crate::application::read_models::VersionReportRow;
use std::path::PathBuf;

/// VersionsRequest - Internal request DTO for the version-compliance use case
#[derive(Debug, Clone)]
pub struct VersionsRequest {
    /// Directory containing the per-project `*.json` tree files
    pub json_dir: PathBuf,
    pub group_id: String,
    pub artifact_id: String,
    /// Target version each project's resolved version is compared against
    pub target_version: String,
}

impl VersionsRequest {
    pub fn new(
        json_dir: PathBuf,
        group_id: String,
        artifact_id: String,
        target_version: String,
    ) -> Self {
        Self {
            json_dir,
            group_id,
            artifact_id,
            target_version,
        }
    }
}

/// VersionsResponse - one row per project in the corpus
#[derive(Debug, Clone)]
pub struct VersionsResponse {
    pub rows: Vec<VersionReportRow>,
}
