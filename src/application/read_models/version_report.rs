/// One row of the version-compliance report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReportRow {
    /// Repository / project name (tree file name minus `.json`)
    pub project: String,
    /// Resolved version, or `Not Found` / `Error`
    pub version: String,
    /// Whether the resolved version is >= the requested target
    pub up_to_date: bool,
}

impl VersionReportRow {
    pub const NOT_FOUND: &'static str = "Not Found";
    pub const ERROR: &'static str = "Error";

    pub fn found(project: impl Into<String>, version: impl Into<String>, up_to_date: bool) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            up_to_date,
        }
    }

    /// Row for a project whose tree contains no matching artifact.
    pub fn not_found(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            version: Self::NOT_FOUND.to_string(),
            up_to_date: false,
        }
    }

    /// Row for a project whose tree file failed to load.
    pub fn load_error(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            version: Self::ERROR.to_string(),
            up_to_date: false,
        }
    }
}
