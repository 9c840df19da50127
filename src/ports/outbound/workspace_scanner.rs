use crate::shared::Result;
use std::path::{Path, PathBuf};

/// WorkspaceScanner port for locating candidate Maven projects
///
/// This port abstracts directory enumeration and build-descriptor
/// discovery under the repositories root.
pub trait WorkspaceScanner {
    /// Lists the immediate, non-hidden subdirectories of `repos_dir`,
    /// sorted by name.
    ///
    /// # Errors
    /// Returns an error if `repos_dir` cannot be read.
    fn list_projects(&self, repos_dir: &Path) -> Result<Vec<PathBuf>>;

    /// Finds the directories under `project_dir` that carry a `pom.xml`.
    ///
    /// Checks `project_dir` itself first; when it has no descriptor, scans
    /// its immediate child directories (one level only, never deeper).
    /// Returns an empty list when nothing is found.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn discover_build_dirs(&self, project_dir: &Path) -> Result<Vec<PathBuf>>;
}
