use crate::shared::Result;
use std::path::Path;

/// Captured result of one build-tool invocation.
#[derive(Debug, Clone)]
pub struct BuildToolOutput {
    /// Whether the invocation exited with status zero.
    pub success: bool,
    /// The dependency tree text produced by the tool (empty on failure).
    pub tree_text: String,
    /// Captured error stream, persisted into the project's error record
    /// when the invocation fails.
    pub stderr: String,
}

/// BuildToolRunner port for producing a project's dependency tree
///
/// This port abstracts the external build-tool invocation (`mvn
/// dependency:tree`). The call is blocking and synchronous; the caller
/// waits for the exit status.
pub trait BuildToolRunner {
    /// Runs the dependency-tree goal inside `project_dir`.
    ///
    /// # Arguments
    /// * `project_dir` - Directory containing the build descriptor (pom.xml)
    /// * `includes` - Comma-separated group-id prefixes to restrict the tree
    ///
    /// # Returns
    /// The captured invocation output. A non-zero exit status is reported
    /// through [`BuildToolOutput::success`], not as an error; only a
    /// failure to launch the tool at all is an `Err`.
    fn run_dependency_tree(&self, project_dir: &Path, includes: &str) -> Result<BuildToolOutput>;
}
