use crate::shared::Result;
use crate::tree_analysis::domain::DependencyNode;
use std::path::Path;

/// One file that could not be loaded from the corpus directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusError {
    /// File name inside the corpus directory (e.g. `proj-a.json`).
    pub file_name: String,
    pub message: String,
}

impl CorpusError {
    /// The project name the file belongs to (file name minus `.json`).
    pub fn project(&self) -> &str {
        self.file_name
            .strip_suffix(".json")
            .unwrap_or(&self.file_name)
    }
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file_name, self.message)
    }
}

/// A loaded corpus of per-project dependency trees.
///
/// Files that failed to parse are reported in `errors` and excluded from
/// `trees`; a corrupt file never aborts the load.
#[derive(Debug, Default, Clone)]
pub struct TreeCorpus {
    /// `(project name, root node)` in file-name order.
    pub trees: Vec<(String, DependencyNode)>,
    pub errors: Vec<CorpusError>,
}

/// TreeCorpusReader port for loading previously produced tree files
///
/// This port abstracts reading the `*.json` corpus directory that the
/// build step populates.
pub trait TreeCorpusReader {
    /// Reads every `*.json` file under `dir`.
    ///
    /// # Errors
    /// Returns an error only if the directory itself cannot be read;
    /// per-file failures land in [`TreeCorpus::errors`].
    fn read_corpus(&self, dir: &Path) -> Result<TreeCorpus>;
}
