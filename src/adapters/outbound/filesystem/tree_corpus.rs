use crate::ports::outbound::{CorpusError, TreeCorpus, TreeCorpusReader};
use crate::shared::error::DeptreeError;
use crate::shared::Result;
use crate::tree_analysis::domain::DependencyNode;
use std::fs;
use std::path::Path;

/// FileSystemCorpusReader adapter for loading the `*.json` tree corpus
///
/// This adapter implements the TreeCorpusReader port. Each file is parsed
/// independently; a corrupt file produces a per-file error instead of
/// aborting the whole load.
pub struct FileSystemCorpusReader;

impl FileSystemCorpusReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemCorpusReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeCorpusReader for FileSystemCorpusReader {
    fn read_corpus(&self, dir: &Path) -> Result<TreeCorpus> {
        let entries = fs::read_dir(dir).map_err(|e| DeptreeError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut files: Vec<std::path::PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().map(|ext| ext == "json").unwrap_or(false)
            })
            .collect();
        files.sort();

        let mut corpus = TreeCorpus::default();
        for path in files {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let project = path
                .file_stem()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    corpus.errors.push(CorpusError {
                        file_name,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            match serde_json::from_str::<DependencyNode>(&content) {
                Ok(root) => corpus.trees.push((project, root)),
                Err(e) => corpus.errors.push(CorpusError {
                    file_name,
                    message: e.to_string(),
                }),
            }
        }

        Ok(corpus)
    }
}
