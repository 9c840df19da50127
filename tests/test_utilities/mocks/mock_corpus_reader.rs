use mvn_deptree::prelude::*;
use std::path::Path;

/// Mock TreeCorpusReader that returns a preset corpus
#[derive(Default)]
pub struct MockCorpusReader {
    corpus: TreeCorpus,
    fail: bool,
}

impl MockCorpusReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, project: &str, root: DependencyNode) -> Self {
        self.corpus.trees.push((project.to_string(), root));
        self
    }

    pub fn with_error(mut self, file_name: &str, message: &str) -> Self {
        self.corpus.errors.push(CorpusError {
            file_name: file_name.to_string(),
            message: message.to_string(),
        });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            corpus: TreeCorpus::default(),
            fail: true,
        }
    }
}

impl TreeCorpusReader for MockCorpusReader {
    fn read_corpus(&self, dir: &Path) -> Result<TreeCorpus> {
        if self.fail {
            return Err(anyhow::anyhow!(
                "failed to read corpus directory: {}",
                dir.display()
            ));
        }
        Ok(self.corpus.clone())
    }
}
