use mvn_deptree::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock BuildToolRunner that serves scripted outputs keyed by directory name
#[derive(Default, Clone)]
pub struct MockBuildToolRunner {
    outputs: HashMap<String, BuildToolOutput>,
    fallback_tree: Option<String>,
    pub invocations: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockBuildToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful invocation for the given directory name.
    pub fn with_tree(mut self, dir_name: &str, tree_text: &str) -> Self {
        self.outputs.insert(
            dir_name.to_string(),
            BuildToolOutput {
                success: true,
                tree_text: tree_text.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Scripts a failed invocation for the given directory name.
    pub fn with_failure(mut self, dir_name: &str, stderr: &str) -> Self {
        self.outputs.insert(
            dir_name.to_string(),
            BuildToolOutput {
                success: false,
                tree_text: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Tree text returned for every directory without a scripted output.
    pub fn with_fallback_tree(mut self, tree_text: &str) -> Self {
        self.fallback_tree = Some(tree_text.to_string());
        self
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl BuildToolRunner for MockBuildToolRunner {
    fn run_dependency_tree(&self, project_dir: &Path, includes: &str) -> Result<BuildToolOutput> {
        let dir_name = project_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.invocations
            .lock()
            .unwrap()
            .push((dir_name.clone(), includes.to_string()));

        if let Some(output) = self.outputs.get(&dir_name) {
            return Ok(output.clone());
        }
        if let Some(tree) = &self.fallback_tree {
            return Ok(BuildToolOutput {
                success: true,
                tree_text: tree.clone(),
                stderr: String::new(),
            });
        }
        Err(anyhow::anyhow!(
            "no scripted output for directory '{}'",
            dir_name
        ))
    }
}
