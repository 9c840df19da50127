use mvn_deptree::prelude::*;
use mvn_deptree::tree_analysis::domain::ErrorRecord;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock TreeSink that records writes in memory
#[derive(Default, Clone)]
pub struct MockTreeSink {
    pub trees: Arc<Mutex<Vec<(String, DependencyNode)>>>,
    pub errors: Arc<Mutex<Vec<ErrorRecord>>>,
}

impl MockTreeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_projects(&self) -> Vec<String> {
        self.trees
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn error_projects(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.project.clone())
            .collect()
    }
}

impl TreeSink for MockTreeSink {
    fn write_tree(&self, project: &str, root: &DependencyNode) -> Result<PathBuf> {
        self.trees
            .lock()
            .unwrap()
            .push((project.to_string(), root.clone()));
        Ok(PathBuf::from(format!("{}.json", project)))
    }

    fn write_error(&self, record: &ErrorRecord) -> Result<PathBuf> {
        self.errors.lock().unwrap().push(record.clone());
        Ok(PathBuf::from(record.file_name()))
    }
}
