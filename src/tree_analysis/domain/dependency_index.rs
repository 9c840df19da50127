use super::DependencyNode;
use std::collections::{BTreeSet, HashMap};

/// Version string recorded for structured nodes whose version is blank.
pub const UNKNOWN_VERSION: &str = "N/A";

/// Cross-project dependency index built from a corpus of per-project trees.
///
/// For every artifact id seen anywhere in any project's dependency subtree
/// it records the versions used (as a multiset), the set of projects that
/// depend on it, and the `project:version` pairings. An artifact that
/// appears in zero trees has no entry in any of the maps.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectDependencyIndex {
    artifact_versions: HashMap<String, Vec<String>>,
    artifact_dependents: HashMap<String, BTreeSet<String>>,
    project_version_pairs: HashMap<String, BTreeSet<String>>,
}

impl ProjectDependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one project's dependency subtree into the index.
    ///
    /// Walks `node` and every descendant; nodes without structured
    /// coordinates (raw fallback lines) are skipped but their children are
    /// still visited.
    pub fn record(&mut self, project: &str, node: &DependencyNode) {
        if let Some(artifact_id) = node.artifact_id() {
            let version = match node.version() {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => UNKNOWN_VERSION.to_string(),
            };
            self.artifact_versions
                .entry(artifact_id.to_string())
                .or_default()
                .push(version.clone());
            self.artifact_dependents
                .entry(artifact_id.to_string())
                .or_default()
                .insert(project.to_string());
            self.project_version_pairs
                .entry(artifact_id.to_string())
                .or_default()
                .insert(format!("{}:{}", project, version));
        }
        for child in &node.dependencies {
            self.record(project, child);
        }
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &str> {
        self.artifact_dependents.keys().map(String::as_str)
    }

    pub fn versions_of(&self, artifact_id: &str) -> &[String] {
        self.artifact_versions
            .get(artifact_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn dependents_of(&self, artifact_id: &str) -> Option<&BTreeSet<String>> {
        self.artifact_dependents.get(artifact_id)
    }

    pub fn project_versions_of(&self, artifact_id: &str) -> Option<&BTreeSet<String>> {
        self.project_version_pairs.get(artifact_id)
    }

    pub fn artifact_count(&self) -> usize {
        self.artifact_dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifact_dependents.is_empty()
    }
}
