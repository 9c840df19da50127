use crate::tree_analysis::domain::dependency_index::UNKNOWN_VERSION;
use crate::tree_analysis::domain::ProjectDependencyIndex;
use crate::tree_analysis::services::DependencyAggregator;

/// One row of the artifact-usage report.
///
/// Formatter-facing view; list fields are pre-sorted so every formatter
/// renders identical content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReportRow {
    pub artifact: String,
    /// Sorted unique project names that depend on the artifact (directly)
    pub dependents: Vec<String>,
    /// Direct or transitive dependent count, per the caller's choice
    pub dependent_count: usize,
    /// Sorted unique versions; `N/A` only when no real version is known
    pub versions: Vec<String>,
    pub version_count: usize,
    /// Sorted `project:version` pairings
    pub dependent_versions: Vec<String>,
}

/// Builds usage report rows from a populated dependency index.
pub struct UsageReportBuilder;

impl UsageReportBuilder {
    /// Produces one row per artifact, sorted by dependent count descending
    /// (ties broken by artifact name for a stable report).
    ///
    /// # Arguments
    /// * `index` - The populated cross-project index
    /// * `recursive` - When true, counts transitive dependents instead of
    ///   direct ones (the dependent list always shows direct dependents)
    pub fn build(index: &ProjectDependencyIndex, recursive: bool) -> Vec<UsageReportRow> {
        let recursive_dependents = if recursive {
            Some(DependencyAggregator::recursive_dependents(index))
        } else {
            None
        };

        let mut rows: Vec<UsageReportRow> = index
            .artifacts()
            .map(|artifact| {
                let dependents: Vec<String> = index
                    .dependents_of(artifact)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default();

                let dependent_count = match &recursive_dependents {
                    Some(map) => map.get(artifact).map(|set| set.len()).unwrap_or(0),
                    None => dependents.len(),
                };

                let versions = Self::unique_versions(index.versions_of(artifact));
                let version_count = versions.len();

                let dependent_versions: Vec<String> = index
                    .project_versions_of(artifact)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default();

                UsageReportRow {
                    artifact: artifact.to_string(),
                    dependents,
                    dependent_count,
                    versions,
                    version_count,
                    dependent_versions,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.dependent_count
                .cmp(&a.dependent_count)
                .then_with(|| a.artifact.cmp(&b.artifact))
        });
        rows
    }

    /// Deduplicates and sorts versions, dropping `N/A` and blank entries
    /// unless nothing else remains (every artifact keeps at least one
    /// version value).
    fn unique_versions(versions: &[String]) -> Vec<String> {
        let mut unique: Vec<String> = versions
            .iter()
            .filter(|v| !v.is_empty() && *v != UNKNOWN_VERSION)
            .cloned()
            .collect();
        unique.sort();
        unique.dedup();
        if unique.is_empty() {
            unique.push(UNKNOWN_VERSION.to_string());
        }
        unique
    }
}
