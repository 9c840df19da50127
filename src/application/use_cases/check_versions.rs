use crate::application::dto::{VersionsRequest, VersionsResponse};
use crate::application::read_models::VersionReportRow;
use crate::ports::outbound::{ProgressReporter, TreeCorpusReader};
use crate::shared::Result;
use crate::tree_analysis::services::VersionExtractor;

/// CheckVersionsUseCase - per-project version compliance
///
/// Looks up one `groupId:artifactId` in every tree of the corpus and
/// classifies the resolved version against the target. Projects whose tree
/// file fails to load yield an `Error` row rather than halting the batch.
///
/// # Type Parameters
/// * `CR` - TreeCorpusReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckVersionsUseCase<CR, PR> {
    corpus_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> CheckVersionsUseCase<CR, PR>
where
    CR: TreeCorpusReader,
    PR: ProgressReporter,
{
    /// Creates a new CheckVersionsUseCase with injected dependencies
    pub fn new(corpus_reader: CR, progress_reporter: PR) -> Self {
        Self {
            corpus_reader,
            progress_reporter,
        }
    }

    /// Executes the version check.
    ///
    /// # Errors
    /// Returns an error if the corpus directory cannot be read or the
    /// target version is not a valid (lenient) semantic version.
    pub fn execute(&self, request: VersionsRequest) -> Result<VersionsResponse> {
        let target = VersionExtractor::parse_target(&request.target_version)?;

        self.progress_reporter.report(&format!(
            "🔎 Looking up {}:{} (target {}) in {}",
            request.group_id,
            request.artifact_id,
            request.target_version,
            request.json_dir.display()
        ));

        let corpus = self.corpus_reader.read_corpus(&request.json_dir)?;

        let mut rows: Vec<VersionReportRow> = Vec::new();
        for (project, root) in &corpus.trees {
            match VersionExtractor::find_version(root, &request.group_id, &request.artifact_id) {
                Some(version) => {
                    let up_to_date = VersionExtractor::is_up_to_date(&version, &target);
                    rows.push(VersionReportRow::found(project.clone(), version, up_to_date));
                }
                None => rows.push(VersionReportRow::not_found(project.clone())),
            }
        }
        for error in &corpus.errors {
            self.progress_reporter
                .report_error(&format!("⚠️  {}", error));
            rows.push(VersionReportRow::load_error(error.project()));
        }
        rows.sort_by(|a, b| a.project.cmp(&b.project));

        let up_to_date_count = rows.iter().filter(|r| r.up_to_date).count();
        self.progress_reporter.report_completion(&format!(
            "✅ Checked {} project(s): {} up to date",
            rows.len(),
            up_to_date_count
        ));

        Ok(VersionsResponse { rows })
    }
}
