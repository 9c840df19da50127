use crate::application::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::application::read_models::UsageReportBuilder;
use crate::ports::outbound::{ProgressReporter, TreeCorpusReader};
use crate::shared::Result;
use crate::tree_analysis::services::DependencyAggregator;

/// AnalyzeUsageUseCase - cross-project artifact usage analysis
///
/// Loads every per-project tree file from the corpus directory, flattens
/// the trees into the dependency index and produces report rows. Corrupt
/// files are surfaced in the response and never abort the analysis.
///
/// # Type Parameters
/// * `CR` - TreeCorpusReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeUsageUseCase<CR, PR> {
    corpus_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> AnalyzeUsageUseCase<CR, PR>
where
    CR: TreeCorpusReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeUsageUseCase with injected dependencies
    pub fn new(corpus_reader: CR, progress_reporter: PR) -> Self {
        Self {
            corpus_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis.
    ///
    /// # Errors
    /// Returns an error if the corpus directory itself cannot be read.
    pub fn execute(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency trees from: {}",
            request.json_dir.display()
        ));

        let corpus = self.corpus_reader.read_corpus(&request.json_dir)?;
        let projects_analyzed: Vec<String> =
            corpus.trees.iter().map(|(name, _)| name.clone()).collect();

        self.progress_reporter.report(&format!(
            "✅ Loaded {} project tree(s), {} file(s) with errors",
            projects_analyzed.len(),
            corpus.errors.len()
        ));
        for error in &corpus.errors {
            self.progress_reporter
                .report_error(&format!("⚠️  Skipping {}", error));
        }

        let index = DependencyAggregator::build_index(&corpus.trees);
        self.progress_reporter.report(&format!(
            "📊 Indexed {} unique artifact(s){}",
            index.artifact_count(),
            if request.recursive {
                " (counting recursive dependents)"
            } else {
                ""
            }
        ));

        let rows = UsageReportBuilder::build(&index, request.recursive);

        Ok(AnalyzeResponse {
            rows,
            projects_analyzed,
            errors: corpus.errors,
        })
    }
}
