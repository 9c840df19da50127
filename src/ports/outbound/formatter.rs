use crate::application::read_models::{UsageReportRow, VersionReportRow};
use crate::shared::Result;

/// ReportFormatter port for rendering analysis reports
///
/// This port abstracts the tabular output format (CSV, Markdown) for both
/// the artifact-usage report and the version-compliance report.
pub trait ReportFormatter {
    /// Formats the cross-project artifact usage report.
    ///
    /// # Arguments
    /// * `rows` - Report rows, already sorted by dependent count descending
    ///
    /// # Errors
    /// Returns an error if formatting fails
    fn format_usage(&self, rows: &[UsageReportRow]) -> Result<String>;

    /// Formats the per-project version-compliance report.
    ///
    /// # Arguments
    /// * `artifact_id` - The artifact the versions were looked up for
    /// * `rows` - One row per project in the corpus
    ///
    /// # Errors
    /// Returns an error if formatting fails
    fn format_versions(&self, artifact_id: &str, rows: &[VersionReportRow]) -> Result<String>;
}
