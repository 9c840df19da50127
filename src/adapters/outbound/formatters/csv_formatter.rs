use crate::application::read_models::{UsageReportRow, VersionReportRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CSV header for the artifact-usage report
const USAGE_HEADER: &str = "Artifact Name,List of Unique Dependents,Total Number of Dependents,List of Unique Versions,Total Number of Unique Versions,Dependent:Version\n";

/// CsvFormatter adapter for generating CSV reports
///
/// This adapter implements the ReportFormatter port for CSV format.
/// Fields containing commas, quotes or newlines are quoted per RFC 4180.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a field when it contains a delimiter, quote or newline
    fn escape_csv_field(text: &str) -> String {
        if text.contains(',') || text.contains('"') || text.contains('\n') {
            format!("\"{}\"", text.replace('"', "\"\""))
        } else {
            text.to_string()
        }
    }

    fn push_record(output: &mut String, fields: &[&str]) {
        let escaped: Vec<String> = fields.iter().map(|f| Self::escape_csv_field(f)).collect();
        output.push_str(&escaped.join(","));
        output.push('\n');
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format_usage(&self, rows: &[UsageReportRow]) -> Result<String> {
        let mut output = String::from(USAGE_HEADER);
        for row in rows {
            let dependents = row.dependents.join(", ");
            let versions = row.versions.join(", ");
            let dependent_versions = row.dependent_versions.join(", ");
            Self::push_record(
                &mut output,
                &[
                    &row.artifact,
                    &dependents,
                    &row.dependent_count.to_string(),
                    &versions,
                    &row.version_count.to_string(),
                    &dependent_versions,
                ],
            );
        }
        Ok(output)
    }

    fn format_versions(&self, artifact_id: &str, rows: &[VersionReportRow]) -> Result<String> {
        let mut output = String::new();
        Self::push_record(
            &mut output,
            &[
                "Repository",
                &format!("{} Version", artifact_id),
                "Updated",
            ],
        );
        for row in rows {
            let updated = if row.up_to_date { "Yes" } else { "No" };
            Self::push_record(&mut output, &[&row.project, &row.version, updated]);
        }
        Ok(output)
    }
}
