use crate::application::read_models::{UsageReportRow, VersionReportRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the artifact-usage report
const USAGE_TABLE_HEADER: &str =
    "| Artifact | Dependents | Count | Versions | Version Count | Dependent:Version |\n";

/// Markdown table separator line for the usage table
const USAGE_TABLE_SEPARATOR: &str =
    "|----------|------------|-------|----------|---------------|-------------------|\n";

/// MarkdownFormatter adapter for generating Markdown reports
///
/// This adapter implements the ReportFormatter port for Markdown format.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_usage(&self, rows: &[UsageReportRow]) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Artifact Usage Report\n\n");

        if rows.is_empty() {
            output.push_str("*No artifacts found*\n");
            return Ok(output);
        }

        output.push_str(USAGE_TABLE_HEADER);
        output.push_str(USAGE_TABLE_SEPARATOR);
        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.artifact),
                Self::escape_markdown_table_cell(&row.dependents.join(", ")),
                row.dependent_count,
                Self::escape_markdown_table_cell(&row.versions.join(", ")),
                row.version_count,
                Self::escape_markdown_table_cell(&row.dependent_versions.join(", ")),
            ));
        }
        Ok(output)
    }

    fn format_versions(&self, artifact_id: &str, rows: &[VersionReportRow]) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# Version Report for {}\n\n", artifact_id));

        if rows.is_empty() {
            output.push_str("*No repositories found*\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "| Repository | {} Version | Updated |\n",
            Self::escape_markdown_table_cell(artifact_id)
        ));
        output.push_str("|------------|---------|---------|\n");
        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.project),
                Self::escape_markdown_table_cell(&row.version),
                if row.up_to_date { "Yes" } else { "No" },
            ));
        }
        Ok(output)
    }
}
