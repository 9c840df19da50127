use crate::adapters::outbound::formatters::{CsvFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for the format
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Generating CSV report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
