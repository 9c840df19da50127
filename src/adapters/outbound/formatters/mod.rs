pub mod csv_formatter;
pub mod markdown_formatter;

pub use csv_formatter::CsvFormatter;
pub use markdown_formatter::MarkdownFormatter;
