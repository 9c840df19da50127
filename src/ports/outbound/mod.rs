/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build tool, file system, console).
pub mod build_tool_runner;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod tree_corpus_reader;
pub mod tree_sink;
pub mod workspace_scanner;

pub use build_tool_runner::{BuildToolOutput, BuildToolRunner};
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use tree_corpus_reader::{CorpusError, TreeCorpus, TreeCorpusReader};
pub use tree_sink::TreeSink;
pub use workspace_scanner::WorkspaceScanner;
