/// Mock implementations for testing
mod mock_build_tool_runner;
mod mock_corpus_reader;
mod mock_progress_reporter;
mod mock_tree_sink;

pub use mock_build_tool_runner::MockBuildToolRunner;
pub use mock_corpus_reader::MockCorpusReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_tree_sink::MockTreeSink;
