pub mod file_writer;
pub mod tree_corpus;
pub mod workspace;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use tree_corpus::FileSystemCorpusReader;
pub use workspace::{AnalysisLayout, FileSystemScanner};
