pub mod dependency_aggregator;
pub mod tree_parser;
pub mod version_extractor;

pub use dependency_aggregator::DependencyAggregator;
pub use tree_parser::TreeParser;
pub use version_extractor::VersionExtractor;
