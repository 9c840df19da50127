//! mvn-deptree - Maven dependency tree extraction and analysis
//!
//! This library batch-runs `mvn dependency:tree` across a directory of
//! repositories, persists each tree as JSON, and aggregates the persisted
//! trees into cross-project usage and version-compliance reports. It follows
//! hexagonal architecture: the core never touches the file system or spawns
//! processes directly.
//!
//! # Architecture
//!
//! - **Domain Layer** (`tree_analysis`): Tree model, index and pure services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_deptree::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let corpus_reader = FileSystemCorpusReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = AnalyzeUsageUseCase::new(corpus_reader, progress_reporter);
//! let request = AnalyzeRequest::new(PathBuf::from("analysis/com_acme/json"), false);
//! let response = use_case.execute(request)?;
//!
//! let formatter = CsvFormatter::new();
//! let report = formatter.format_usage(&response.rows)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tree_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        AnalysisLayout, FileSystemCorpusReader, FileSystemScanner, FileSystemWriter,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::MavenRunner;
    pub use crate::application::dto::{
        AnalyzeRequest, AnalyzeResponse, BuildTreesRequest, BuildTreesSummary, OutputFormat,
        VersionsRequest, VersionsResponse,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{UsageReportBuilder, UsageReportRow, VersionReportRow};
    pub use crate::application::use_cases::{
        AnalyzeUsageUseCase, BuildTreesUseCase, CheckVersionsUseCase,
    };
    pub use crate::ports::outbound::{
        BuildToolOutput, BuildToolRunner, CorpusError, OutputPresenter, ProgressReporter,
        ReportFormatter, TreeCorpus, TreeCorpusReader, TreeSink, WorkspaceScanner,
    };
    pub use crate::shared::Result;
    pub use crate::tree_analysis::domain::{Coordinate, DependencyNode, ProjectDependencyIndex};
    pub use crate::tree_analysis::services::{DependencyAggregator, TreeParser, VersionExtractor};
}
