use crate::shared::Result;
use crate::tree_analysis::domain::{DependencyNode, ErrorRecord};
use std::path::PathBuf;

/// TreeSink port for persisting per-project batch results
///
/// This port abstracts where parsed trees and error records land. The
/// concrete adapter is expected to be prepared with clean-slate semantics
/// before a run starts; during the run each project writes to a distinct
/// file, so writes never contend.
pub trait TreeSink {
    /// Persists a parsed tree as `<project>.json`, returning the path.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    fn write_tree(&self, project: &str, root: &DependencyNode) -> Result<PathBuf>;

    /// Persists a failure as `<project>.error`, returning the path.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    fn write_error(&self, record: &ErrorRecord) -> Result<PathBuf>;
}
