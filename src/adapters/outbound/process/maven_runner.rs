use crate::ports::outbound::{BuildToolOutput, BuildToolRunner};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use std::process::Command;

/// MavenRunner adapter for invoking `mvn dependency:tree`
///
/// This adapter implements the BuildToolRunner port by shelling out to the
/// Maven executable. The tree text is routed through `-DoutputFile` into a
/// temporary file and read back, because Maven interleaves the tree with
/// build log lines on stdout. The invocation is blocking; the batch waits
/// for the exit status before moving on.
pub struct MavenRunner {
    command: String,
}

impl MavenRunner {
    /// # Arguments
    /// * `command` - The Maven executable to invoke (usually `mvn`)
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl BuildToolRunner for MavenRunner {
    fn run_dependency_tree(&self, project_dir: &Path, includes: &str) -> Result<BuildToolOutput> {
        let scratch = tempfile::tempdir().context("Failed to create scratch directory")?;
        let tree_file = scratch.path().join("dependency-tree.txt");

        let output = Command::new(&self.command)
            .arg("-B")
            .arg("dependency:tree")
            .arg(format!("-DoutputFile={}", tree_file.display()))
            .arg(format!("-Dincludes={}", includes))
            .current_dir(project_dir)
            .output()
            .with_context(|| {
                format!(
                    "Failed to launch build tool '{}' in {}",
                    self.command,
                    project_dir.display()
                )
            })?;

        let success = output.status.success();
        let tree_text = if success {
            fs::read_to_string(&tree_file).unwrap_or_default()
        } else {
            String::new()
        };

        // Maven reports most failures on stdout; fall back to it when the
        // error stream is empty so the error record is never blank.
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let stderr = if stderr.trim().is_empty() && !success {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr
        };

        Ok(BuildToolOutput {
            success,
            tree_text,
            stderr,
        })
    }
}
