use crate::application::dto::{BuildTreesRequest, BuildTreesSummary};
use crate::ports::outbound::{BuildToolRunner, ProgressReporter, TreeSink, WorkspaceScanner};
use crate::shared::Result;
use crate::tree_analysis::domain::ErrorRecord;
use crate::tree_analysis::services::TreeParser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// BuildTreesUseCase - the batch driver over a directory of repositories
///
/// For every candidate project it locates the build descriptor, invokes the
/// build tool for the dependency tree, parses the captured text and persists
/// the result. One project is fully handled before the next begins, and no
/// single project's failure aborts the batch: failures become error records
/// in the returned summary (and on disk via the sink).
///
/// # Type Parameters
/// * `BR` - BuildToolRunner implementation
/// * `WS` - WorkspaceScanner implementation
/// * `TS` - TreeSink implementation (already prepared with clean output dirs)
/// * `PR` - ProgressReporter implementation
pub struct BuildTreesUseCase<BR, WS, TS, PR> {
    build_tool_runner: BR,
    workspace_scanner: WS,
    tree_sink: TS,
    progress_reporter: PR,
}

impl<BR, WS, TS, PR> BuildTreesUseCase<BR, WS, TS, PR>
where
    BR: BuildToolRunner,
    WS: WorkspaceScanner,
    TS: TreeSink,
    PR: ProgressReporter,
{
    /// Creates a new BuildTreesUseCase with injected dependencies
    pub fn new(build_tool_runner: BR, workspace_scanner: WS, tree_sink: TS, progress_reporter: PR) -> Self {
        Self {
            build_tool_runner,
            workspace_scanner,
            tree_sink,
            progress_reporter,
        }
    }

    /// Executes the batch run.
    ///
    /// # Returns
    /// The summary accumulator with every project's terminal state
    /// (succeeded / error record / parse-empty). The accumulator is
    /// threaded through explicitly; no state survives between calls.
    ///
    /// # Errors
    /// Returns an error only for run-level failures: the repositories
    /// directory cannot be enumerated, an output write fails, or the build
    /// tool cannot be launched at all.
    pub fn execute(&self, request: BuildTreesRequest) -> Result<BuildTreesSummary> {
        let projects = self.workspace_scanner.list_projects(&request.repos_dir)?;
        self.progress_reporter.report(&format!(
            "🔍 Found {} candidate project(s) in {}",
            projects.len(),
            request.repos_dir.display()
        ));

        let progress_bar = ProgressBar::new(projects.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
                .expect("Failed to set progress bar template")
                .progress_chars("=>-"),
        );

        let mut summary = BuildTreesSummary::default();
        for project_dir in projects {
            let project_name = Self::dir_name(&project_dir);
            progress_bar.set_message(project_name.clone());

            self.process_project(&project_dir, &request.includes, &mut summary)?;
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        self.progress_reporter.report_completion(&format!(
            "✅ Batch complete: {} tree(s) written, {} error record(s), {} empty parse(s)",
            summary.succeeded.len(),
            summary.error_records.len(),
            summary.parse_empty.len()
        ));

        Ok(summary)
    }

    /// Handles one candidate project directory: descriptor discovery, build
    /// tool invocation, parse, persist. Every outcome is terminal for the
    /// project; the batch always continues.
    fn process_project(
        &self,
        project_dir: &Path,
        includes: &str,
        summary: &mut BuildTreesSummary,
    ) -> Result<()> {
        let project_name = Self::dir_name(project_dir);
        let build_dirs = self.workspace_scanner.discover_build_dirs(project_dir)?;

        if build_dirs.is_empty() {
            let record = ErrorRecord::new(
                project_name.clone(),
                format!("pom.xml not found in {}", project_dir.display()),
            );
            self.tree_sink.write_error(&record)?;
            self.progress_reporter
                .report_error(&format!("⚠️  {}: no pom.xml found, skipping", project_name));
            summary.error_records.push(record);
            return Ok(());
        }

        for build_dir in build_dirs {
            self.process_module(&build_dir, includes, summary)?;
        }
        Ok(())
    }

    /// Runs the build tool in one descriptor-bearing directory and persists
    /// the outcome under that directory's name.
    fn process_module(
        &self,
        build_dir: &Path,
        includes: &str,
        summary: &mut BuildTreesSummary,
    ) -> Result<()> {
        let module_name = Self::dir_name(build_dir);
        let output = self
            .build_tool_runner
            .run_dependency_tree(build_dir, includes)?;

        if !output.success {
            let record = ErrorRecord::new(module_name.clone(), output.stderr);
            self.tree_sink.write_error(&record)?;
            self.progress_reporter
                .report_error(&format!("❌ {}: build tool failed", module_name));
            summary.error_records.push(record);
            return Ok(());
        }

        match TreeParser::parse(output.tree_text.lines()) {
            Some(root) => {
                self.tree_sink.write_tree(&module_name, &root)?;
                summary.succeeded.push(module_name);
            }
            None => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  {}: dependency tree was empty, nothing written",
                    module_name
                ));
                summary.parse_empty.push(module_name);
            }
        }
        Ok(())
    }

    fn dir_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
