use crate::ports::outbound::{TreeSink, WorkspaceScanner};
use crate::shared::error::DeptreeError;
use crate::shared::Result;
use crate::tree_analysis::domain::{DependencyNode, ErrorRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemScanner adapter for enumerating candidate Maven projects
///
/// This adapter implements the WorkspaceScanner port over the local file
/// system. Hidden directories (leading dot) are never considered.
pub struct FileSystemScanner;

impl FileSystemScanner {
    pub fn new() -> Self {
        Self
    }

    fn has_pom(dir: &Path) -> bool {
        dir.join("pom.xml").is_file()
    }
}

impl Default for FileSystemScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceScanner for FileSystemScanner {
    fn list_projects(&self, repos_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(repos_dir).map_err(|e| DeptreeError::InvalidReposDir {
            path: repos_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut projects: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DeptreeError::InvalidReposDir {
                path: repos_dir.to_path_buf(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if path.is_dir() && !hidden {
                projects.push(path);
            }
        }
        projects.sort();
        Ok(projects)
    }

    fn discover_build_dirs(&self, project_dir: &Path) -> Result<Vec<PathBuf>> {
        if Self::has_pom(project_dir) {
            return Ok(vec![project_dir.to_path_buf()]);
        }

        // One level deep only; a repo with modules nested further is the
        // operator's problem to restructure.
        let entries = fs::read_dir(project_dir).map_err(|e| DeptreeError::FileReadError {
            path: project_dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut matches: Vec<PathBuf> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if path.is_dir() && !hidden && Self::has_pom(&path) {
                matches.push(path);
            }
        }
        matches.sort();
        Ok(matches)
    }
}

/// AnalysisLayout adapter for the per-run output directory tree
///
/// Implements the TreeSink port. `prepare` applies clean-slate semantics:
/// any previous output tree for the same includes filter is removed before
/// the `json/` and `error/` directories are recreated. After that, every
/// write during a run targets a distinct file name.
pub struct AnalysisLayout {
    json_dir: PathBuf,
    error_dir: PathBuf,
}

impl AnalysisLayout {
    /// Removes and recreates the output tree for this includes filter.
    ///
    /// The layout is `<analysis_dir>/<includes-key>/{json,error}` where the
    /// includes key replaces `,` with `-` and `.` with `_`.
    pub fn prepare(analysis_dir: &Path, includes: &str) -> Result<Self> {
        let base = analysis_dir.join(Self::includes_key(includes));
        if base.exists() {
            fs::remove_dir_all(&base).map_err(|e| DeptreeError::FileWriteError {
                path: base.clone(),
                details: e.to_string(),
            })?;
        }
        let json_dir = base.join("json");
        let error_dir = base.join("error");
        for dir in [&json_dir, &error_dir] {
            fs::create_dir_all(dir).map_err(|e| DeptreeError::FileWriteError {
                path: dir.clone(),
                details: e.to_string(),
            })?;
        }
        Ok(Self {
            json_dir,
            error_dir,
        })
    }

    /// Opens an existing layout without resetting it (used by the read-side
    /// commands to find the json directory for an includes filter).
    pub fn locate(analysis_dir: &Path, includes: &str) -> Self {
        let base = analysis_dir.join(Self::includes_key(includes));
        Self {
            json_dir: base.join("json"),
            error_dir: base.join("error"),
        }
    }

    /// Directory key derived from the includes filter, e.g.
    /// `com.acme,com.acme.internal` -> `com_acme-com_acme_internal`.
    pub fn includes_key(includes: &str) -> String {
        includes.replace(',', "-").replace('.', "_")
    }

    pub fn json_dir(&self) -> &Path {
        &self.json_dir
    }

    pub fn error_dir(&self) -> &Path {
        &self.error_dir
    }
}

impl TreeSink for AnalysisLayout {
    fn write_tree(&self, project: &str, root: &DependencyNode) -> Result<PathBuf> {
        let path = self.json_dir.join(format!("{}.json", project));
        let json =
            serde_json::to_string_pretty(root).map_err(|e| DeptreeError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;
        fs::write(&path, json).map_err(|e| DeptreeError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }

    fn write_error(&self, record: &ErrorRecord) -> Result<PathBuf> {
        let path = self.error_dir.join(record.file_name());
        fs::write(&path, &record.message).map_err(|e| DeptreeError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }
}
