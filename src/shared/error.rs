use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// configuration problems and genuine application failures. Per-project
/// failures during a batch run never change the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the batch completed (possibly with per-project error records)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing configuration, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency-tree extraction and analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DeptreeError {
    #[error("Invalid repositories directory: {path}\nReason: {reason}\n\n💡 Hint: Pass --repos or set repos_dir in mvn-deptree.config.yml")]
    InvalidReposDir { path: PathBuf, reason: String },

    #[error("Missing required configuration: {what}\n\n💡 Hint: {hint}")]
    MissingConfiguration { what: String, hint: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid target version '{version}': {details}\n\n💡 Hint: Pass a semantic version such as 2.1.214")]
    InvalidTargetVersion { version: String, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_repos_dir_display() {
        let error = DeptreeError::InvalidReposDir {
            path: PathBuf::from("/missing/repos"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid repositories directory"));
        assert!(display.contains("/missing/repos"));
        assert!(display.contains("Directory does not exist"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_configuration_display() {
        let error = DeptreeError::MissingConfiguration {
            what: "includes filter".to_string(),
            hint: "Pass --includes".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing required configuration"));
        assert!(display.contains("includes filter"));
        assert!(display.contains("Pass --includes"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DeptreeError::FileWriteError {
            path: PathBuf::from("/out/report.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/out/report.csv"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_target_version_display() {
        let error = DeptreeError::InvalidTargetVersion {
            version: "not-a-version".to_string(),
            details: "unexpected character".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("not-a-version"));
        assert!(display.contains("unexpected character"));
    }
}
