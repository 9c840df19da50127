use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Extract and analyze Maven dependency trees across repositories
#[derive(Parser, Debug)]
#[command(name = "mvn-deptree")]
#[command(version = "0.3.0")]
#[command(about = "Extract and analyze Maven dependency trees across repositories", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./mvn-deptree.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the build tool over every repository and persist JSON dependency trees
    Build {
        /// Directory whose immediate children are candidate repositories
        #[arg(short, long)]
        repos: Option<PathBuf>,

        /// Root directory for analysis outputs
        #[arg(short, long)]
        analysis_dir: Option<PathBuf>,

        /// Comma-separated group-id prefixes passed as -Dincludes
        #[arg(short, long)]
        includes: Option<String>,

        /// Maven executable to invoke (defaults to mvn)
        #[arg(short, long)]
        maven: Option<String>,
    },

    /// Aggregate persisted trees into a cross-project artifact usage report
    Analyze {
        /// Directory containing the per-project *.json tree files
        #[arg(short, long)]
        json_dir: Option<PathBuf>,

        /// Count transitive dependents instead of direct ones
        #[arg(short, long)]
        recursive: bool,

        /// Output format: csv or markdown
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Output file path ('-' writes to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report which projects resolve an artifact at or above a target version
    Versions {
        /// Group id of the artifact to look up
        #[arg(short, long)]
        group_id: String,

        /// Artifact id to look up
        #[arg(short, long)]
        artifact_id: String,

        /// Target version each resolved version is compared against
        #[arg(short, long)]
        target: String,

        /// Directory containing the per-project *.json tree files
        #[arg(short, long)]
        json_dir: Option<PathBuf>,

        /// Output format: csv or markdown
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Output file path ('-' writes to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
