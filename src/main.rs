use mvn_deptree::adapters::outbound::console::StderrProgressReporter;
use mvn_deptree::adapters::outbound::filesystem::{
    AnalysisLayout, FileSystemCorpusReader, FileSystemScanner, FileSystemWriter, StdoutPresenter,
};
use mvn_deptree::adapters::outbound::process::MavenRunner;
use mvn_deptree::application::dto::{
    AnalyzeRequest, BuildTreesRequest, OutputFormat, VersionsRequest,
};
use mvn_deptree::application::factories::FormatterFactory;
use mvn_deptree::application::use_cases::{
    AnalyzeUsageUseCase, BuildTreesUseCase, CheckVersionsUseCase,
};
use mvn_deptree::cli::{Args, Command};
use mvn_deptree::config::{self, ConfigFile};
use mvn_deptree::ports::outbound::OutputPresenter;
use mvn_deptree::shared::error::{DeptreeError, ExitCode};
use mvn_deptree::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    match args.command {
        Command::Build {
            repos,
            analysis_dir,
            includes,
            maven,
        } => run_build(repos, analysis_dir, includes, maven, &config),
        Command::Analyze {
            json_dir,
            recursive,
            format,
            output,
        } => run_analyze(json_dir, recursive, format, output, &config),
        Command::Versions {
            group_id,
            artifact_id,
            target,
            json_dir,
            format,
            output,
        } => run_versions(group_id, artifact_id, target, json_dir, format, output, &config),
    }
}

fn run_build(
    repos: Option<PathBuf>,
    analysis_dir: Option<PathBuf>,
    includes: Option<String>,
    maven: Option<String>,
    config: &ConfigFile,
) -> Result<()> {
    let settings = config::resolve_build(repos, analysis_dir, includes, maven, config)?;
    validate_repos_dir(&settings.repos_dir)?;

    let layout = AnalysisLayout::prepare(&settings.analysis_dir, &settings.includes)?;
    eprintln!("📁 Writing trees under: {}", layout.json_dir().display());

    let use_case = BuildTreesUseCase::new(
        MavenRunner::new(settings.maven_command),
        FileSystemScanner::new(),
        layout,
        StderrProgressReporter::new(),
    );

    let request = BuildTreesRequest::new(settings.repos_dir, settings.includes);
    use_case.execute(request)?;
    Ok(())
}

fn run_analyze(
    json_dir: Option<PathBuf>,
    recursive: bool,
    format: OutputFormat,
    output: Option<String>,
    config: &ConfigFile,
) -> Result<()> {
    let json_dir = config::resolve_json_dir(json_dir, config)?;

    let use_case =
        AnalyzeUsageUseCase::new(FileSystemCorpusReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(AnalyzeRequest::new(json_dir, recursive))?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let content = formatter.format_usage(&response.rows)?;

    let report_path = config::resolve_report_path(output, config, "dependency_analysis", format);
    make_presenter(report_path).present(&content)
}

#[allow(clippy::too_many_arguments)]
fn run_versions(
    group_id: String,
    artifact_id: String,
    target: String,
    json_dir: Option<PathBuf>,
    format: OutputFormat,
    output: Option<String>,
    config: &ConfigFile,
) -> Result<()> {
    let json_dir = config::resolve_json_dir(json_dir, config)?;

    let use_case =
        CheckVersionsUseCase::new(FileSystemCorpusReader::new(), StderrProgressReporter::new());
    let request = VersionsRequest::new(json_dir, group_id, artifact_id.clone(), target);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let content = formatter.format_versions(&artifact_id, &response.rows)?;

    let prefix = format!("{}_versions", artifact_id);
    let report_path = config::resolve_report_path(output, config, &prefix, format);
    make_presenter(report_path).present(&content)
}

fn make_presenter(report_path: Option<PathBuf>) -> Box<dyn OutputPresenter> {
    match report_path {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    }
}

fn validate_repos_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DeptreeError::InvalidReposDir {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DeptreeError::InvalidReposDir {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
