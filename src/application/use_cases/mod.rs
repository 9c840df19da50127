pub mod analyze_usage;
pub mod build_trees;
pub mod check_versions;

pub use analyze_usage::AnalyzeUsageUseCase;
pub use build_trees::BuildTreesUseCase;
pub use check_versions::CheckVersionsUseCase;
