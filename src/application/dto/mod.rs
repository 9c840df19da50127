pub mod analyze_request;
pub mod build_request;
pub mod output_format;
pub mod versions_request;

pub use analyze_request::{AnalyzeRequest, AnalyzeResponse};
pub use build_request::{BuildTreesRequest, BuildTreesSummary};
pub use output_format::OutputFormat;
pub use versions_request::{VersionsRequest, VersionsResponse};
