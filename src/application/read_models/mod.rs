pub mod usage_report;
pub mod version_report;

pub use usage_report::{UsageReportBuilder, UsageReportRow};
pub use version_report::VersionReportRow;
