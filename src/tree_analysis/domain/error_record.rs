/// A per-project failure captured during a batch run.
///
/// One record is written per project whose build-tool invocation or pom
/// discovery failed. Records are persisted as `<project>.error` files next
/// to the JSON output and never block other projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub project: String,
    pub message: String,
}

impl ErrorRecord {
    pub fn new(project: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            message: message.into(),
        }
    }

    /// File name the record is persisted under.
    pub fn file_name(&self) -> String {
        format!("{}.error", self.project)
    }
}
