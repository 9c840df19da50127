use crate::shared::error::DeptreeError;
use crate::shared::Result;
use crate::tree_analysis::domain::DependencyNode;
use semver::Version;

/// VersionExtractor service for per-project version lookups.
///
/// Searches a dependency tree for one specific `groupId:artifactId` and
/// classifies the resolved version against a target using semantic-version
/// ordering.
pub struct VersionExtractor;

impl VersionExtractor {
    /// Finds the resolved version of an artifact in a tree.
    ///
    /// The whole tree is searched in traversal order and the last match
    /// with a non-empty version wins, even when a shallower match was seen
    /// earlier. This deliberately does not implement Maven's nearest-wins
    /// resolution; the reported version is the deepest/latest occurrence.
    pub fn find_version(
        tree: &DependencyNode,
        group_id: &str,
        artifact_id: &str,
    ) -> Option<String> {
        let mut found = None;
        Self::walk(tree, group_id, artifact_id, &mut found);
        found
    }

    fn walk(
        node: &DependencyNode,
        group_id: &str,
        artifact_id: &str,
        found: &mut Option<String>,
    ) {
        if node.group_id() == Some(group_id) && node.artifact_id() == Some(artifact_id) {
            if let Some(version) = node.version() {
                if !version.is_empty() {
                    *found = Some(version.to_string());
                }
            }
        }
        for child in &node.dependencies {
            Self::walk(child, group_id, artifact_id, found);
        }
    }

    /// Compares a found version against a target: `found >= target`.
    ///
    /// Any failure to parse `found` yields `false` rather than an error;
    /// projects on unparseable versions are reported as not up to date.
    pub fn is_up_to_date(found: &str, target: &Version) -> bool {
        match Self::parse_lenient(found) {
            Ok(version) => version >= *target,
            Err(_) => false,
        }
    }

    /// Parses a version string that is required to be valid, for the
    /// caller-supplied comparison target.
    pub fn parse_target(target: &str) -> Result<Version> {
        Self::parse_lenient(target).map_err(|details| {
            DeptreeError::InvalidTargetVersion {
                version: target.to_string(),
                details,
            }
            .into()
        })
    }

    /// Lenient semver parse: tolerates a leading `v` and versions with
    /// fewer than three numeric components (`1.4` reads as `1.4.0`).
    fn parse_lenient(version: &str) -> std::result::Result<Version, String> {
        let trimmed = version.trim().trim_start_matches('v');
        if let Ok(parsed) = Version::parse(trimmed) {
            return Ok(parsed);
        }
        let dots = trimmed.split('.').count();
        let padded = match dots {
            1 => format!("{}.0.0", trimmed),
            2 => format!("{}.0", trimmed),
            _ => trimmed.to_string(),
        };
        Version::parse(&padded).map_err(|e| e.to_string())
    }
}
