use serde::{Deserialize, Serialize};

/// The coordinate of a single dependency line.
///
/// Maven prints `groupId:artifactId:type:version[:scope]`. Lines that do not
/// split into at least four colon-separated parts are kept verbatim as `Raw`
/// so a malformed line never aborts a whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Structured {
        #[serde(rename = "groupId")]
        group_id: String,
        #[serde(rename = "artifactId")]
        artifact_id: String,
        #[serde(rename = "type")]
        packaging: String,
        version: String,
    },
    Raw {
        raw: String,
    },
}

/// One node in a parsed Maven dependency tree.
///
/// The JSON schema is recursive:
/// `{groupId, artifactId, type, version, dependencies: [...]}` for parsed
/// lines, `{raw, dependencies: [...]}` for fallback nodes. Child order is
/// preserved from the source text (Maven's resolution order). Nodes are
/// never mutated after the tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn structured(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        packaging: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            coordinate: Coordinate::Structured {
                group_id: group_id.into(),
                artifact_id: artifact_id.into(),
                packaging: packaging.into(),
                version: version.into(),
            },
            dependencies: Vec::new(),
        }
    }

    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            coordinate: Coordinate::Raw { raw: raw.into() },
            dependencies: Vec::new(),
        }
    }

    /// Group id, if the node was parsed into structured coordinates.
    pub fn group_id(&self) -> Option<&str> {
        match &self.coordinate {
            Coordinate::Structured { group_id, .. } => Some(group_id),
            Coordinate::Raw { .. } => None,
        }
    }

    /// Artifact id, if the node was parsed into structured coordinates.
    pub fn artifact_id(&self) -> Option<&str> {
        match &self.coordinate {
            Coordinate::Structured { artifact_id, .. } => Some(artifact_id),
            Coordinate::Raw { .. } => None,
        }
    }

    /// Resolved version, if the node was parsed into structured coordinates.
    pub fn version(&self) -> Option<&str> {
        match &self.coordinate {
            Coordinate::Structured { version, .. } => Some(version),
            Coordinate::Raw { .. } => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self.coordinate, Coordinate::Structured { .. })
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(DependencyNode::node_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_accessors() {
        let node = DependencyNode::structured("com.acme", "lib-a", "jar", "2.0");
        assert_eq!(node.group_id(), Some("com.acme"));
        assert_eq!(node.artifact_id(), Some("lib-a"));
        assert_eq!(node.version(), Some("2.0"));
        assert!(node.is_structured());
    }

    #[test]
    fn test_raw_accessors() {
        let node = DependencyNode::raw("garbled line");
        assert_eq!(node.group_id(), None);
        assert_eq!(node.artifact_id(), None);
        assert_eq!(node.version(), None);
        assert!(!node.is_structured());
    }

    #[test]
    fn test_node_count() {
        let mut root = DependencyNode::structured("com.acme", "root", "jar", "1.0");
        let mut lib_a = DependencyNode::structured("com.acme", "lib-a", "jar", "2.0");
        lib_a
            .dependencies
            .push(DependencyNode::structured("com.acme", "lib-b", "jar", "3.0"));
        root.dependencies.push(lib_a);
        root.dependencies
            .push(DependencyNode::structured("com.acme", "lib-c", "jar", "1.5"));
        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn test_serialize_structured_node() {
        let node = DependencyNode::structured("com.acme", "lib-a", "jar", "2.0");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["groupId"], "com.acme");
        assert_eq!(json["artifactId"], "lib-a");
        assert_eq!(json["type"], "jar");
        assert_eq!(json["version"], "2.0");
        assert!(json["dependencies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_serialize_raw_node() {
        let node = DependencyNode::raw("strange");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["raw"], "strange");
        assert!(json.get("groupId").is_none());
    }

    #[test]
    fn test_deserialize_round_trip_preserves_child_order() {
        let mut root = DependencyNode::structured("com.acme", "root", "jar", "1.0");
        root.dependencies
            .push(DependencyNode::structured("com.acme", "lib-a", "jar", "2.0"));
        root.dependencies.push(DependencyNode::raw("odd line"));
        root.dependencies
            .push(DependencyNode::structured("com.acme", "lib-c", "jar", "1.5"));

        let json = serde_json::to_string_pretty(&root).unwrap();
        let back: DependencyNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_deserialize_missing_dependencies_field() {
        let back: DependencyNode = serde_json::from_str(
            r#"{"groupId":"com.acme","artifactId":"h2","type":"jar","version":"2.2.0"}"#,
        )
        .unwrap();
        assert_eq!(back.artifact_id(), Some("h2"));
        assert!(back.dependencies.is_empty());
    }
}
