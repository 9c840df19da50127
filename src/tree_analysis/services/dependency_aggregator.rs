use crate::tree_analysis::domain::{DependencyNode, ProjectDependencyIndex};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// DependencyAggregator service for cross-project usage analysis.
///
/// This service contains pure aggregation logic with no I/O dependencies.
/// It flattens a corpus of per-project dependency trees into a
/// [`ProjectDependencyIndex`] and resolves transitive dependent sets over
/// the resulting usage graph.
pub struct DependencyAggregator;

impl DependencyAggregator {
    /// Builds the index from named per-project trees.
    ///
    /// Only each root's dependency subtrees are indexed; the root artifact
    /// itself (the project's own coordinates) never counts as a dependency.
    pub fn build_index(trees: &[(String, DependencyNode)]) -> ProjectDependencyIndex {
        let mut index = ProjectDependencyIndex::new();
        for (project, root) in trees {
            for dependency in &root.dependencies {
                index.record(project, dependency);
            }
        }
        index
    }

    /// Computes the transitive dependent set for every artifact in the index.
    ///
    /// A project that depends on artifact X may itself be published as an
    /// artifact that other projects depend on; the traversal chains through
    /// `artifact_dependents` treating dependent project names as artifact
    /// ids. Breadth-first with a visited set, so it terminates even when
    /// the graph interpreted this way contains cycles.
    pub fn recursive_dependents(
        index: &ProjectDependencyIndex,
    ) -> HashMap<String, BTreeSet<String>> {
        index
            .artifacts()
            .map(|artifact| (artifact.to_string(), Self::collect_dependents(index, artifact)))
            .collect()
    }

    fn collect_dependents(index: &ProjectDependencyIndex, artifact: &str) -> BTreeSet<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut dependents: BTreeSet<String> = BTreeSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(artifact.to_string());

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(direct) = index.dependents_of(&current) {
                for dependent in direct {
                    dependents.insert(dependent.clone());
                    queue.push_back(dependent.clone());
                }
            }
        }

        dependents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(project_artifact: &str, deps: &[(&str, &str)]) -> (String, DependencyNode) {
        let mut root = DependencyNode::structured("com.acme", project_artifact, "jar", "1.0");
        for (artifact, version) in deps {
            root.dependencies
                .push(DependencyNode::structured("com.acme", *artifact, "jar", *version));
        }
        (project_artifact.to_string(), root)
    }

    #[test]
    fn test_build_index_excludes_root_artifact() {
        let trees = vec![tree("proj-a", &[("lib-x", "1.0")])];
        let index = DependencyAggregator::build_index(&trees);

        assert!(index.dependents_of("lib-x").is_some());
        // proj-a is a project, not an indexed dependency.
        assert!(index.dependents_of("proj-a").is_none());
    }

    #[test]
    fn test_build_index_is_idempotent() {
        let trees = vec![
            tree("proj-a", &[("lib-x", "1.0"), ("lib-y", "2.0")]),
            tree("proj-b", &[("lib-x", "1.1")]),
        ];
        let first = DependencyAggregator::build_index(&trees);
        let second = DependencyAggregator::build_index(&trees);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recursive_dependents_superset_of_direct() {
        // proj-b depends on lib-a; proj-c depends on proj-b (as an artifact).
        let trees = vec![
            tree("proj-b", &[("lib-a", "1.0")]),
            tree("proj-c", &[("proj-b", "1.0")]),
        ];
        let index = DependencyAggregator::build_index(&trees);
        let recursive = DependencyAggregator::recursive_dependents(&index);

        for artifact in index.artifacts() {
            let direct = index.dependents_of(artifact).unwrap();
            let transitive = &recursive[artifact];
            assert!(
                transitive.is_superset(direct),
                "recursive dependents of {} must include all direct dependents",
                artifact
            );
        }

        // lib-a is reached by proj-b directly and proj-c through proj-b.
        let lib_a = &recursive["lib-a"];
        assert!(lib_a.contains("proj-b"));
        assert!(lib_a.contains("proj-c"));
    }

    #[test]
    fn test_recursive_dependents_terminates_on_cycle() {
        // proj-a -> proj-b -> proj-a, interpreted as artifacts.
        let trees = vec![
            tree("proj-a", &[("proj-b", "1.0")]),
            tree("proj-b", &[("proj-a", "1.0")]),
        ];
        let index = DependencyAggregator::build_index(&trees);
        let recursive = DependencyAggregator::recursive_dependents(&index);

        let a = &recursive["proj-a"];
        assert!(a.contains("proj-a"));
        assert!(a.contains("proj-b"));
        let b = &recursive["proj-b"];
        assert!(b.contains("proj-a"));
        assert!(b.contains("proj-b"));
    }

    #[test]
    fn test_build_index_counts_nested_dependencies() {
        let mut lib_x = DependencyNode::structured("com.acme", "lib-x", "jar", "1.0");
        lib_x
            .dependencies
            .push(DependencyNode::structured("com.acme", "lib-deep", "jar", "0.9"));
        let mut root = DependencyNode::structured("com.acme", "proj-a", "jar", "1.0");
        root.dependencies.push(lib_x);

        let trees = vec![("proj-a".to_string(), root)];
        let index = DependencyAggregator::build_index(&trees);

        assert!(index.dependents_of("lib-deep").unwrap().contains("proj-a"));
    }

    #[test]
    fn test_empty_corpus_yields_empty_index() {
        let index = DependencyAggregator::build_index(&[]);
        assert!(index.is_empty());
        assert!(DependencyAggregator::recursive_dependents(&index).is_empty());
    }
}
