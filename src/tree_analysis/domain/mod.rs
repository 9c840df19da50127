pub mod dependency_index;
pub mod dependency_node;
pub mod error_record;

pub use dependency_index::ProjectDependencyIndex;
pub use dependency_node::{Coordinate, DependencyNode};
pub use error_record::ErrorRecord;
