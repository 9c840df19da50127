//! Core dependency-tree analysis: domain models and pure services.
//!
//! This module has no I/O dependencies. It owns the tree node model, the
//! cross-project dependency index, and the parsing/aggregation/version
//! services that operate on them.

pub mod domain;
pub mod services;
