//! follow-graph-core: In-memory follow graph analysis.
//!
//! A pure Rust library that holds a directed follow graph built from user
//! records and answers two questions about it: which users follow each other,
//! and which users sit exactly N follow-hops away from a given user.
//! No I/O or third-party dependencies; this crate compiles standalone.

mod graph;
mod mutual;
mod traversal;

pub use graph::{Graph, NodeId, UserRecord};
pub use mutual::{find_mutual_pairs, Pair};
pub use traversal::{bfs_levels, find_at_level, LevelMap};
