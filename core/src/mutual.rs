use std::collections::HashSet;

use crate::graph::{Graph, NodeId};

/// Unordered pair of distinct users, stored canonically as (min, max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair(NodeId, NodeId);

impl Pair {
    /// Canonicalize `a` and `b` into (min, max) order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn first(&self) -> NodeId {
        self.0
    }

    pub fn second(&self) -> NodeId {
        self.1
    }

    pub fn to_array(self) -> [NodeId; 2] {
        [self.0, self.1]
    }
}

/// Find every pair of users that follow each other.
///
/// A pair qualifies when `u` follows `v`, `v` has its own record, and `v`
/// follows `u`. Self-follows never form a pair. Each pair appears once no
/// matter how many duplicate edges justify it; output is sorted ascending by
/// the smaller id (then the larger, for a stable order).
pub fn find_mutual_pairs(graph: &Graph) -> Vec<Pair> {
    // Edge set for O(1) reciprocity checks instead of scanning follow lists.
    let edges: HashSet<(NodeId, NodeId)> = graph
        .nodes_iter()
        .flat_map(|(u, follows)| follows.iter().map(move |&v| (u, v)))
        .collect();

    let mut seen: HashSet<Pair> = HashSet::new();
    let mut pairs = Vec::new();

    for (u, follows) in graph.nodes_iter() {
        for &v in follows {
            if u == v || !graph.contains(v) || !edges.contains(&(v, u)) {
                continue;
            }
            let pair = Pair::new(u, v);
            if seen.insert(pair) {
                pairs.push(pair);
            }
        }
    }

    pairs.sort_unstable();
    pairs
}
