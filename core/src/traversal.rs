use std::collections::{HashMap, VecDeque};

use crate::graph::{Graph, NodeId};

/// BFS distances from a source node. Nodes absent from the map are unreachable.
#[derive(Debug, Clone)]
pub struct LevelMap {
    source: NodeId,
    levels: HashMap<NodeId, u32>,
}

impl LevelMap {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance of `id` from the source, or None if it was never discovered.
    pub fn distance(&self, id: NodeId) -> Option<u32> {
        self.levels.get(&id).copied()
    }

    /// Number of discovered nodes, source included.
    pub fn nodes_visited(&self) -> usize {
        self.levels.len()
    }

    /// Greatest distance reached by the traversal.
    pub fn depth(&self) -> u32 {
        self.levels.values().copied().max().unwrap_or(0)
    }

    /// Discovered nodes at exactly `level`, sorted ascending by id.
    pub fn at_level(&self, level: u32) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self
            .levels
            .iter()
            .filter(|(_, &d)| d == level)
            .map(|(&id, _)| id)
            .collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.levels.iter().map(|(&id, &d)| (id, d))
    }
}

/// Breadth-first traversal over outgoing follows from `source`.
///
/// Each node is discovered once, at its minimum distance. The traversal runs
/// until the queue is exhausted. `source` is always discovered at distance 0,
/// even when it has no record of its own; dangling follow targets are
/// discovered but contribute no onward edges.
pub fn bfs_levels(graph: &Graph, source: NodeId) -> LevelMap {
    let mut levels: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    levels.insert(source, 0);
    queue.push_back((source, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &target in graph.follows_of(current) {
            if !levels.contains_key(&target) {
                levels.insert(target, depth + 1);
                queue.push_back((target, depth + 1));
            }
        }
    }

    LevelMap { source, levels }
}

/// Nodes at exactly `n` follow-hops from `source`, sorted ascending.
///
/// `n == 0` always yields `[source]`.
pub fn find_at_level(graph: &Graph, source: NodeId, n: u32) -> Vec<NodeId> {
    bfs_levels(graph, source).at_level(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UserRecord;

    fn make_chain(n: NodeId) -> Graph {
        Graph::build((0..n).map(|i| {
            let follows = if i + 1 < n { vec![i + 1] } else { vec![] };
            UserRecord::new(i, follows)
        }))
    }

    fn make_cycle(n: NodeId) -> Graph {
        Graph::build((0..n).map(|i| UserRecord::new(i, [(i + 1) % n])))
    }

    fn make_star(center: NodeId, leaves: NodeId) -> Graph {
        let mut users = vec![UserRecord::new(center, (1..=leaves).collect::<Vec<_>>())];
        users.extend((1..=leaves).map(|i| UserRecord::new(i, [])));
        Graph::build(users)
    }

    #[test]
    fn test_example_three_users() {
        let g = Graph::build(vec![
            UserRecord::new(1, [2]),
            UserRecord::new(2, [1, 3]),
            UserRecord::new(3, [2]),
        ]);
        let levels = bfs_levels(&g, 1);
        assert_eq!(levels.distance(1), Some(0));
        assert_eq!(levels.distance(2), Some(1));
        assert_eq!(levels.distance(3), Some(2));
        assert_eq!(find_at_level(&g, 1, 2), vec![3]);
    }

    #[test]
    fn test_chain_levels() {
        let g = make_chain(6);
        for level in 0..6 {
            assert_eq!(find_at_level(&g, 0, level), vec![level as NodeId]);
        }
        assert!(find_at_level(&g, 0, 6).is_empty());
    }

    #[test]
    fn test_level_zero_is_source() {
        let g = make_chain(3);
        assert_eq!(find_at_level(&g, 1, 0), vec![1]);
    }

    #[test]
    fn test_source_not_in_graph() {
        let g = make_chain(3);
        assert_eq!(find_at_level(&g, 999, 0), vec![999]);
        assert!(find_at_level(&g, 999, 1).is_empty());
        assert_eq!(bfs_levels(&g, 999).nodes_visited(), 1);
    }

    #[test]
    fn test_source_without_edges() {
        let g = Graph::build(vec![UserRecord::new(5, [])]);
        assert_eq!(find_at_level(&g, 5, 0), vec![5]);
        assert!(find_at_level(&g, 5, 1).is_empty());
    }

    #[test]
    fn test_empty_graph_level_zero() {
        let g = Graph::new();
        assert_eq!(find_at_level(&g, 0, 0), vec![0]);
    }

    #[test]
    fn test_star_sorted() {
        let g = make_star(0, 50);
        let result = find_at_level(&g, 0, 1);
        assert_eq!(result, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_cycle_no_infinite_loop() {
        let g = make_cycle(5);
        let levels = bfs_levels(&g, 0);
        assert_eq!(levels.nodes_visited(), 5);
        assert_eq!(levels.depth(), 4);
        // Going round the cycle never rediscovers the source at a later level.
        assert!(find_at_level(&g, 0, 5).is_empty());
    }

    #[test]
    fn test_directed_only() {
        let g = make_chain(4);
        // Follows are directed: nothing reachable backwards.
        assert!(find_at_level(&g, 3, 1).is_empty());
        assert_eq!(bfs_levels(&g, 3).distance(0), None);
    }

    #[test]
    fn test_minimum_distance_wins() {
        // 0 → 1 → 2 → 3 and a shortcut 0 → 3
        let g = Graph::build(vec![
            UserRecord::new(0, [1, 3]),
            UserRecord::new(1, [2]),
            UserRecord::new(2, [3]),
            UserRecord::new(3, []),
        ]);
        let levels = bfs_levels(&g, 0);
        assert_eq!(levels.distance(3), Some(1));
        assert_eq!(find_at_level(&g, 0, 1), vec![1, 3]);
        assert_eq!(find_at_level(&g, 0, 2), vec![2]);
        assert!(find_at_level(&g, 0, 3).is_empty());
    }

    #[test]
    fn test_dangling_target_discovered() {
        let g = Graph::build(vec![UserRecord::new(1, [2]), UserRecord::new(2, [42])]);
        assert_eq!(find_at_level(&g, 1, 2), vec![42]);
        assert!(find_at_level(&g, 1, 3).is_empty());
    }

    #[test]
    fn test_parallel_edges_discover_once() {
        let g = Graph::build(vec![UserRecord::new(0, [1, 1, 1]), UserRecord::new(1, [])]);
        let levels = bfs_levels(&g, 0);
        assert_eq!(levels.nodes_visited(), 2);
        assert_eq!(find_at_level(&g, 0, 1), vec![1]);
    }

    #[test]
    fn test_self_loop() {
        let g = Graph::build(vec![UserRecord::new(0, [0, 1]), UserRecord::new(1, [])]);
        let levels = bfs_levels(&g, 0);
        assert_eq!(levels.distance(0), Some(0));
        assert_eq!(find_at_level(&g, 0, 0), vec![0]);
    }

    #[test]
    fn test_levels_match_shortest_path_lengths() {
        // Two-branch graph where the longer branch reaches a node first in
        // insertion order but BFS still records the shorter distance.
        let g = Graph::build(vec![
            UserRecord::new(10, [20, 30]),
            UserRecord::new(20, [21]),
            UserRecord::new(21, [22]),
            UserRecord::new(22, [40]),
            UserRecord::new(30, [40]),
            UserRecord::new(40, []),
            UserRecord::new(50, [10]),
        ]);
        let levels = bfs_levels(&g, 10);
        assert_eq!(levels.distance(40), Some(2));
        assert_eq!(levels.distance(22), Some(3));
        assert_eq!(levels.distance(50), None);
        let mut all: Vec<(NodeId, u32)> = levels.iter().collect();
        all.sort_unstable();
        assert_eq!(
            all,
            vec![(10, 0), (20, 1), (21, 2), (22, 3), (30, 1), (40, 2)]
        );
    }
}
