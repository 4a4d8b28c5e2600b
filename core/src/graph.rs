use std::collections::HashMap;

/// Identifier of a user in the follow graph.
pub type NodeId = i64;

/// One user and the ordered list of users it follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: NodeId,
    pub follows: Vec<NodeId>,
}

impl UserRecord {
    pub fn new(id: NodeId, follows: impl Into<Vec<NodeId>>) -> Self {
        Self {
            id,
            follows: follows.into(),
        }
    }
}

/// Directed follow graph: user id → outgoing follow list.
///
/// Built once from user records and read-only afterwards. Follow targets do
/// not need their own entry; a dangling target simply has no outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    outgoing: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            outgoing: HashMap::new(),
        }
    }

    /// Pre-allocate for a known number of user records.
    pub fn with_capacity(user_count: usize) -> Self {
        Self {
            outgoing: HashMap::with_capacity(user_count),
        }
    }

    /// Build the graph in a single insertion pass.
    ///
    /// Duplicate ids are last-write-wins: the later record's follow list
    /// replaces the earlier one.
    pub fn build<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let users = users.into_iter();
        let mut graph = Self::with_capacity(users.size_hint().0);
        for user in users {
            graph.insert_user(user);
        }
        graph
    }

    /// Insert one user record, returning the follow list it replaced, if any.
    pub fn insert_user(&mut self, user: UserRecord) -> Option<Vec<NodeId>> {
        self.outgoing.insert(user.id, user.follows)
    }

    /// Whether `id` has its own user record.
    pub fn contains(&self, id: NodeId) -> bool {
        self.outgoing.contains_key(&id)
    }

    /// Outgoing follows of a node. Empty for nodes without a record.
    pub fn follows_of(&self, id: NodeId) -> &[NodeId] {
        self.outgoing.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether `from` follows `to`. Linear in `from`'s follow list.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.follows_of(from).contains(&to)
    }

    /// Iterate user records as (id, follows).
    pub fn nodes_iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.outgoing.iter().map(|(&id, f)| (id, f.as_slice()))
    }

    /// Number of user records (dangling follow targets are not counted).
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|v| v.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        let g = Graph::build(vec![
            UserRecord::new(1, [2, 3]),
            UserRecord::new(2, [1]),
            UserRecord::new(3, []),
        ]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let g = Graph::build(vec![UserRecord::new(1, [2, 3]), UserRecord::new(1, [4])]);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.follows_of(1), &[4]);
    }

    #[test]
    fn test_insert_user_returns_replaced() {
        let mut g = Graph::new();
        assert!(g.insert_user(UserRecord::new(7, [8])).is_none());
        assert_eq!(g.insert_user(UserRecord::new(7, [9])), Some(vec![8]));
    }

    #[test]
    fn test_dangling_target_has_no_edges() {
        let g = Graph::build(vec![UserRecord::new(1, [99])]);
        assert!(g.contains(1));
        assert!(!g.contains(99));
        assert!(g.follows_of(99).is_empty());
        assert!(g.has_edge(1, 99));
        assert!(!g.has_edge(99, 1));
    }

    #[test]
    fn test_follow_order_preserved() {
        let g = Graph::build(vec![UserRecord::new(1, [5, 3, 4])]);
        assert_eq!(g.follows_of(1), &[5, 3, 4]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::build(Vec::new());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.nodes_iter().count(), 0);
    }
}
