use follow_graph_core::{find_at_level, find_mutual_pairs, Graph, NodeId};
use serde::Serialize;
use tracing::info;

use crate::select::Mode;
use crate::util::check_non_negative;

/// The analysis result, shaped by whichever mode ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Pairs(Vec<[NodeId; 2]>),
    Nodes(Vec<NodeId>),
}

impl Outcome {
    pub fn len(&self) -> usize {
        match self {
            Outcome::Pairs(p) => p.len(),
            Outcome::Nodes(n) => n.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Delivery payload: `{"regNo": ..., "outcome": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub reg_no: String,
    pub outcome: Outcome,
}

/// Run the selected analysis over the graph.
pub fn compute(graph: &Graph, mode: Mode) -> Outcome {
    let outcome = match mode {
        Mode::MutualPairs => Outcome::Pairs(
            find_mutual_pairs(graph)
                .into_iter()
                .map(|p| p.to_array())
                .collect(),
        ),
        // No node sits at a negative distance.
        Mode::LevelSet { find_id, n } => match check_non_negative(n, "n") {
            Some(level) => Outcome::Nodes(find_at_level(graph, find_id, level)),
            None => Outcome::Nodes(Vec::new()),
        },
    };
    info!(results = outcome.len(), "analysis complete");
    outcome
}
