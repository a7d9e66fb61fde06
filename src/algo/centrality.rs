//! Centrality ranking
//!
//! Selects one of four centrality measures by name and ranks nodes by score.
//! Eigenvector centrality falls back to degree centrality when power iteration
//! exhausts its budget; the ranking records which measure actually ran.

use super::build_view;
use crate::graph::{GraphError, GraphResult, GraphStore, NodeId};
use pardes_graph_algorithms::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
    EigenvectorConfig, GraphView,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Centrality measure selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityKind {
    /// `degree / (n - 1)`
    Degree,
    /// Share of shortest paths between other node pairs passing through the node
    Betweenness,
    /// Inverse mean hop distance to reachable nodes
    Closeness,
    /// Principal eigenvector of the adjacency matrix
    Eigenvector,
}

impl CentralityKind {
    pub const ALL: [CentralityKind; 4] = [
        CentralityKind::Degree,
        CentralityKind::Betweenness,
        CentralityKind::Closeness,
        CentralityKind::Eigenvector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CentralityKind::Degree => "degree",
            CentralityKind::Betweenness => "betweenness",
            CentralityKind::Closeness => "closeness",
            CentralityKind::Eigenvector => "eigenvector",
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CentralityKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CentralityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GraphError::InvalidArgument(format!("Unknown centrality type: {}", s)))
    }
}

/// Nodes ranked by descending centrality
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityRanking {
    /// Measure the caller asked for
    pub requested: CentralityKind,
    /// Measure that produced `scores`
    pub computed: CentralityKind,
    /// `(node, score)` pairs, best first; ties keep insertion order
    pub scores: Vec<(NodeId, f64)>,
}

impl CentralityRanking {
    /// True when eigenvector centrality did not converge and degree scores were substituted
    pub fn fell_back(&self) -> bool {
        self.requested != self.computed
    }

    /// Highest ranked node
    pub fn top(&self) -> Option<&NodeId> {
        self.scores.first().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Scores aligned with `view.index_to_node`, plus the measure that produced them
pub fn centrality_scores<N>(
    view: &GraphView<N>,
    kind: CentralityKind,
    eigenvector: &EigenvectorConfig,
) -> (CentralityKind, Vec<f64>) {
    match kind {
        CentralityKind::Degree => (kind, degree_centrality(view)),
        CentralityKind::Betweenness => (kind, betweenness_centrality(view)),
        CentralityKind::Closeness => (kind, closeness_centrality(view)),
        CentralityKind::Eigenvector => match eigenvector_centrality(view, eigenvector) {
            Ok(scores) => (kind, scores),
            Err(err) => {
                warn!(error = %err, "falling back to degree centrality");
                (CentralityKind::Degree, degree_centrality(view))
            }
        },
    }
}

/// Rank the store's nodes by `kind`, keeping the best `top_n`.
pub fn rank_central_concepts(
    store: &GraphStore,
    top_n: usize,
    kind: CentralityKind,
    eigenvector: &EigenvectorConfig,
) -> CentralityRanking {
    if store.is_empty() {
        return CentralityRanking {
            requested: kind,
            computed: kind,
            scores: Vec::new(),
        };
    }

    let view = build_view(store);
    let (computed, scores) = centrality_scores(&view, kind, eigenvector);

    let mut order: Vec<usize> = (0..view.node_count).collect();
    // Stable: equal scores stay in insertion order
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(top_n);

    CentralityRanking {
        requested: kind,
        computed,
        scores: order
            .into_iter()
            .map(|idx| (view.index_to_node[idx].clone(), scores[idx]))
            .collect(),
    }
}

/// Parse `kind` and rank; unknown names fail with `InvalidArgument`.
pub fn rank_by_name(
    store: &GraphStore,
    top_n: usize,
    kind: &str,
    eigenvector: &EigenvectorConfig,
) -> GraphResult<CentralityRanking> {
    let kind = kind.parse::<CentralityKind>()?;
    Ok(rank_central_concepts(store, top_n, kind, eigenvector))
}
