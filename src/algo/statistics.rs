//! Whole-graph statistics

use super::build_view;
use crate::graph::GraphStore;
use pardes_graph_algorithms::{
    average_clustering, connected_components, count_triangles, path_length_summary,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Structural summary of a graph
///
/// Optional fields are omitted when they do not apply: clustering and
/// triangles on an empty graph, path measures on a disconnected graph or one
/// above the path-size ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub nodes: usize,
    pub edges: usize,
    /// `2E / (N (N - 1))`, 0 when N < 2
    pub density: f64,
    pub connected_components: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_clustering: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triangles: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_shortest_path: Option<f64>,
}

impl GraphStatistics {
    /// Statistics of the empty graph
    pub fn empty() -> Self {
        GraphStatistics {
            nodes: 0,
            edges: 0,
            density: 0.0,
            connected_components: 0,
            avg_clustering: None,
            triangles: None,
            diameter: None,
            avg_shortest_path: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected_components == 1
    }
}

/// Compute statistics; diameter and mean path length need BFS from every
/// node and are skipped above `max_path_nodes`.
pub fn graph_statistics(store: &GraphStore, max_path_nodes: usize) -> GraphStatistics {
    if store.is_empty() {
        return GraphStatistics::empty();
    }

    let view = build_view(store);
    let nodes = view.node_count;
    let edges = view.edge_count();

    let density = if nodes < 2 {
        0.0
    } else {
        2.0 * edges as f64 / (nodes * (nodes - 1)) as f64
    };
    let connected_components = connected_components(&view).len();

    let mut stats = GraphStatistics {
        nodes,
        edges,
        density,
        connected_components,
        avg_clustering: Some(average_clustering(&view)),
        triangles: Some(count_triangles(&view)),
        diameter: None,
        avg_shortest_path: None,
    };

    if stats.is_connected() {
        if nodes <= max_path_nodes {
            if let Some(summary) = path_length_summary(&view) {
                stats.diameter = Some(summary.diameter);
                stats.avg_shortest_path = Some(summary.average);
            }
        } else {
            warn!(
                nodes,
                limit = max_path_nodes,
                "skipping diameter and average path length"
            );
        }
    }

    stats
}
