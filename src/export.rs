//! Graph export
//!
//! A read-only snapshot of nodes, edges and statistics as plain nested data.
//! Attributes are flattened next to the identifying fields:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "wisdom", "frequency": 3 }],
//!   "edges": [{ "source": "wisdom", "target": "truth", "weight": 2.0 }],
//!   "statistics": { "nodes": 2, "edges": 1, "density": 1.0, "connected_components": 1 }
//! }
//! ```
//!
//! Attributes named `id` (nodes) or `source`/`target` (edges) would collide
//! with the identifying fields and are left out of the snapshot.

use crate::algo::{graph_statistics, GraphStatistics};
use crate::graph::{Edge, GraphError, GraphResult, GraphStore, Node, NodeId, PropertyMap};
use serde::Serialize;

const NODE_RESERVED: [&str; 1] = ["id"];
const EDGE_RESERVED: [&str; 2] = ["source", "target"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedNode {
    pub id: NodeId,
    #[serde(flatten)]
    pub attributes: PropertyMap,
}

impl From<&Node> for ExportedNode {
    fn from(node: &Node) -> Self {
        ExportedNode {
            id: node.id.clone(),
            attributes: without(&node.properties, &NODE_RESERVED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedEdge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(flatten)]
    pub attributes: PropertyMap,
}

impl From<&Edge> for ExportedEdge {
    fn from(edge: &Edge) -> Self {
        ExportedEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            attributes: without(&edge.properties, &EDGE_RESERVED),
        }
    }
}

fn without(properties: &PropertyMap, reserved: &[&str]) -> PropertyMap {
    properties
        .iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Snapshot of a graph for visualization or storage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportedNode>,
    pub edges: Vec<ExportedEdge>,
    pub statistics: GraphStatistics,
}

impl GraphExport {
    pub fn to_json(&self) -> GraphResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| GraphError::Serialization(e.to_string()))
    }

    pub fn to_json_string_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::Serialization(e.to_string()))
    }
}

/// Snapshot `store` in insertion order, with embedded statistics.
pub fn export_graph_data(store: &GraphStore, max_path_nodes: usize) -> GraphExport {
    GraphExport {
        nodes: store.nodes().map(ExportedNode::from).collect(),
        edges: store.edges().map(ExportedEdge::from).collect(),
        statistics: graph_statistics(store, max_path_nodes),
    }
}
