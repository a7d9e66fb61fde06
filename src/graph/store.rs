//! In-memory graph storage implementation
//!
//! An undirected, attributed simple graph. Nodes and edges iterate in
//! insertion order so that rankings and exports are reproducible.

use super::edge::{Edge, WEIGHT_KEY};
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeKey, NodeId};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge: node {0} cannot be connected to itself")]
    InvalidEdge(NodeId),

    #[error("Invalid weight {weight} on edge {edge}: weights must be finite and non-negative")]
    InvalidWeight { edge: EdgeKey, weight: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input too large: {what} has {actual} items, limit is {limit}")]
    InputTooLarge {
        what: &'static str,
        actual: usize,
        limit: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// How an existing edge's weight reacts to a repeated insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMerge {
    /// Replace the weight (manual relationships)
    Overwrite,
    /// Add to the weight (co-occurrence counts)
    Accumulate,
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (insertion ordered)
/// - edges: EdgeKey -> Edge (insertion ordered, one per unordered pair)
/// - adjacency: NodeId -> neighbor set
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node storage
    nodes: IndexMap<NodeId, Node>,

    /// Edge storage
    edges: IndexMap<EdgeKey, Edge>,

    /// Neighbor sets for each node
    adjacency: FxHashMap<NodeId, IndexSet<NodeId>>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a node. Attributes of an existing node are merged: new keys
    /// are added, existing keys overwritten.
    pub fn add_node(&mut self, id: impl Into<NodeId>, properties: PropertyMap) {
        let id = id.into();
        match self.nodes.get_mut(&id) {
            Some(node) => node.merge_properties(properties),
            None => {
                self.adjacency.insert(id.clone(), IndexSet::new());
                self.nodes
                    .insert(id.clone(), Node::new_with_properties(id, properties));
            }
        }
    }

    /// Upsert an edge, overwriting the weight when `properties` carries one.
    ///
    /// Missing endpoints are created. Fails without mutating the graph on a
    /// self loop or an invalid weight.
    pub fn add_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> GraphResult<()> {
        self.upsert_edge(a.into(), b.into(), properties, WeightMerge::Overwrite)
    }

    /// Upsert an edge, adding `weight` to any weight already recorded.
    pub fn accumulate_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        weight: f64,
        mut properties: PropertyMap,
    ) -> GraphResult<()> {
        properties.insert(WEIGHT_KEY.to_string(), PropertyValue::Float(weight));
        self.upsert_edge(a.into(), b.into(), properties, WeightMerge::Accumulate)
    }

    /// Shared upsert path for both weight policies
    pub fn upsert_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        mut properties: PropertyMap,
        merge: WeightMerge,
    ) -> GraphResult<()> {
        if a == b {
            return Err(GraphError::InvalidEdge(a));
        }
        let key = EdgeKey::new(a.clone(), b.clone());

        // Validate before touching the graph
        let weight = match properties.shift_remove(WEIGHT_KEY) {
            Some(value) => Some(checked_weight(&key, &value)?),
            None => None,
        };

        self.ensure_node(&a);
        self.ensure_node(&b);

        match self.edges.get_mut(&key) {
            Some(edge) => {
                let previous = edge.weight();
                edge.properties.extend(properties);
                match (merge, weight) {
                    (WeightMerge::Accumulate, Some(w)) => edge.set_weight(previous + w),
                    (WeightMerge::Overwrite, Some(w)) => edge.set_weight(w),
                    (_, None) => {}
                }
            }
            None => {
                let mut edge = Edge::new(a.clone(), b.clone());
                if let Some(w) = weight {
                    edge.set_weight(w);
                }
                edge.properties.extend(properties);
                self.edges.insert(key, edge);
                self.adjacency.entry(a.clone()).or_default().insert(b.clone());
                self.adjacency.entry(b).or_default().insert(a);
            }
        }
        Ok(())
    }

    fn ensure_node(&mut self, id: &NodeId) {
        if !self.nodes.contains_key(id) {
            self.add_node(id.clone(), PropertyMap::new());
        }
    }

    /// Directly connected nodes, in the order the connections were made
    pub fn neighbors(&self, id: &NodeId) -> GraphResult<&IndexSet<NodeId>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// Number of neighbors of a node
    pub fn degree(&self, id: &NodeId) -> GraphResult<usize> {
        self.neighbors(id).map(IndexSet::len)
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the edge between two nodes, in either direction
    pub fn get_edge(&self, a: &NodeId, b: &NodeId) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(a.clone(), b.clone()))
    }

    /// Check if two nodes are connected
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.get_edge(a, b).is_some()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All node identifiers in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Position of a node in insertion order
    pub fn node_position(&self, id: &NodeId) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all data from the store
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "clearing graph store"
        );
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }
}

fn checked_weight(edge: &EdgeKey, value: &PropertyValue) -> GraphResult<f64> {
    let weight = value.as_number().ok_or_else(|| {
        GraphError::InvalidArgument(format!(
            "weight on edge {} must be numeric, got {}",
            edge,
            value.type_name()
        ))
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::InvalidWeight {
            edge: edge.clone(),
            weight,
        });
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    fn id(name: &str) -> NodeId {
        NodeId::name(name)
    }

    #[test]
    fn test_add_node_upserts() {
        let mut store = GraphStore::new();
        store.add_node("cat", props! { "type" => "animal" });
        store.add_node("cat", props! { "type" => "pet", "legs" => 4i64 });

        assert_eq!(store.node_count(), 1);
        let node = store.get_node(&id("cat")).unwrap();
        assert_eq!(node.get_property("type").unwrap().as_string(), Some("pet"));
        assert_eq!(node.get_property("legs").unwrap().as_integer(), Some(4));
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut store = GraphStore::new();
        store.add_edge("x", "y", PropertyMap::new()).unwrap();

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(store.has_edge(&id("y"), &id("x")));
        assert_eq!(store.get_edge(&id("x"), &id("y")).unwrap().weight(), 1.0);
    }

    #[test]
    fn test_edge_validation() {
        let mut store = GraphStore::new();

        let result = store.add_edge("x", "x", PropertyMap::new());
        assert_eq!(result, Err(GraphError::InvalidEdge(id("x"))));
        assert_eq!(store.node_count(), 0);

        let result = store.add_edge("x", "y", props! { "weight" => -1.0 });
        assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));
        assert_eq!(store.node_count(), 0);

        let result = store.add_edge("x", "y", props! { "weight" => "heavy" });
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_overwrite_vs_accumulate() {
        let mut store = GraphStore::new();
        store
            .add_edge("a", "b", props! { "weight" => 2.0, "relationship" => "is_a" })
            .unwrap();
        store.add_edge("b", "a", props! { "weight" => 0.5 }).unwrap();

        let edge = store.get_edge(&id("a"), &id("b")).unwrap();
        assert_eq!(edge.weight(), 0.5);
        assert_eq!(edge.relationship(), Some("is_a"));

        store.accumulate_edge("a", "b", 3.0, PropertyMap::new()).unwrap();
        store.accumulate_edge("b", "a", 1.0, PropertyMap::new()).unwrap();
        assert_eq!(store.get_edge(&id("a"), &id("b")).unwrap().weight(), 4.5);
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_overwrite_without_weight_keeps_weight() {
        let mut store = GraphStore::new();
        store.add_edge("a", "b", props! { "weight" => 2i64 }).unwrap();
        store.add_edge("a", "b", props! { "note" => "seen twice" }).unwrap();

        let edge = store.get_edge(&id("a"), &id("b")).unwrap();
        assert_eq!(edge.get_property("weight"), Some(&PropertyValue::Float(2.0)));
        assert_eq!(edge.get_property("note").unwrap().as_string(), Some("seen twice"));
    }

    #[test]
    fn test_adjacency_lists() {
        let mut store = GraphStore::new();
        store.add_edge("b", "a", PropertyMap::new()).unwrap();
        store.add_edge("b", "c", PropertyMap::new()).unwrap();

        let neighbors: Vec<&NodeId> = store.neighbors(&id("b")).unwrap().iter().collect();
        assert_eq!(neighbors, vec![&id("a"), &id("c")]);
        assert_eq!(store.degree(&id("a")).unwrap(), 1);

        assert_eq!(
            store.neighbors(&id("zzz")).unwrap_err(),
            GraphError::NodeNotFound(id("zzz"))
        );
    }

    #[test]
    fn test_insertion_order() {
        let mut store = GraphStore::new();
        store.add_node("first", PropertyMap::new());
        store.add_edge("second", "first", PropertyMap::new()).unwrap();
        store.add_node(0usize, PropertyMap::new());

        let ids: Vec<String> = store.node_ids().map(ToString::to_string).collect();
        assert_eq!(ids, vec!["first", "second", "0"]);
        assert_eq!(store.node_position(&id("second")), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut store = GraphStore::new();
        store.add_edge("a", "b", PropertyMap::new()).unwrap();

        store.clear();
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert!(store.neighbors(&id("a")).is_err());

        // No-op on an empty store
        store.clear();
        assert!(store.is_empty());
    }
}
