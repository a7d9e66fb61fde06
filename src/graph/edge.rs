//! Edge implementation for the semantic graph
//!
//! Edges are undirected; at most one edge exists per node pair. The edge's
//! strength is kept in its attribute map under [`WEIGHT_KEY`].

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeKey, NodeId};
use serde::{Deserialize, Serialize};

/// Attribute holding the edge weight
pub const WEIGHT_KEY: &str = "weight";

/// Attribute holding a free-form relationship label
pub const RELATIONSHIP_KEY: &str = "relationship";

/// Weight of an edge created without one
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// An undirected edge in the semantic graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint, as first inserted
    pub source: NodeId,

    /// Second endpoint, as first inserted
    pub target: NodeId,

    /// Attributes, always including `weight`
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new edge with the default weight
    pub fn new(source: NodeId, target: NodeId) -> Self {
        let mut properties = PropertyMap::new();
        properties.insert(WEIGHT_KEY.to_string(), PropertyValue::Float(DEFAULT_WEIGHT));
        Edge {
            source,
            target,
            properties,
        }
    }

    /// Canonical key for this edge
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.clone(), self.target.clone())
    }

    /// Edge weight; non-numeric or missing values read as the default
    pub fn weight(&self) -> f64 {
        self.properties
            .get(WEIGHT_KEY)
            .and_then(PropertyValue::as_number)
            .unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.properties
            .insert(WEIGHT_KEY.to_string(), PropertyValue::Float(weight));
    }

    /// Relationship label, if one was recorded
    pub fn relationship(&self) -> Option<&str> {
        self.properties
            .get(RELATIONSHIP_KEY)
            .and_then(PropertyValue::as_string)
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, node1: &NodeId, node2: &NodeId) -> bool {
        (&self.source == node1 && &self.target == node2)
            || (&self.source == node2 && &self.target == node1)
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.source == node {
            Some(&self.target)
        } else if &self.target == node {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight() {
        let edge = Edge::new("a".into(), "b".into());
        assert_eq!(edge.weight(), 1.0);
        assert_eq!(edge.relationship(), None);
    }

    #[test]
    fn test_integer_weight_reads_as_number() {
        let mut edge = Edge::new("a".into(), "b".into());
        edge.set_property(WEIGHT_KEY, 3i64);
        assert_eq!(edge.weight(), 3.0);

        edge.set_property(WEIGHT_KEY, "heavy");
        assert_eq!(edge.weight(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_undirected_identity() {
        let ab = Edge::new("a".into(), "b".into());
        let ba = Edge::new("b".into(), "a".into());
        assert_eq!(ab, ba);
        assert!(ab.connects(&"b".into(), &"a".into()));
        assert_eq!(ab.other(&"a".into()), Some(&NodeId::name("b")));
        assert_eq!(ab.other(&"z".into()), None);
    }
}
