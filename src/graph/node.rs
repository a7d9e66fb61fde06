//! Node implementation for the semantic graph

use super::property::{PropertyMap, PropertyValue};
use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A node in the semantic graph: a concept, word or sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Attributes associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node without attributes
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new node with attributes
    pub fn new_with_properties(id: impl Into<NodeId>, properties: PropertyMap) -> Self {
        Node {
            id: id.into(),
            properties,
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Upsert: new keys are appended, existing keys overwritten
    pub fn merge_properties(&mut self, properties: PropertyMap) {
        self.properties.extend(properties);
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
