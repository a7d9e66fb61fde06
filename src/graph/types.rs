//! Core type definitions for the semantic graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node
///
/// Concept and word nodes are keyed by name; sentence nodes by their
/// position in the source text. Serializes untagged, as a bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(untagged)]
pub enum NodeId {
    Index(u64),
    Name(String),
}

impl NodeId {
    pub fn name(name: impl Into<String>) -> Self {
        NodeId::Name(name.into())
    }

    pub fn index(index: u64) -> Self {
        NodeId::Index(index)
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            NodeId::Name(name) => Some(name),
            NodeId::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<u64> {
        match self {
            NodeId::Index(index) => Some(*index),
            NodeId::Name(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Index(index) => write!(f, "{}", index),
            NodeId::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId::Index(id)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId::Index(id as u64)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Name(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Name(s.to_string())
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

/// Canonical key of an undirected edge: endpoints in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.0, &self.1)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.0, self.1)
    }
}
