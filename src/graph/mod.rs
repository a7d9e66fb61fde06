//! Core semantic graph implementation
//!
//! This module implements the undirected, attributed graph model with:
//! - Nodes keyed by name or sentence index, carrying scalar attributes
//! - At most one weighted edge per unordered node pair
//! - In-memory storage with insertion-ordered iteration

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{Edge, DEFAULT_WEIGHT, RELATIONSHIP_KEY, WEIGHT_KEY};
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore, WeightMerge};
pub use types::{EdgeKey, NodeId};
