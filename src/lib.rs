//! PaRDeS Semantic Graph
//!
//! An in-memory semantic network over concepts, words and sentences, with
//! text-driven graph builders and structural analyses.
//!
//! # Architecture
//!
//! - [`graph`]: undirected attributed graph store (nodes, edges, properties)
//! - [`builder`]: co-occurrence and sentence-similarity graph construction
//! - [`algo`]: centrality, communities, paths and statistics, backed by the
//!   `pardes-graph-algorithms` crate
//! - [`export`]: plain-data snapshot of a graph
//! - [`semantic`]: the [`SemanticGraph`] facade tying the above together
//!
//! ## Example Usage
//!
//! ```rust
//! use pardes::{PropertyMap, SemanticGraph};
//!
//! let mut graph = SemanticGraph::new();
//! graph.add_concept_node("wisdom", PropertyMap::new());
//! graph.add_concept_node("understanding", PropertyMap::new());
//! graph
//!     .add_relationship("wisdom", "understanding", "complements", 0.8, PropertyMap::new())
//!     .unwrap();
//!
//! let ranking = graph.get_central_concepts(1, "degree").unwrap();
//! assert_eq!(ranking.len(), 1);
//!
//! let path = graph.find_shortest_path("wisdom", "understanding").unwrap();
//! assert_eq!(path.len(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod builder;
pub mod config;
pub mod export;
pub mod graph;
pub mod semantic;
pub mod text;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeKey, GraphError, GraphResult, GraphStore, Node, NodeId, PropertyMap,
    PropertyValue, WeightMerge,
};

pub use algo::{CentralityKind, CentralityRanking, GraphStatistics};

pub use builder::{BuildReport, CooccurrenceBuilder, SentenceBuilder};

pub use config::AnalysisConfig;

pub use export::{export_graph_data, ExportedEdge, ExportedNode, GraphExport};

pub use semantic::SemanticGraph;

pub use text::{RegexTextParser, TextCollaborator};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
