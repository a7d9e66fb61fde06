//! Semantic graph facade
//!
//! Owns one [`GraphStore`] plus the configuration and text collaborator used
//! to build it. Builders replace the graph; every analysis call is a
//! read-only query over the current graph.

use crate::algo::{self, CentralityKind, CentralityRanking, GraphStatistics};
use crate::builder::{BuildReport, CooccurrenceBuilder, SentenceBuilder};
use crate::config::AnalysisConfig;
use crate::export::{export_graph_data, GraphExport};
use crate::graph::{
    GraphResult, GraphStore, NodeId, PropertyMap, PropertyValue, RELATIONSHIP_KEY, WEIGHT_KEY,
};
use crate::text::{RegexTextParser, TextCollaborator};
use indexmap::IndexSet;
use pardes_graph_algorithms::EigenvectorConfig;

/// Relationship label used when none is given
pub const DEFAULT_RELATIONSHIP: &str = "related";

/// A semantic network over concepts, words or sentences
#[derive(Debug, Clone)]
pub struct SemanticGraph<T = RegexTextParser> {
    store: GraphStore,
    config: AnalysisConfig,
    text: T,
}

impl SemanticGraph<RegexTextParser> {
    /// Empty graph with default configuration
    pub fn new() -> Self {
        SemanticGraph {
            store: GraphStore::new(),
            config: AnalysisConfig::default(),
            text: RegexTextParser::new(),
        }
    }

    /// Empty graph with a validated configuration
    pub fn with_config(config: AnalysisConfig) -> GraphResult<Self> {
        Self::with_collaborator(RegexTextParser::new(), config)
    }
}

impl Default for SemanticGraph<RegexTextParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TextCollaborator> SemanticGraph<T> {
    /// Empty graph using a custom tokenizer/segmenter
    pub fn with_collaborator(text: T, config: AnalysisConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(SemanticGraph {
            store: GraphStore::new(),
            config,
            text,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Replace the graph with a word co-occurrence network using the configured window.
    pub fn build_cooccurrence_graph(&mut self, text: &str) -> GraphResult<BuildReport> {
        let builder = CooccurrenceBuilder::from_config(&self.config);
        let tokens = self.text.tokenize(text, builder.lowercase);
        builder.build(&mut self.store, &tokens)
    }

    /// Replace the graph with a word co-occurrence network using explicit parameters.
    pub fn build_cooccurrence_graph_with(
        &mut self,
        text: &str,
        window_size: usize,
        min_frequency: usize,
        lowercase: bool,
    ) -> GraphResult<BuildReport> {
        let builder = CooccurrenceBuilder {
            window_size,
            min_frequency,
            lowercase,
            max_tokens: self.config.limits.max_tokens,
        };
        let tokens = self.text.tokenize(text, lowercase);
        builder.build(&mut self.store, &tokens)
    }

    /// Replace the graph with a sentence-similarity network using the configured threshold.
    pub fn build_sentence_graph(&mut self, text: &str) -> GraphResult<BuildReport> {
        let builder = SentenceBuilder::from_config(&self.config);
        self.build_sentences(text, &builder)
    }

    /// Replace the graph with a sentence-similarity network using an explicit threshold.
    pub fn build_sentence_graph_with(
        &mut self,
        text: &str,
        min_common_words: usize,
    ) -> GraphResult<BuildReport> {
        let builder = SentenceBuilder {
            min_common_words,
            ..SentenceBuilder::from_config(&self.config)
        };
        self.build_sentences(text, &builder)
    }

    fn build_sentences(&mut self, text: &str, builder: &SentenceBuilder) -> GraphResult<BuildReport> {
        let sentences = self.text.segment_sentences(text);
        builder.build(&mut self.store, &sentences, &self.text)
    }

    /// Add or update a concept node.
    pub fn add_concept_node(&mut self, concept: impl Into<NodeId>, attributes: PropertyMap) {
        self.store.add_node(concept, attributes);
    }

    /// Add or overwrite a relationship between two concepts.
    ///
    /// `relationship_type` and `weight` take precedence over same-named keys
    /// in `attributes`.
    pub fn add_relationship(
        &mut self,
        first: impl Into<NodeId>,
        second: impl Into<NodeId>,
        relationship_type: &str,
        weight: f64,
        attributes: PropertyMap,
    ) -> GraphResult<()> {
        let mut properties = PropertyMap::new();
        properties.insert(
            RELATIONSHIP_KEY.to_string(),
            PropertyValue::from(relationship_type),
        );
        properties.insert(WEIGHT_KEY.to_string(), PropertyValue::Float(weight));
        for (key, value) in attributes {
            if key != RELATIONSHIP_KEY && key != WEIGHT_KEY {
                properties.insert(key, value);
            }
        }
        self.store.add_edge(first, second, properties)
    }

    /// Add a relationship labelled [`DEFAULT_RELATIONSHIP`] with weight 1.0.
    pub fn relate(&mut self, first: impl Into<NodeId>, second: impl Into<NodeId>) -> GraphResult<()> {
        self.add_relationship(first, second, DEFAULT_RELATIONSHIP, 1.0, PropertyMap::new())
    }

    /// Directly connected concepts; fails when `concept` is absent.
    pub fn neighbors(&self, concept: impl Into<NodeId>) -> GraphResult<&IndexSet<NodeId>> {
        self.store.neighbors(&concept.into())
    }

    /// Rank concepts by a centrality measure given by name:
    /// `degree`, `betweenness`, `closeness` or `eigenvector`.
    pub fn get_central_concepts(
        &self,
        top_n: usize,
        centrality_type: &str,
    ) -> GraphResult<CentralityRanking> {
        algo::centrality::rank_by_name(&self.store, top_n, centrality_type, &self.eigenvector())
    }

    /// Typed variant of [`get_central_concepts`](Self::get_central_concepts).
    pub fn central_concepts(&self, top_n: usize, kind: CentralityKind) -> CentralityRanking {
        algo::rank_central_concepts(&self.store, top_n, kind, &self.eigenvector())
    }

    /// Modularity communities, largest first.
    pub fn find_communities(&self) -> Vec<Vec<NodeId>> {
        algo::find_communities(&self.store)
    }

    /// Modularity score of a partition of this graph's nodes.
    pub fn modularity(&self, communities: &[Vec<NodeId>]) -> f64 {
        algo::partition_modularity(&self.store, communities)
    }

    /// Shortest hop path, or `None` when disconnected or an endpoint is absent.
    pub fn find_shortest_path(
        &self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Option<Vec<NodeId>> {
        algo::shortest_path(&self.store, &source.into(), &target.into())
    }

    /// Concepts within `radius` hops, the origin included; empty when absent.
    pub fn get_neighborhood(&self, concept: impl Into<NodeId>, radius: usize) -> IndexSet<NodeId> {
        algo::neighborhood(&self.store, &concept.into(), radius)
    }

    pub fn get_graph_statistics(&self) -> GraphStatistics {
        algo::graph_statistics(&self.store, self.config.limits.max_path_nodes)
    }

    pub fn export_graph_data(&self) -> GraphExport {
        export_graph_data(&self.store, self.config.limits.max_path_nodes)
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    fn eigenvector(&self) -> EigenvectorConfig {
        EigenvectorConfig::from(&self.config.eigenvector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;
    use crate::props;

    #[test]
    fn test_initialization() {
        let graph = SemanticGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_relationship() {
        let mut graph = SemanticGraph::new();
        graph.add_concept_node("cat", PropertyMap::new());
        graph.add_concept_node("animal", PropertyMap::new());
        graph
            .add_relationship("cat", "animal", "is_a", 1.0, props! { "weight" => 9.0, "source_text" => "fable" })
            .unwrap();

        let edge = graph.store().get_edge(&"cat".into(), &"animal".into()).unwrap();
        assert_eq!(edge.relationship(), Some("is_a"));
        assert_eq!(edge.weight(), 1.0);
        assert_eq!(edge.get_property("source_text").unwrap().as_string(), Some("fable"));

        // Repeated relationship calls overwrite
        graph.add_relationship("animal", "cat", "kind_of", 0.25, PropertyMap::new()).unwrap();
        let edge = graph.store().get_edge(&"cat".into(), &"animal".into()).unwrap();
        assert_eq!(edge.relationship(), Some("kind_of"));
        assert_eq!(edge.weight(), 0.25);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_relationship_rejected() {
        let mut graph = SemanticGraph::new();
        assert_eq!(graph.relate("x", "x"), Err(GraphError::InvalidEdge("x".into())));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_neighbors_requires_existing_node() {
        let mut graph = SemanticGraph::new();
        graph.relate("a", "b").unwrap();
        assert_eq!(graph.neighbors("a").unwrap().len(), 1);
        assert_eq!(graph.neighbors("q").unwrap_err(), GraphError::NodeNotFound("q".into()));
    }

    #[test]
    fn test_cooccurrence_uses_config() {
        let config = AnalysisConfig::from_yaml_str("cooccurrence:\n  window_size: 2\n  min_frequency: 1\n").unwrap();
        let mut graph = SemanticGraph::with_config(config).unwrap();
        let report = graph.build_cooccurrence_graph("Alpha beta gamma").unwrap();

        assert_eq!(report.units, 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.store().has_node(&"alpha".into()));
    }

    #[test]
    fn test_sentence_graph_uses_config_threshold() {
        let text = "Light shines. Light fades. Darkness falls.";

        // default threshold of two shared words links nothing
        let mut graph = SemanticGraph::new();
        graph.build_sentence_graph(text).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);

        let config = AnalysisConfig::from_yaml_str("sentence:\n  min_common_words: 1\n").unwrap();
        let mut graph = SemanticGraph::with_config(config).unwrap();
        graph.build_sentence_graph(text).unwrap();
        assert!(graph.store().has_edge(&0usize.into(), &1usize.into()));
        assert_eq!(graph.edge_count(), 1);

        // explicit threshold overrides the configured one
        graph.build_sentence_graph_with(text, 0).unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_degenerate_parameters_replace_graph() {
        let mut graph = SemanticGraph::new();
        graph.relate("old", "graph").unwrap();
        graph.build_cooccurrence_graph_with("a b c", 1, 1, true).unwrap();
        assert_eq!(graph.node_count(), 0);

        graph.relate("old", "graph").unwrap();
        graph.build_cooccurrence_graph_with("a b c", 2, 0, true).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.store().has_node(&"old".into()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalysisConfig::default();
        config.eigenvector.max_iterations = 0;
        assert!(SemanticGraph::with_config(config).is_err());
    }
}
