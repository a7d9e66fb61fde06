//! Sentence-similarity builder
//!
//! Every sentence becomes a node keyed by its position. Two sentences are
//! linked when they share at least `min_common_words` distinct words; the
//! weight is `shared / max(|words_i|, |words_j|)`, or 0 when both are empty.
//! A threshold of 0 links every pair.
//!
//! Comparison is pairwise, hence the `max_sentences` ceiling.

use super::BuildReport;
use crate::config::AnalysisConfig;
use crate::graph::{GraphError, GraphResult, GraphStore, NodeId, PropertyMap, PropertyValue};
use crate::text::TextCollaborator;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Builds a sentence graph weighted by vocabulary overlap
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceBuilder {
    /// Minimum shared distinct words for an edge
    pub min_common_words: usize,
    /// Characters kept in each node's `label`
    pub preview_chars: usize,
    /// Largest accepted sentence count
    pub max_sentences: usize,
}

impl Default for SentenceBuilder {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl SentenceBuilder {
    pub fn new(min_common_words: usize) -> Self {
        Self {
            min_common_words,
            ..Self::default()
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            min_common_words: config.sentence.min_common_words,
            preview_chars: config.sentence.preview_chars,
            max_sentences: config.limits.max_sentences,
        }
    }

    pub fn max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Clear `store` and rebuild it from `sentences`, tokenized by `text`.
    pub fn build<C, S>(
        &self,
        store: &mut GraphStore,
        sentences: &[S],
        text: &C,
    ) -> GraphResult<BuildReport>
    where
        C: TextCollaborator + ?Sized,
        S: AsRef<str>,
    {
        if sentences.len() > self.max_sentences {
            return Err(GraphError::InputTooLarge {
                what: "sentence list",
                actual: sentences.len(),
                limit: self.max_sentences,
            });
        }

        let vocabularies: Vec<FxHashSet<String>> = sentences
            .iter()
            .map(|sentence| text.tokenize(sentence.as_ref(), true).into_iter().collect())
            .collect();

        store.clear();
        for (i, (sentence, words)) in sentences.iter().zip(&vocabularies).enumerate() {
            let mut properties = PropertyMap::new();
            properties.insert(
                "label".to_string(),
                PropertyValue::String(self.preview(sentence.as_ref())),
            );
            properties.insert("word_count".to_string(), PropertyValue::from(words.len()));
            store.add_node(NodeId::from(i), properties);
        }

        let mut candidate_pairs = 0;
        for (i, words_i) in vocabularies.iter().enumerate() {
            for (j, words_j) in vocabularies.iter().enumerate().skip(i + 1) {
                candidate_pairs += 1;
                let common = words_i.intersection(words_j).count();
                if common < self.min_common_words {
                    continue;
                }
                let largest = words_i.len().max(words_j.len());
                let similarity = if largest == 0 {
                    0.0
                } else {
                    common as f64 / largest as f64
                };
                let mut properties = PropertyMap::new();
                properties.insert("weight".to_string(), PropertyValue::Float(similarity));
                properties.insert("common_words".to_string(), PropertyValue::from(common));
                store.add_edge(NodeId::from(i), NodeId::from(j), properties)?;
            }
        }
        debug!(
            sentences = sentences.len(),
            pairs = candidate_pairs,
            "compared sentence vocabularies"
        );

        let report = BuildReport {
            units: sentences.len(),
            candidate_pairs,
            nodes: store.node_count(),
            edges: store.edge_count(),
        };
        info!(
            nodes = report.nodes,
            edges = report.edges,
            min_common_words = self.min_common_words,
            "built sentence graph"
        );
        Ok(report)
    }

    /// First `preview_chars` characters, with an ellipsis when truncated
    fn preview(&self, sentence: &str) -> String {
        match sentence.char_indices().nth(self.preview_chars) {
            Some((cut, _)) => format!("{}...", &sentence[..cut]),
            None => sentence.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::RegexTextParser;

    #[test]
    fn test_three_sentences() {
        let mut store = GraphStore::new();
        let sentences = ["The cat sat.", "The dog sat.", "The bird flew."];
        let report = SentenceBuilder::new(1)
            .build(&mut store, &sentences, &RegexTextParser::new())
            .unwrap();

        assert_eq!(report.nodes, 3);
        assert_eq!(report.candidate_pairs, 3);

        // "the" + "sat" shared out of 3 words each
        let edge = store.get_edge(&NodeId::index(0), &NodeId::index(1)).unwrap();
        assert!((edge.weight() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(edge.get_property("common_words").unwrap().as_integer(), Some(2));

        let edge = store.get_edge(&NodeId::index(1), &NodeId::index(2)).unwrap();
        assert!((edge.weight() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_and_node_attributes() {
        let mut store = GraphStore::new();
        let sentences = ["The cat sat.", "The dog sat.", "The bird flew."];
        SentenceBuilder::new(2)
            .build(&mut store, &sentences, &RegexTextParser::new())
            .unwrap();

        assert_eq!(store.edge_count(), 1);
        let node = store.get_node(&NodeId::index(2)).unwrap();
        assert_eq!(node.get_property("label").unwrap().as_string(), Some("The bird flew."));
        assert_eq!(node.get_property("word_count").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn test_case_folded_vocabulary() {
        let mut store = GraphStore::new();
        let sentences = ["Truth matters", "truth MATTERS"];
        SentenceBuilder::new(2)
            .build(&mut store, &sentences, &RegexTextParser::new())
            .unwrap();
        assert_eq!(store.get_edge(&0usize.into(), &1usize.into()).unwrap().weight(), 1.0);
    }

    #[test]
    fn test_preview_truncation() {
        let builder = SentenceBuilder {
            preview_chars: 5,
            ..SentenceBuilder::default()
        };
        assert_eq!(builder.preview("abcdefgh"), "abcde...");
        assert_eq!(builder.preview("abcde"), "abcde");
        assert_eq!(builder.preview("ééééééé"), "ééééé...");
    }

    #[test]
    fn test_zero_threshold_links_every_pair() {
        let mut store = GraphStore::new();
        store.add_edge("old", "graph", PropertyMap::new()).unwrap();

        let sentences = ["Cats purr.", "Dogs bark.", "!!!"];
        let report = SentenceBuilder::new(0)
            .build(&mut store, &sentences, &RegexTextParser::new())
            .unwrap();

        assert!(!store.has_node(&"old".into()));
        assert_eq!(report.nodes, 3);
        assert_eq!(report.edges, 3);

        let disjoint = store.get_edge(&NodeId::index(0), &NodeId::index(1)).unwrap();
        assert_eq!(disjoint.weight(), 0.0);
        assert_eq!(disjoint.get_property("common_words").unwrap().as_integer(), Some(0));
    }

    #[test]
    fn test_empty_vocabularies_weigh_zero() {
        let mut store = GraphStore::new();
        SentenceBuilder::new(0)
            .build(&mut store, &["...", "?!"], &RegexTextParser::new())
            .unwrap();

        let edge = store.get_edge(&NodeId::index(0), &NodeId::index(1)).unwrap();
        assert_eq!(edge.weight(), 0.0);
        let node = store.get_node(&NodeId::index(0)).unwrap();
        assert_eq!(node.get_property("word_count").unwrap().as_integer(), Some(0));
    }

    #[test]
    fn test_sentence_ceiling() {
        let mut store = GraphStore::new();
        let parser = RegexTextParser::new();

        let err = SentenceBuilder::new(1)
            .max_sentences(1)
            .build(&mut store, &["One.", "Two."], &parser)
            .unwrap_err();
        assert!(matches!(err, GraphError::InputTooLarge { actual: 2, limit: 1, .. }));
    }
}
