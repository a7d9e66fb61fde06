//! Sliding-window co-occurrence builder
//!
//! Pairs are counted before any graph mutation, so the frequency filter is a
//! single pass and each surviving pair touches the store once.

use super::BuildReport;
use crate::config::AnalysisConfig;
use crate::graph::{GraphError, GraphResult, GraphStore, NodeId, PropertyMap, PropertyValue};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, info};

/// Pair counts keyed by the lexicographically sorted pair, in first-seen order
pub type PairCounts = IndexMap<(String, String), usize, FxBuildHasher>;

/// Builds a word graph whose edge weights are windowed co-occurrence counts
#[derive(Debug, Clone, PartialEq)]
pub struct CooccurrenceBuilder {
    /// Window length in words
    pub window_size: usize,
    /// Minimum pair count for an edge
    pub min_frequency: usize,
    /// Lowercase tokens before pairing
    pub lowercase: bool,
    /// Largest accepted token stream
    pub max_tokens: usize,
}

impl Default for CooccurrenceBuilder {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl CooccurrenceBuilder {
    pub fn new(window_size: usize, min_frequency: usize) -> Self {
        Self {
            window_size,
            min_frequency,
            ..Self::default()
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            window_size: config.cooccurrence.window_size,
            min_frequency: config.cooccurrence.min_frequency,
            lowercase: config.cooccurrence.lowercase,
            max_tokens: config.limits.max_tokens,
        }
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Count every unordered pair of distinct tokens sharing a window.
    ///
    /// The window starting at each position covers up to `window_size` tokens,
    /// so pairs near each other are counted once per window they share. A
    /// window shorter than two tokens holds no pair.
    pub fn count_pairs<S: AsRef<str>>(&self, tokens: &[S]) -> PairCounts {
        let words: Vec<String> = tokens.iter().map(|t| self.normalize(t.as_ref())).collect();
        let mut counts = PairCounts::default();

        for start in 0..words.len() {
            let end = (start + self.window_size).min(words.len());
            let window = &words[start..end];
            for (j, first) in window.iter().enumerate() {
                for second in &window[j + 1..] {
                    if first == second {
                        continue;
                    }
                    let pair = if first < second {
                        (first.clone(), second.clone())
                    } else {
                        (second.clone(), first.clone())
                    };
                    *counts.entry(pair).or_insert(0) += 1;
                }
            }
        }

        counts
    }

    /// Clear `store` and rebuild it from `tokens`.
    ///
    /// Word nodes carry a `frequency` attribute (occurrences in the stream);
    /// only words with at least one surviving edge become nodes. Every counted
    /// pair occurs at least once, so a `min_frequency` of 0 keeps them all.
    pub fn build<S: AsRef<str>>(
        &self,
        store: &mut GraphStore,
        tokens: &[S],
    ) -> GraphResult<BuildReport> {
        if tokens.len() > self.max_tokens {
            return Err(GraphError::InputTooLarge {
                what: "token stream",
                actual: tokens.len(),
                limit: self.max_tokens,
            });
        }

        let counts = self.count_pairs(tokens);
        debug!(
            tokens = tokens.len(),
            pairs = counts.len(),
            window = self.window_size,
            "counted co-occurrence pairs"
        );

        store.clear();
        for ((first, second), &count) in &counts {
            if count >= self.min_frequency {
                store.accumulate_edge(
                    first.as_str(),
                    second.as_str(),
                    count as f64,
                    PropertyMap::new(),
                )?;
            }
        }

        let mut frequency: IndexMap<String, usize, FxBuildHasher> = IndexMap::default();
        for token in tokens {
            *frequency.entry(self.normalize(token.as_ref())).or_insert(0) += 1;
        }
        for (word, count) in frequency {
            let id = NodeId::from(word);
            if store.has_node(&id) {
                let mut properties = PropertyMap::new();
                properties.insert("frequency".to_string(), PropertyValue::from(count));
                store.add_node(id, properties);
            }
        }

        let report = BuildReport {
            units: tokens.len(),
            candidate_pairs: counts.len(),
            nodes: store.node_count(),
            edges: store.edge_count(),
        };
        info!(
            nodes = report.nodes,
            edges = report.edges,
            min_frequency = self.min_frequency,
            "built co-occurrence graph"
        );
        Ok(report)
    }

    fn normalize(&self, token: &str) -> String {
        if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}
