//! Analysis configuration
//!
//! Every field has a default, so a partial YAML or JSON document is enough:
//!
//! ```yaml
//! cooccurrence:
//!   window_size: 3
//!   min_frequency: 1
//! limits:
//!   max_tokens: 50000
//! ```

use crate::graph::{GraphError, GraphResult};
use pardes_graph_algorithms::EigenvectorConfig;
use serde::{Deserialize, Serialize};

/// Sliding-window co-occurrence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooccurrenceConfig {
    /// Window length in words
    pub window_size: usize,
    /// Minimum pair count for an edge to be kept
    pub min_frequency: usize,
    /// Lowercase tokens before pairing
    pub lowercase: bool,
}

impl Default for CooccurrenceConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            min_frequency: 2,
            lowercase: true,
        }
    }
}

/// Sentence-similarity settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    /// Minimum shared distinct words for an edge
    pub min_common_words: usize,
    /// Characters kept in a sentence node's `label`
    pub preview_chars: usize,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            min_common_words: 2,
            preview_chars: 50,
        }
    }
}

/// Power iteration budget for eigenvector centrality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorSettings {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for EigenvectorSettings {
    fn default() -> Self {
        let defaults = EigenvectorConfig::default();
        Self {
            max_iterations: defaults.max_iterations,
            tolerance: defaults.tolerance,
        }
    }
}

impl From<&EigenvectorSettings> for EigenvectorConfig {
    fn from(settings: &EigenvectorSettings) -> Self {
        EigenvectorConfig {
            max_iterations: settings.max_iterations,
            tolerance: settings.tolerance,
        }
    }
}

/// Input size ceilings for the quadratic parts of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Tokens accepted by the co-occurrence builder
    pub max_tokens: usize,
    /// Sentences accepted by the sentence builder (pairwise comparison)
    pub max_sentences: usize,
    /// Largest graph for which diameter and mean path length are computed
    pub max_path_nodes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_tokens: 200_000,
            max_sentences: 5_000,
            max_path_nodes: 20_000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub cooccurrence: CooccurrenceConfig,
    pub sentence: SentenceConfig,
    pub eigenvector: EigenvectorSettings,
    pub limits: LimitsConfig,
}

impl AnalysisConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(source: &str) -> GraphResult<Self> {
        let config: Self =
            serde_yaml::from_str(source).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(source: &str) -> GraphResult<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the eigenvector budget and the size ceilings.
    ///
    /// Builder thresholds accept any value: a window below two words yields
    /// an empty graph and a zero threshold keeps every pair.
    pub fn validate(&self) -> GraphResult<()> {
        if self.eigenvector.max_iterations == 0 {
            return Err(GraphError::InvalidArgument(
                "eigenvector.max_iterations must be at least 1".to_string(),
            ));
        }
        let tolerance = self.eigenvector.tolerance;
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(GraphError::InvalidArgument(format!(
                "eigenvector.tolerance must be positive, got {}",
                self.eigenvector.tolerance
            )));
        }
        let limits = [
            ("limits.max_tokens", self.limits.max_tokens),
            ("limits.max_sentences", self.limits.max_sentences),
            ("limits.max_path_nodes", self.limits.max_path_nodes),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(GraphError::InvalidArgument(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        Ok(())
    }
}
