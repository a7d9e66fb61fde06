//! Graph builders
//!
//! Each builder clears the target store and repopulates it from text units:
//! - [`CooccurrenceBuilder`]: words linked by sliding-window co-occurrence
//! - [`SentenceBuilder`]: sentences linked by shared vocabulary

pub mod cooccurrence;
pub mod sentence;

pub use cooccurrence::CooccurrenceBuilder;
pub use sentence::SentenceBuilder;

use serde::Serialize;

/// Outcome of a build call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Text units consumed (tokens or sentences)
    pub units: usize,
    /// Distinct candidate pairs examined
    pub candidate_pairs: usize,
    /// Nodes in the finished graph
    pub nodes: usize,
    /// Edges in the finished graph
    pub edges: usize,
}
