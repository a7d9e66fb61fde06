//! Node centrality algorithms
//!
//! All functions return one score per dense index, aligned with
//! `GraphView::index_to_node`. Edge weights are ignored.

use super::common::GraphView;
use super::pathfinding::bfs_distances;
use ndarray::Array1;
use std::collections::VecDeque;
use thiserror::Error;

/// Power iteration ran out of iterations before the scores settled
#[derive(Error, Debug, Clone, PartialEq)]
#[error("eigenvector centrality did not converge within {iterations} iterations")]
pub struct ConvergenceError {
    pub iterations: usize,
}

/// Eigenvector centrality configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenvectorConfig {
    /// Iteration budget
    pub max_iterations: usize,
    /// Per-node tolerance; converged when the L1 change is below `node_count * tolerance`
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// Degree centrality: `degree / (n - 1)`.
///
/// A single-node graph scores 1.0.
pub fn degree_centrality<N>(view: &GraphView<N>) -> Vec<f64> {
    let n = view.node_count;
    if n <= 1 {
        return vec![1.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n).map(|idx| view.degree(idx) as f64 * scale).collect()
}

/// Betweenness centrality (Brandes, unweighted).
///
/// Normalized by the number of node pairs that exclude the scored node.
pub fn betweenness_centrality<N>(view: &GraphView<N>) -> Vec<f64> {
    const UNVISITED: usize = usize::MAX;

    let n = view.node_count;
    let mut centrality = vec![0.0; n];

    let mut stack = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![UNVISITED; n];
    let mut delta = vec![0.0f64; n];
    let mut queue = VecDeque::new();

    for s in 0..n {
        stack.clear();
        predecessors.iter_mut().for_each(Vec::clear);
        sigma.fill(0.0);
        dist.fill(UNVISITED);
        delta.fill(0.0);

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in view.neighbors(v) {
                if dist[w] == UNVISITED {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    // Each unordered pair was visited from both ends, matching the ordered-pair denominator.
    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        centrality.iter_mut().for_each(|c| *c *= scale);
    }

    centrality
}

/// Closeness centrality: inverse of the mean hop distance to reachable nodes.
///
/// Isolated nodes score 0.0.
pub fn closeness_centrality<N>(view: &GraphView<N>) -> Vec<f64> {
    (0..view.node_count)
        .map(|source| {
            let (reached, total) = bfs_distances(view, source)
                .into_iter()
                .flatten()
                .filter(|&d| d > 0)
                .fold((0usize, 0usize), |(count, sum), d| (count + 1, sum + d));
            if total > 0 {
                reached as f64 / total as f64
            } else {
                0.0
            }
        })
        .collect()
}

/// Eigenvector centrality by power iteration on `A + I`.
///
/// The identity shift keeps bipartite graphs from oscillating. Scores are
/// L2-normalized.
pub fn eigenvector_centrality<N>(
    view: &GraphView<N>,
    config: &EigenvectorConfig,
) -> Result<Vec<f64>, ConvergenceError> {
    let n = view.node_count;
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut x = Array1::from_elem(n, 1.0 / n as f64);
    let threshold = n as f64 * config.tolerance;

    for _ in 0..config.max_iterations {
        let last = x.clone();
        for u in 0..n {
            for &v in view.neighbors(u) {
                x[v] += last[u];
            }
        }

        let norm = x.dot(&x).sqrt();
        let norm = if norm > 0.0 { norm } else { 1.0 };
        x.mapv_inplace(|value| value / norm);

        let change: f64 = (&x - &last).mapv(f64::abs).sum();
        if change < threshold {
            return Ok(x.to_vec());
        }
    }

    Err(ConvergenceError {
        iterations: config.max_iterations,
    })
}
