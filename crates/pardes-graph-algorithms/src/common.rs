//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

use std::collections::HashMap;
use std::hash::Hash;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// The view is unweighted: every algorithm here works on hop counts.
/// Every undirected edge `{u, v}` is stored twice, once in the row of each endpoint.
/// Rows are sorted by neighbor index so adjacency checks can binary search.
#[derive(Debug, Clone)]
pub struct GraphView<N> {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to the caller's node identifier
    pub index_to_node: Vec<N>,
    /// Mapping from node identifier to dense index
    pub node_to_index: HashMap<N, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,

    edge_count: usize,
}

impl<N: Clone + Eq + Hash> GraphView<N> {
    /// Build a view from a node list and `(u, v)` index pairs.
    ///
    /// Each unordered pair must be supplied once. Self loops and out-of-range
    /// indices are skipped.
    pub fn from_edges<I>(nodes: Vec<N>, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let node_count = nodes.len();
        let mut node_to_index = HashMap::with_capacity(node_count);
        for (idx, node) in nodes.iter().enumerate() {
            node_to_index.insert(node.clone(), idx);
        }

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut edge_count = 0;
        for (u, v) in edges {
            if u == v || u >= node_count || v >= node_count {
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
            edge_count += 1;
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(edge_count * 2);

        offsets.push(0);
        for mut row in adjacency {
            row.sort_unstable();
            targets.extend(row);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node: nodes,
            node_to_index,
            offsets,
            targets,
            edge_count,
        }
    }

    /// Dense index of a node identifier
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.node_to_index.get(node).copied()
    }
}

impl<N> GraphView<N> {
    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get neighbors of a node, sorted by index
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Check whether `u` and `v` are adjacent
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }
}
