//! Graph topology analysis algorithms
//!
//! Triangle counting and local clustering coefficients.

use super::common::GraphView;

/// Triangle Counting
///
/// Returns total number of triangles in the graph; each triangle is counted once.
pub fn count_triangles<N>(view: &GraphView<N>) -> usize {
    let mut triangle_count = 0;

    // To avoid overcounting, we only consider nodes with indices u < v < w.
    for u in 0..view.node_count {
        for &v in view.neighbors(u) {
            if v <= u {
                continue;
            }
            for &w in view.neighbors(v) {
                if w <= v {
                    continue;
                }
                if view.has_edge(u, w) {
                    triangle_count += 1;
                }
            }
        }
    }

    triangle_count
}

/// Local clustering coefficient of every node.
///
/// Fraction of a node's neighbor pairs that are themselves adjacent; nodes
/// with fewer than two neighbors score 0.0.
pub fn local_clustering<N>(view: &GraphView<N>) -> Vec<f64> {
    (0..view.node_count)
        .map(|u| {
            let neighbors = view.neighbors(u);
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }
            let mut links = 0usize;
            for (i, &a) in neighbors.iter().enumerate() {
                for &b in &neighbors[i + 1..] {
                    if view.has_edge(a, b) {
                        links += 1;
                    }
                }
            }
            2.0 * links as f64 / (k * (k - 1)) as f64
        })
        .collect()
}

/// Mean local clustering coefficient over all nodes; 0.0 for an empty graph.
pub fn average_clustering<N>(view: &GraphView<N>) -> f64 {
    if view.node_count == 0 {
        return 0.0;
    }
    local_clustering(view).iter().sum::<f64>() / view.node_count as f64
}
