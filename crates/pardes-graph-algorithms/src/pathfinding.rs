//! Pathfinding algorithms
//!
//! Unweighted breadth-first search: point-to-point paths, single-source hop
//! distances, bounded neighborhoods and all-pairs path length summaries.

use super::common::GraphView;
use std::collections::VecDeque;
use std::hash::Hash;

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns the node sequence from `source` to `target`, both included, or
/// `None` when either endpoint is missing or the endpoints are disconnected.
pub fn bfs<N: Clone + Eq + Hash>(
    view: &GraphView<N>,
    source: &N,
    target: &N,
) -> Option<Vec<N>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    let mut queue = VecDeque::new();
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut visited = vec![false; view.node_count];

    queue.push_back(source_idx);
    visited[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            // Reconstruct path
            let mut path = Vec::new();
            let mut curr = Some(target_idx);
            while let Some(idx) = curr {
                path.push(view.index_to_node[idx].clone());
                curr = parent[idx];
            }
            path.reverse();
            return Some(path);
        }

        for &next_idx in view.neighbors(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// Hop distance from `source_idx` to every node; `None` for unreachable nodes.
pub fn bfs_distances<N>(view: &GraphView<N>, source_idx: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; view.node_count];
    let mut queue = VecDeque::new();

    dist[source_idx] = Some(0);
    queue.push_back((source_idx, 0));

    while let Some((current, d)) = queue.pop_front() {
        for &next in view.neighbors(current) {
            if dist[next].is_none() {
                dist[next] = Some(d + 1);
                queue.push_back((next, d + 1));
            }
        }
    }

    dist
}

/// All nodes within `radius` hops of `origin_idx`, origin included, sorted by index.
pub fn neighborhood<N>(view: &GraphView<N>, origin_idx: usize, radius: usize) -> Vec<usize> {
    let mut seen = vec![false; view.node_count];
    let mut frontier = vec![origin_idx];
    seen[origin_idx] = true;

    for _ in 0..radius {
        let mut next_frontier = Vec::new();
        for &node in &frontier {
            for &next in view.neighbors(node) {
                if !seen[next] {
                    seen[next] = true;
                    next_frontier.push(next);
                }
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    seen.iter()
        .enumerate()
        .filter_map(|(idx, &hit)| hit.then_some(idx))
        .collect()
}

/// Diameter and mean shortest-path length of a connected graph
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLengthSummary {
    pub diameter: usize,
    pub average: f64,
}

/// Runs BFS from every node: O(N * (N + E)).
///
/// Returns `None` for an empty or disconnected graph.
pub fn path_length_summary<N>(view: &GraphView<N>) -> Option<PathLengthSummary> {
    let n = view.node_count;
    if n == 0 {
        return None;
    }

    let mut diameter = 0;
    let mut total: u64 = 0;
    for source in 0..n {
        for dist in bfs_distances(view, source) {
            let d = dist?;
            diameter = diameter.max(d);
            total += d as u64;
        }
    }

    let average = if n > 1 {
        total as f64 / (n * (n - 1)) as f64
    } else {
        0.0
    };

    Some(PathLengthSummary { diameter, average })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::tests::view_from;

    #[test]
    fn test_bfs() {
        // 0 - 1 - 2
        let view = view_from(3, &[(0, 1), (1, 2)]);

        assert_eq!(bfs(&view, &0, &2), Some(vec![0, 1, 2]));

        // Undirected: the reverse direction works too
        assert_eq!(bfs(&view, &2, &0), Some(vec![2, 1, 0]));
    }

    #[test]
    fn test_bfs_disconnected_and_missing() {
        let view = view_from(3, &[(0, 1)]);
        assert!(bfs(&view, &0, &2).is_none());
        assert!(bfs(&view, &0, &42).is_none());

        assert_eq!(bfs(&view, &2, &2), Some(vec![2]));
    }

    #[test]
    fn test_neighborhood_radius() {
        // 0 - 1 - 2 - 3
        let view = view_from(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(neighborhood(&view, 0, 0), vec![0]);
        assert_eq!(neighborhood(&view, 0, 1), vec![0, 1]);
        assert_eq!(neighborhood(&view, 1, 1), vec![0, 1, 2]);
        assert_eq!(neighborhood(&view, 0, 10), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_path_length_summary() {
        let path = view_from(3, &[(0, 1), (1, 2)]);
        let summary = path_length_summary(&path).unwrap();
        assert_eq!(summary.diameter, 2);
        // distances: 1,2,1,1,2,1 over 6 ordered pairs
        assert!((summary.average - 8.0 / 6.0).abs() < 1e-12);

        let split = view_from(3, &[(0, 1)]);
        assert!(path_length_summary(&split).is_none());

        let single = view_from(1, &[]);
        assert_eq!(
            path_length_summary(&single),
            Some(PathLengthSummary { diameter: 0, average: 0.0 })
        );
    }
}
