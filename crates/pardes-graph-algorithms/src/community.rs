//! Community detection algorithms
//!
//! Connected components via union-find and modularity-maximizing communities
//! via greedy agglomerative merging (Clauset-Newman-Moore).

use super::common::GraphView;
use std::collections::BTreeMap;

/// Union-Find data structure
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    pub fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Connected components, each sorted by index, ordered by their smallest member.
pub fn connected_components<N>(view: &GraphView<N>) -> Vec<Vec<usize>> {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u in 0..n {
        for &v in view.neighbors(u) {
            if u < v {
                uf.union(u, v);
            }
        }
    }

    // Root -> position in output; first sighting fixes the order
    let mut slot: Vec<Option<usize>> = vec![None; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    for i in 0..n {
        let root = uf.find(i);
        match slot[root] {
            Some(pos) => components[pos].push(i),
            None => {
                slot[root] = Some(components.len());
                components.push(vec![i]);
            }
        }
    }

    components
}

/// Newman modularity of a partition, ignoring edge weights.
///
/// Returns 0.0 for a graph without edges.
pub fn modularity<N>(view: &GraphView<N>, communities: &[Vec<usize>]) -> f64 {
    let m = view.edge_count() as f64;
    if m == 0.0 {
        return 0.0;
    }

    let mut membership = vec![usize::MAX; view.node_count];
    for (c, members) in communities.iter().enumerate() {
        for &node in members {
            membership[node] = c;
        }
    }

    communities
        .iter()
        .enumerate()
        .map(|(c, members)| {
            let mut internal_ends = 0usize;
            let mut degree_sum = 0usize;
            for &u in members {
                degree_sum += view.degree(u);
                internal_ends += view
                    .neighbors(u)
                    .iter()
                    .filter(|&&v| membership[v] == c)
                    .count();
            }
            let internal_edges = internal_ends as f64 / 2.0;
            let share = degree_sum as f64 / (2.0 * m);
            internal_edges / m - share * share
        })
        .sum()
}

/// Greedy modularity communities.
///
/// Starts from singletons and repeatedly merges the pair of adjacent communities
/// with the largest modularity gain until no merge improves modularity.
/// Communities are returned largest first; members are sorted by index.
/// A graph without edges yields one singleton per node.
pub fn greedy_modularity_communities<N>(view: &GraphView<N>) -> Vec<Vec<usize>> {
    let n = view.node_count;
    let m = view.edge_count();
    if m == 0 {
        return (0..n).map(|i| vec![i]).collect();
    }

    let half_inv = 1.0 / (2.0 * m as f64);

    // links[i][j]: fraction of edge ends running from community i to community j
    let mut links: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); n];
    for u in 0..n {
        for &v in view.neighbors(u) {
            *links[u].entry(v).or_insert(0.0) += half_inv;
        }
    }
    // share[i]: fraction of all edge ends attached to community i
    let mut share: Vec<f64> = (0..n).map(|i| view.degree(i) as f64 * half_inv).collect();
    let mut members: Vec<Option<Vec<usize>>> = (0..n).map(|i| Some(vec![i])).collect();

    loop {
        let mut best: Option<(f64, usize, usize)> = None;
        for (i, row) in links.iter().enumerate() {
            for (&j, &e_ij) in row.range(i + 1..) {
                let gain = 2.0 * (e_ij - share[i] * share[j]);
                if best.map_or(true, |(top, _, _)| gain > top) {
                    best = Some((gain, i, j));
                }
            }
        }

        let (i, j) = match best {
            Some((gain, i, j)) if gain > 0.0 => (i, j),
            _ => break,
        };

        // Fold community j into i
        let absorbed = std::mem::take(&mut links[j]);
        for (k, e_jk) in absorbed {
            if k == i {
                continue;
            }
            *links[i].entry(k).or_insert(0.0) += e_jk;
            if let Some(e_kj) = links[k].remove(&j) {
                *links[k].entry(i).or_insert(0.0) += e_kj;
            }
        }
        links[i].remove(&j);

        share[i] += share[j];
        share[j] = 0.0;

        let moved = members[j].take().unwrap_or_default();
        if let Some(target) = members[i].as_mut() {
            target.extend(moved);
        }
    }

    let mut communities: Vec<Vec<usize>> = members
        .into_iter()
        .flatten()
        .map(|mut group| {
            group.sort_unstable();
            group
        })
        .collect();
    communities.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
    communities
}
