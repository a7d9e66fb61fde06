//! Graph algorithms module
//!
//! Algorithms are implemented in the `pardes-graph-algorithms` crate.
//! This module provides the integration/adapter layer: it projects a
//! [`GraphStore`] into a dense [`GraphView`] and maps results back to
//! [`NodeId`]s. Nothing here mutates the store.

pub mod centrality;
pub mod statistics;

use crate::graph::{GraphStore, NodeId};
use indexmap::IndexSet;
use pardes_graph_algorithms::GraphView;

// Re-export algorithms
pub use pardes_graph_algorithms::{
    average_clustering, betweenness_centrality, bfs, closeness_centrality, connected_components,
    count_triangles, degree_centrality, eigenvector_centrality, greedy_modularity_communities,
    path_length_summary, ConvergenceError, EigenvectorConfig,
};

pub use centrality::{rank_central_concepts, CentralityKind, CentralityRanking};
pub use statistics::{graph_statistics, GraphStatistics};

/// Build a GraphView from the store for algorithm execution.
///
/// Dense indices follow node insertion order. The view is unweighted; edge
/// weights stay in the store.
pub fn build_view(store: &GraphStore) -> GraphView<NodeId> {
    let nodes: Vec<NodeId> = store.node_ids().cloned().collect();
    let edges = store.edges().filter_map(|edge| {
        let u = store.node_position(&edge.source)?;
        let v = store.node_position(&edge.target)?;
        Some((u, v))
    });
    GraphView::from_edges(nodes, edges)
}

fn to_ids(view: &GraphView<NodeId>, indices: impl IntoIterator<Item = usize>) -> Vec<NodeId> {
    indices
        .into_iter()
        .map(|idx| view.index_to_node[idx].clone())
        .collect()
}

/// Greedy modularity communities, largest first, members in insertion order.
pub fn find_communities(store: &GraphStore) -> Vec<Vec<NodeId>> {
    let view = build_view(store);
    greedy_modularity_communities(&view)
        .into_iter()
        .map(|community| to_ids(&view, community))
        .collect()
}

/// Connected components, ordered by their earliest inserted member.
pub fn find_components(store: &GraphStore) -> Vec<Vec<NodeId>> {
    let view = build_view(store);
    connected_components(&view)
        .into_iter()
        .map(|component| to_ids(&view, component))
        .collect()
}

/// Modularity of a partition of the store's nodes; unknown identifiers are ignored.
pub fn partition_modularity(store: &GraphStore, communities: &[Vec<NodeId>]) -> f64 {
    let view = build_view(store);
    let indexed: Vec<Vec<usize>> = communities
        .iter()
        .map(|community| community.iter().filter_map(|id| view.index_of(id)).collect())
        .collect();
    pardes_graph_algorithms::modularity(&view, &indexed)
}

/// Unweighted shortest path, endpoints included.
///
/// `None` when either endpoint is absent or the two are disconnected.
pub fn shortest_path(store: &GraphStore, source: &NodeId, target: &NodeId) -> Option<Vec<NodeId>> {
    if !store.has_node(source) || !store.has_node(target) {
        return None;
    }
    let view = build_view(store);
    bfs(&view, source, target)
}

/// Every node within `radius` hops of `origin`, origin included.
///
/// Empty when `origin` is absent.
pub fn neighborhood(store: &GraphStore, origin: &NodeId, radius: usize) -> IndexSet<NodeId> {
    let view = build_view(store);
    match view.index_of(origin) {
        Some(idx) => pardes_graph_algorithms::neighborhood(&view, idx, radius)
            .into_iter()
            .map(|i| view.index_to_node[i].clone())
            .collect(),
        None => IndexSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyMap;

    fn path_store() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_edge("a", "b", PropertyMap::new()).unwrap();
        store.add_edge("b", "c", PropertyMap::new()).unwrap();
        store
    }

    #[test]
    fn test_graph_view_projection() {
        let mut store = path_store();
        store.add_node("loner", PropertyMap::new());

        let view = build_view(&store);
        assert_eq!(view.node_count, 4);
        assert_eq!(view.edge_count(), 2);
        assert_eq!(view.index_of(&"b".into()), Some(1));
        assert_eq!(view.degree(1), 2);
        assert_eq!(view.degree(3), 0);
    }

    #[test]
    fn test_shortest_path() {
        let store = path_store();
        let path = shortest_path(&store, &"a".into(), &"c".into()).unwrap();
        assert_eq!(path, vec![NodeId::name("a"), NodeId::name("b"), NodeId::name("c")]);

        assert!(shortest_path(&store, &"a".into(), &"missing".into()).is_none());
    }

    #[test]
    fn test_neighborhood() {
        let store = path_store();
        let one: Vec<NodeId> = neighborhood(&store, &"a".into(), 1).into_iter().collect();
        assert_eq!(one, vec![NodeId::name("a"), NodeId::name("b")]);

        assert_eq!(neighborhood(&store, &"a".into(), 0).len(), 1);
        assert!(neighborhood(&store, &"nowhere".into(), 3).is_empty());
    }

    #[test]
    fn test_components_and_modularity() {
        let mut store = path_store();
        store.add_edge("x", "y", PropertyMap::new()).unwrap();

        let components = find_components(&store);
        assert_eq!(components.len(), 2);
        assert_eq!(components[1], vec![NodeId::name("x"), NodeId::name("y")]);

        let q = partition_modularity(&store, &components);
        assert!(q > 0.0);
    }
}
