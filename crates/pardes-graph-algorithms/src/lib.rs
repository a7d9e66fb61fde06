pub mod common;
pub mod centrality;
pub mod community;
pub mod pathfinding;
pub mod topology;

pub use common::GraphView;
pub use centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
    ConvergenceError, EigenvectorConfig,
};
pub use community::{connected_components, greedy_modularity_communities, modularity, UnionFind};
pub use pathfinding::{bfs, bfs_distances, neighborhood, path_length_summary, PathLengthSummary};
pub use topology::{average_clustering, count_triangles, local_clustering};
