//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use grafo::prelude::*;
//! ```

pub use crate::compare::{
    compare_bellman_ford, compare_bfs, compare_floyd_warshall, run_spectral, Comparison,
    ComparisonReport, SpectralReport,
};
pub use crate::error::{GrafoError, Result};
pub use crate::graph::{Edge, Graph, GraphConfig, VertexId};
pub use crate::primitives::Matrix;
pub use crate::shortest_path::{
    bellman_ford_edge_list, bellman_ford_matrix, floyd_warshall_chunked, floyd_warshall_rows,
    INFINITY,
};
pub use crate::spectral::SpectralClustering;
pub use crate::traversal::{bfs_edge_list, bfs_matrix};
