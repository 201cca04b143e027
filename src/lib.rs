//! Grafo: parallel graph analytics with competing execution strategies.
//!
//! Grafo computes reachability (BFS), single-source shortest paths
//! (Bellman-Ford), all-pairs shortest paths (Floyd-Warshall), and community
//! structure (spectral clustering) over synthetic weighted undirected
//! graphs. Every algorithm ships two parallel strategies over the same
//! shared graph state, a sparse edge-list-driven one and a dense
//! matrix-row-chunked one, so an operator can compare correctness and
//! wall-clock throughput on graphs of configurable size and density.
//!
//! # Quick Start
//!
//! ```
//! use grafo::prelude::*;
//!
//! // 6-cycle: 0-1-2-3-4-5-0, all weights 1.
//! let mut g = Graph::new(6);
//! for v in 0..6 {
//!     g.add_edge(v, (v + 1) % 6, 1).unwrap();
//! }
//!
//! // Both BFS strategies visit all six vertices, start first.
//! let order = bfs_edge_list(&g, 0).unwrap();
//! assert_eq!(order[0], 0);
//! assert_eq!(order.len(), 6);
//!
//! // Both Bellman-Ford strategies agree exactly.
//! let dist = bellman_ford_matrix(&g, 0).unwrap();
//! assert_eq!(dist, vec![0, 1, 2, 3, 2, 1]);
//!
//! // All-pairs distances are consistent with single-source ones.
//! let all = floyd_warshall_chunked(&g);
//! assert_eq!(all.get(0, 3), 3);
//! ```
//!
//! # Modules
//!
//! - [`graph`]: Graph store (sparse adjacency + dense matrix) and random generation
//! - [`traversal`]: BFS engine, two strategies
//! - [`shortest_path`]: Bellman-Ford and Floyd-Warshall engines, two strategies each
//! - [`spectral`]: Laplacian → power iteration → k-means pipeline
//! - [`compare`]: harness that times and cross-validates strategy pairs
//! - [`primitives`]: dense matrix storage
//!
//! # Concurrency model
//!
//! Fork-join throughout: every level, round, and `k` step spawns a bounded
//! set of rayon tasks and joins them before the next phase. Shared mutable
//! state is either partitioned into disjoint chunks or claimed through
//! atomics; per-round change flags are task-local and OR-reduced after the
//! join, never shared hot booleans.

#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod primitives;
pub mod shortest_path;
pub mod spectral;
pub mod traversal;

pub use error::{GrafoError, Result};
pub use graph::{Graph, GraphConfig};
pub use primitives::Matrix;
