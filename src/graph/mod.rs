//! Graph store: synthetic weighted undirected graphs in two representations.
//!
//! Every graph carries both a sparse adjacency list and a dense weight matrix
//! over the same vertex set. The sparse, edge-list-driven strategies iterate
//! the adjacency list; the dense, row-chunked strategies scan matrix rows.
//! Both representations are populated symmetrically at construction and never
//! mutated afterwards, so algorithm invocations share the graph without
//! locking.
//!
//! A weight of zero in the dense matrix means "no edge". Edge weights are
//! therefore required to be at least 1, which removes the ambiguity between
//! a zero-weight edge and an absent one.
//!
//! # Examples
//!
//! ```
//! use grafo::graph::Graph;
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1, 4).unwrap();
//! g.add_edge(1, 2, 2).unwrap();
//!
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.weight(1, 0), 4); // undirected
//! assert_eq!(g.weighted_degree(1), 6.0);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{GrafoError, Result};
use crate::primitives::Matrix;

/// Vertex identifier (contiguous integers).
pub type VertexId = usize;

/// Weighted edge endpoint in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Neighbor vertex.
    pub to: VertexId,
    /// Edge weight, always >= 1.
    pub weight: u32,
}

/// Configuration for random graph generation.
///
/// # Examples
///
/// ```
/// use grafo::graph::{Graph, GraphConfig};
///
/// let config = GraphConfig {
///     vertices: 50,
///     density: 0.2,
///     max_weight: 10,
///     seed: Some(42),
/// };
/// let g = Graph::random(&config).unwrap();
/// assert_eq!(g.vertices(), 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of vertices. Zero yields an empty graph.
    pub vertices: usize,
    /// Probability in [0, 1] that any unordered vertex pair is connected.
    pub density: f64,
    /// Upper bound (inclusive) for uniform edge weights; weights are in
    /// `[1, max_weight]`.
    pub max_weight: u32,
    /// Seed for reproducible generation; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertices: 1000,
            density: 0.01,
            max_weight: 10,
            seed: None,
        }
    }
}

impl GraphConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `density` is outside [0, 1] or
    /// `max_weight` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GrafoError::InvalidConfiguration {
                param: "density",
                value: self.density.to_string(),
                constraint: "0.0 <= density <= 1.0",
            });
        }
        if self.max_weight == 0 {
            return Err(GrafoError::InvalidConfiguration {
                param: "max_weight",
                value: self.max_weight.to_string(),
                constraint: "max_weight >= 1",
            });
        }
        Ok(())
    }
}

/// Weighted undirected graph held in both sparse and dense form.
///
/// Invariants, maintained by construction:
/// - `matrix[i][j] == matrix[j][i]` for all i, j
/// - `matrix[i][i] == 0` (no self-loops)
/// - adjacency list and matrix describe the same edge set
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: usize,
    adjacency: Vec<Vec<Edge>>,
    matrix: Matrix<u32>,
    num_edges: usize,
}

impl Graph {
    /// Creates an edgeless graph with the given number of vertices.
    #[must_use]
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            adjacency: vec![Vec::new(); vertices],
            matrix: Matrix::filled(vertices, vertices, 0),
            num_edges: 0,
        }
    }

    /// Generates a random graph: every unordered pair (i, j) with i < j is
    /// connected with probability `density`, weight uniform in
    /// `[1, max_weight]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration fails validation.
    pub fn random(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut g = Self::new(config.vertices);
        for i in 0..config.vertices {
            for j in (i + 1)..config.vertices {
                if rng.gen::<f64>() < config.density {
                    let weight = rng.gen_range(1..=config.max_weight);
                    g.insert_edge(i, j, weight);
                }
            }
        }
        Ok(g)
    }

    /// Adds an undirected edge, updating both representations symmetrically.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVertex` for out-of-range endpoints and
    /// `InvalidConfiguration` for self-loops or zero weights.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: u32) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GrafoError::InvalidConfiguration {
                param: "edge",
                value: format!("({u}, {v})"),
                constraint: "no self-loops",
            });
        }
        if weight == 0 {
            return Err(GrafoError::InvalidConfiguration {
                param: "weight",
                value: "0".to_string(),
                constraint: "weight >= 1 (zero means no edge in the dense matrix)",
            });
        }
        self.insert_edge(u, v, weight);
        Ok(())
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: u32) {
        self.adjacency[u].push(Edge { to: v, weight });
        self.adjacency[v].push(Edge { to: u, weight });
        self.matrix.set(u, v, weight);
        self.matrix.set(v, u, weight);
        self.num_edges += 1;
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Neighbors of `v` in edge-insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v` is out of range; callers validate through
    /// [`Graph::check_vertex`] first.
    #[must_use]
    pub fn neighbors(&self, v: VertexId) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Weight of edge (u, v), or 0 when no edge exists.
    #[must_use]
    pub fn weight(&self, u: VertexId, v: VertexId) -> u32 {
        self.matrix.get(u, v)
    }

    /// Dense weight matrix row for `v`.
    #[must_use]
    pub fn matrix_row(&self, v: VertexId) -> &[u32] {
        self.matrix.row(v)
    }

    /// Sum of incident edge weights of `v`.
    #[must_use]
    pub fn weighted_degree(&self, v: VertexId) -> f64 {
        self.adjacency[v]
            .iter()
            .map(|e| f64::from(e.weight))
            .sum()
    }

    /// Validates a vertex id against this graph.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVertex` if `v >= vertices`.
    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.vertices {
            return Err(GrafoError::InvalidVertex {
                vertex: v,
                vertices: self.vertices,
            });
        }
        Ok(())
    }
}

/// Chunk length for dense row-chunked strategies: the vertex range divided by
/// available parallelism, never below 1.
pub(crate) fn chunk_len(vertices: usize) -> usize {
    (vertices / rayon::current_num_threads()).max(1)
}
