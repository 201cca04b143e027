//! Spectral clustering: Laplacian construction, power-iteration eigenbasis,
//! k-means partitioning.
//!
//! A three-stage pipeline, strictly sequential between stages and parallel
//! inside each:
//!
//! 1. The symmetric-normalized Laplacian `L = I - D^-1/2 A D^-1/2`, rows
//!    built one parallel task per row.
//! 2. An approximate basis of `k` eigenvectors by power iteration with
//!    Gram-Schmidt orthogonalization, double-buffered per iteration.
//! 3. Lloyd-style k-means in the k-dimensional embedding, with a parallel
//!    assignment phase and a sequential centroid update per iteration.
//!
//! The eigensolver is an approximate iterative method running for a fixed
//! iteration count, not a certified decomposition; treat the partition as a
//! heuristic, not exact spectral structure. Output is deterministic for a
//! fixed `random_state`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{GrafoError, Result};
use crate::graph::Graph;
use crate::primitives::Matrix;

#[cfg(test)]
mod tests_spectral_contract;

/// Default power-iteration count for the eigenbasis stage.
pub const DEFAULT_POWER_ITERATIONS: usize = 100;
/// Default Lloyd iteration count for the k-means stage.
pub const DEFAULT_KMEANS_ITERATIONS: usize = 100;

/// Spectral clustering over a weighted undirected graph.
///
/// # Examples
///
/// ```
/// use grafo::graph::{Graph, GraphConfig};
/// use grafo::spectral::SpectralClustering;
///
/// let g = Graph::random(&GraphConfig {
///     vertices: 30,
///     density: 0.2,
///     max_weight: 10,
///     seed: Some(42),
/// }).unwrap();
///
/// let labels = SpectralClustering::new(3)
///     .with_random_state(7)
///     .fit_predict(&g)
///     .unwrap();
///
/// assert_eq!(labels.len(), 30);
/// assert!(labels.iter().all(|&c| c < 3));
/// ```
#[derive(Debug, Clone)]
pub struct SpectralClustering {
    n_clusters: usize,
    power_iterations: usize,
    kmeans_iterations: usize,
    random_state: Option<u64>,
}

impl SpectralClustering {
    /// Creates a spectral clustering model with `n_clusters` target clusters.
    #[must_use]
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            power_iterations: DEFAULT_POWER_ITERATIONS,
            kmeans_iterations: DEFAULT_KMEANS_ITERATIONS,
            random_state: None,
        }
    }

    /// Sets the power-iteration count for the eigenbasis stage.
    #[must_use]
    pub fn with_power_iterations(mut self, iterations: usize) -> Self {
        self.power_iterations = iterations;
        self
    }

    /// Sets the Lloyd iteration count for the k-means stage.
    #[must_use]
    pub fn with_kmeans_iterations(mut self, iterations: usize) -> Self {
        self.kmeans_iterations = iterations;
        self
    }

    /// Sets the random seed for reproducible basis initialization and
    /// centroid seeding.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Runs the full pipeline and returns one cluster id in
    /// `[0, n_clusters)` per vertex.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `n_clusters` is zero or exceeds the
    /// vertex count, and `DegenerateInput` for an empty graph.
    pub fn fit_predict(&self, g: &Graph) -> Result<Vec<usize>> {
        let n = g.vertices();
        if self.n_clusters == 0 {
            return Err(GrafoError::InvalidConfiguration {
                param: "n_clusters",
                value: "0".to_string(),
                constraint: "n_clusters >= 1",
            });
        }
        if n == 0 {
            return Err(GrafoError::DegenerateInput {
                message: "cannot cluster an empty graph".to_string(),
            });
        }
        if self.n_clusters > n {
            return Err(GrafoError::InvalidConfiguration {
                param: "n_clusters",
                value: self.n_clusters.to_string(),
                constraint: "n_clusters <= vertex count",
            });
        }

        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let laplacian = normalized_laplacian(g);
        let basis = eigenbasis(
            &laplacian,
            self.n_clusters,
            self.power_iterations,
            &mut rng,
        );
        Ok(kmeans_partition(
            &basis,
            self.n_clusters,
            self.kmeans_iterations,
            &mut rng,
        ))
    }
}

/// Symmetric-normalized Laplacian of the graph.
///
/// `L[i][i] = 1`; for an edge (i, j), `L[i][j] = -w / sqrt(deg(i) * deg(j))`
/// where `deg` is the weighted degree; 0 elsewhere. Rows are independent and
/// built in parallel.
///
/// An isolated vertex has weighted degree zero and nothing to normalize; its
/// row is all zero except the diagonal 1. No division by zero can occur for
/// off-diagonal entries, since an existing edge gives both endpoints degree
/// at least 1.
#[must_use]
pub fn normalized_laplacian(g: &Graph) -> Matrix<f64> {
    let n = g.vertices();
    let degrees: Vec<f64> = (0..n).map(|v| g.weighted_degree(v)).collect();

    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut row = vec![0.0; n];
            row[i] = 1.0;
            for e in g.neighbors(i) {
                row[e.to] = -f64::from(e.weight) / (degrees[i] * degrees[e.to]).sqrt();
            }
            row
        })
        .collect();

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Matrix::from_vec(n, n, flat).expect("n*n Laplacian")
}

/// Approximate `k`-vector eigenbasis of `laplacian` by power iteration.
///
/// Each iteration computes all `k` replacement vectors in parallel from the
/// previous iteration's finalized basis: multiply by the Laplacian,
/// orthogonalize against lower-indexed vectors of the previous basis
/// (Gram-Schmidt), and normalize to unit length. New vectors land in a
/// separate buffer that replaces the basis only after the iteration's join
/// barrier, so no task ever observes a partially updated vector. A vector
/// whose image collapses to (near) zero norm keeps its previous value.
fn eigenbasis(
    laplacian: &Matrix<f64>,
    k: usize,
    iterations: usize,
    rng: &mut StdRng,
) -> Vec<Vec<f64>> {
    let n = laplacian.n_rows();
    let mut basis: Vec<Vec<f64>> = (0..k)
        .map(|_| (0..n).map(|_| rng.gen::<f64>()).collect())
        .collect();

    for _ in 0..iterations {
        let previous = &basis;
        let next: Vec<Vec<f64>> = (0..k)
            .into_par_iter()
            .map(|i| {
                let mut vector = laplacian.matvec(&previous[i]);

                for lower in previous.iter().take(i) {
                    let projection = dot(&vector, lower);
                    for (x, &b) in vector.iter_mut().zip(lower.iter()) {
                        *x -= projection * b;
                    }
                }

                let norm = dot(&vector, &vector).sqrt();
                if norm <= f64::EPSILON {
                    return previous[i].clone();
                }
                for x in &mut vector {
                    *x /= norm;
                }
                vector
            })
            .collect();
        basis = next;
    }

    basis
}

/// Lloyd k-means over the spectral embedding.
///
/// Vertex `v` is the point `(basis[0][v], ..., basis[k-1][v])`. Centroids
/// seed from randomly sampled vertex points. Each iteration assigns every
/// vertex to its nearest centroid by squared Euclidean distance (parallel,
/// centroids read-only), then recomputes centroids as assignment means after
/// the join barrier. An empty cluster keeps its previous centroid.
fn kmeans_partition(
    basis: &[Vec<f64>],
    k: usize,
    iterations: usize,
    rng: &mut StdRng,
) -> Vec<usize> {
    let dim = basis.len();
    let n = basis[0].len();

    let point = |v: usize| -> Vec<f64> { (0..dim).map(|d| basis[d][v]).collect() };

    let mut centroids: Vec<Vec<f64>> = (0..k).map(|_| point(rng.gen_range(0..n))).collect();
    let mut assignments = vec![0usize; n];

    for _ in 0..iterations {
        // Assignment phase: read-only against the current centroids.
        assignments = (0..n)
            .into_par_iter()
            .map(|v| {
                let p = point(v);
                let mut best = 0;
                let mut best_dist = f64::INFINITY;
                for (c, centroid) in centroids.iter().enumerate() {
                    let d = squared_distance(&p, centroid);
                    if d < best_dist {
                        best_dist = d;
                        best = c;
                    }
                }
                best
            })
            .collect();

        // Update phase: only after every assignment is finalized.
        let mut sums = vec![vec![0.0; dim]; k];
        let mut counts = vec![0usize; k];
        for (v, &cluster) in assignments.iter().enumerate() {
            counts[cluster] += 1;
            for d in 0..dim {
                sums[cluster][d] += basis[d][v];
            }
        }
        for (c, sum) in sums.into_iter().enumerate() {
            if counts[c] > 0 {
                centroids[c] = sum.into_iter().map(|s| s / counts[c] as f64).collect();
            }
        }
    }

    assignments
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum()
}
