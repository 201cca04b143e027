//! Harness for timing and cross-validating strategy pairs.
//!
//! Each comparison runs both strategies of one algorithm on the same graph,
//! wall-clocks them, and checks that the results are semantically equivalent:
//! the same visited set for BFS (batch order is implementation-defined),
//! exact distance equality for the shortest-path algorithms. Spectral
//! clustering has a single pipeline, so it is timed and summarized rather
//! than compared.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::primitives::Matrix;
use crate::shortest_path::{
    bellman_ford_edge_list, bellman_ford_matrix, floyd_warshall_chunked, floyd_warshall_rows,
};
use crate::spectral::SpectralClustering;
use crate::traversal::{bfs_edge_list, bfs_matrix};

/// One timed strategy run.
#[derive(Debug, Clone)]
pub struct TimedRun<T> {
    /// Strategy name, e.g. `"edge-list"` or `"matrix"`.
    pub strategy: &'static str,
    /// What the strategy produced.
    pub result: T,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

fn timed<T>(strategy: &'static str, run: impl FnOnce() -> T) -> TimedRun<T> {
    let started = Instant::now();
    let result = run();
    TimedRun {
        strategy,
        result,
        elapsed: started.elapsed(),
    }
}

/// Outcome of running both strategies of one algorithm.
#[derive(Debug, Clone)]
pub struct Comparison<T> {
    /// Algorithm name.
    pub algorithm: &'static str,
    /// The regular run: one task per vertex, frontier vertex, or row.
    pub regular: TimedRun<T>,
    /// The matrix run: dense, contiguous-chunk partitioning.
    pub matrix: TimedRun<T>,
    /// Whether the two results are semantically equivalent.
    pub agree: bool,
}

impl<T> Comparison<T> {
    /// Regular-over-matrix speedup: how many times faster the matrix
    /// strategy finished. Values above 1 mean the matrix strategy won.
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let matrix = self.matrix.elapsed.as_secs_f64();
        if matrix == 0.0 {
            return f64::INFINITY;
        }
        self.regular.elapsed.as_secs_f64() / matrix
    }

    /// Serializable timing summary, without the result payloads.
    #[must_use]
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            algorithm: self.algorithm,
            regular_ms: self.regular.elapsed.as_secs_f64() * 1e3,
            matrix_ms: self.matrix.elapsed.as_secs_f64() * 1e3,
            speedup: self.speedup(),
            agree: self.agree,
        }
    }
}

/// Flat, serializable summary of a [`Comparison`].
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Algorithm name.
    pub algorithm: &'static str,
    /// Regular strategy wall-clock milliseconds.
    pub regular_ms: f64,
    /// Matrix strategy wall-clock milliseconds.
    pub matrix_ms: f64,
    /// Regular-over-matrix speedup factor.
    pub speedup: f64,
    /// Whether the strategies agreed.
    pub agree: bool,
}

/// Summary of a spectral clustering run.
#[derive(Debug, Clone, Serialize)]
pub struct SpectralReport {
    /// Wall-clock milliseconds for the whole pipeline.
    pub elapsed_ms: f64,
    /// Vertices per cluster, indexed by cluster id.
    pub cluster_sizes: Vec<usize>,
    /// Cluster id per vertex.
    pub labels: Vec<usize>,
}

/// Runs and cross-validates both BFS strategies.
///
/// Agreement means both orders start at `start` and visit exactly the same
/// vertex set; order within a level batch is not compared.
///
/// # Errors
///
/// Returns `InvalidVertex` if `start` is out of range.
pub fn compare_bfs(g: &Graph, start: VertexId) -> Result<Comparison<Vec<VertexId>>> {
    g.check_vertex(start)?;
    let regular = timed("edge-list", || bfs_edge_list(g, start));
    let matrix = timed("matrix", || bfs_matrix(g, start));

    let regular = TimedRun {
        strategy: regular.strategy,
        result: regular.result?,
        elapsed: regular.elapsed,
    };
    let matrix = TimedRun {
        strategy: matrix.strategy,
        result: matrix.result?,
        elapsed: matrix.elapsed,
    };

    let agree = same_visitation(&regular.result, &matrix.result, start);
    Ok(Comparison {
        algorithm: "bfs",
        regular,
        matrix,
        agree,
    })
}

fn same_visitation(a: &[VertexId], b: &[VertexId], start: VertexId) -> bool {
    if a.first() != Some(&start) || b.first() != Some(&start) {
        return false;
    }
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}

/// Runs and cross-validates both Bellman-Ford strategies.
///
/// Agreement is exact integer equality of every distance.
///
/// # Errors
///
/// Returns `InvalidVertex` if `start` is out of range.
pub fn compare_bellman_ford(g: &Graph, start: VertexId) -> Result<Comparison<Vec<u64>>> {
    g.check_vertex(start)?;
    let regular = timed("edge-list", || bellman_ford_edge_list(g, start));
    let matrix = timed("matrix", || bellman_ford_matrix(g, start));

    let regular = TimedRun {
        strategy: regular.strategy,
        result: regular.result?,
        elapsed: regular.elapsed,
    };
    let matrix = TimedRun {
        strategy: matrix.strategy,
        result: matrix.result?,
        elapsed: matrix.elapsed,
    };

    let agree = regular.result == matrix.result;
    Ok(Comparison {
        algorithm: "bellman-ford",
        regular,
        matrix,
        agree,
    })
}

/// Runs and cross-validates both Floyd-Warshall strategies.
///
/// Agreement is equality of the full distance matrices.
#[must_use]
pub fn compare_floyd_warshall(g: &Graph) -> Comparison<Matrix<u64>> {
    let regular = timed("row-tasks", || floyd_warshall_rows(g));
    let matrix = timed("chunked", || floyd_warshall_chunked(g));
    let agree = regular.result == matrix.result;
    Comparison {
        algorithm: "floyd-warshall",
        regular,
        matrix,
        agree,
    }
}

/// Times the spectral clustering pipeline and tallies cluster sizes.
///
/// # Errors
///
/// Propagates pipeline errors (`InvalidConfiguration`, `DegenerateInput`).
pub fn run_spectral(g: &Graph, k: usize, seed: Option<u64>) -> Result<SpectralReport> {
    let mut model = SpectralClustering::new(k);
    if let Some(seed) = seed {
        model = model.with_random_state(seed);
    }

    let started = Instant::now();
    let labels = model.fit_predict(g)?;
    let elapsed = started.elapsed();

    let mut cluster_sizes = vec![0usize; k];
    for &label in &labels {
        cluster_sizes[label] += 1;
    }

    Ok(SpectralReport {
        elapsed_ms: elapsed.as_secs_f64() * 1e3,
        cluster_sizes,
        labels,
    })
}
