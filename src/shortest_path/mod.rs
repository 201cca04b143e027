//! Shortest paths with two competing parallel strategies per algorithm.
//!
//! Single-source distances come from Bellman-Ford, all-pairs distances from
//! Floyd-Warshall. Each algorithm has a sparse, edge-list-driven strategy and
//! a dense, matrix-row-chunked strategy; both members of a pair return
//! identical distances for the same input.
//!
//! Unreached vertices carry the sentinel [`INFINITY`]. Every relaxation
//! checks for the sentinel before adding a weight, so the sentinel can never
//! overflow into a finite-looking distance.
//!
//! Round and `k`-step ordering is enforced by join barriers: a round's
//! relaxations all complete before the next round starts. Within a round,
//! writes are either monotone atomic minima (edge-list Bellman-Ford) or
//! disjoint per-chunk buffers (everything else), so results do not depend on
//! task scheduling.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;

use crate::error::Result;
use crate::graph::{chunk_len, Graph, VertexId};
use crate::primitives::Matrix;

#[cfg(test)]
mod tests_distance_contract;

/// Sentinel distance for unreached vertices.
pub const INFINITY: u64 = u64::MAX;

/// Single-source shortest distances via the sparse, edge-list-driven
/// Bellman-Ford strategy.
///
/// Runs at most `vertices - 1` relaxation rounds (the standard bound for
/// graphs without negative cycles), stopping early once a full round improves
/// nothing. Each round spawns one task per vertex; every task relaxes its
/// incident edges against a shared atomic distance array with `fetch_min`,
/// so concurrent candidates for the same target resolve to the smallest
/// value no matter how the writes interleave. Improvement flags are local to
/// each task and OR-reduced after the round's join barrier.
///
/// # Errors
///
/// Returns `InvalidVertex` if `start` is out of range.
///
/// # Examples
///
/// ```
/// use grafo::graph::Graph;
/// use grafo::shortest_path::{bellman_ford_edge_list, INFINITY};
///
/// let mut g = Graph::new(4);
/// g.add_edge(0, 1, 3).unwrap();
/// g.add_edge(1, 2, 2).unwrap();
///
/// let dist = bellman_ford_edge_list(&g, 0).unwrap();
/// assert_eq!(dist, vec![0, 3, 5, INFINITY]);
/// ```
pub fn bellman_ford_edge_list(g: &Graph, start: VertexId) -> Result<Vec<u64>> {
    g.check_vertex(start)?;
    let n = g.vertices();

    let dist: Vec<AtomicU64> = (0..n).map(|_| AtomicU64::new(INFINITY)).collect();
    dist[start].store(0, Ordering::Relaxed);

    for _round in 1..n {
        let changed = (0..n)
            .into_par_iter()
            .map(|v| {
                // Distance of v frozen per task; a stale read only delays an
                // improvement to a later round, it never produces a value
                // below the true minimum.
                let dv = dist[v].load(Ordering::Relaxed);
                if dv == INFINITY {
                    return false;
                }
                let mut improved = false;
                for e in g.neighbors(v) {
                    let candidate = dv + u64::from(e.weight);
                    let previous = dist[e.to].fetch_min(candidate, Ordering::Relaxed);
                    if candidate < previous {
                        improved = true;
                    }
                }
                improved
            })
            .reduce(|| false, |a, b| a || b);

        if !changed {
            break;
        }
    }

    Ok(dist.into_iter().map(AtomicU64::into_inner).collect())
}

/// Single-source shortest distances via the dense, matrix-row-chunked
/// Bellman-Ford strategy.
///
/// Double-buffered: every round reads the previous round's frozen distance
/// snapshot and writes a fresh one through disjoint contiguous chunks of
/// `max(1, vertices / threads)` target vertices, so there are no intra-round
/// read/write races at all. The new snapshot replaces the old at the round's
/// join barrier.
///
/// # Errors
///
/// Returns `InvalidVertex` if `start` is out of range.
pub fn bellman_ford_matrix(g: &Graph, start: VertexId) -> Result<Vec<u64>> {
    g.check_vertex(start)?;
    let n = g.vertices();

    let mut dist = vec![INFINITY; n];
    dist[start] = 0;

    for _round in 1..n {
        let mut next = dist.clone();
        let chunk = chunk_len(n);
        let frozen = &dist;

        let changed = next
            .par_chunks_mut(chunk)
            .enumerate()
            .map(|(ci, targets)| {
                let base = ci * chunk;
                let mut improved = false;
                for (offset, cell) in targets.iter_mut().enumerate() {
                    let v = base + offset;
                    for (u, &w) in g.matrix_row(v).iter().enumerate() {
                        if w != 0 && frozen[u] != INFINITY {
                            let candidate = frozen[u] + u64::from(w);
                            if candidate < *cell {
                                *cell = candidate;
                                improved = true;
                            }
                        }
                    }
                }
                improved
            })
            .reduce(|| false, |a, b| a || b);

        dist = next;
        if !changed {
            break;
        }
    }

    Ok(dist)
}

/// All-pairs distance matrix initialized from the graph: 0 on the diagonal,
/// edge weights where edges exist, sentinel elsewhere. The diagonal is the
/// one place the zero-means-no-edge convention is overridden.
fn all_pairs_init(g: &Graph) -> Vec<u64> {
    let n = g.vertices();
    let mut dist = vec![INFINITY; n * n];
    for i in 0..n {
        dist[i * n + i] = 0;
        for e in g.neighbors(i) {
            dist[i * n + e.to] = u64::from(e.weight);
        }
    }
    dist
}

/// All-pairs shortest distances via Floyd-Warshall with one parallel task
/// per row.
///
/// The outer loop over intermediate vertex `k` is strictly sequential (every
/// `k` step depends on the previous step's fully updated matrix); the
/// per-`k` join barrier enforces that. Within one `k`, rows are relaxed
/// independently, one task per row, against a snapshot of row `k` taken
/// before the step. No two tasks write the same row.
///
/// # Examples
///
/// ```
/// use grafo::graph::Graph;
/// use grafo::shortest_path::floyd_warshall_rows;
///
/// let mut g = Graph::new(3);
/// g.add_edge(0, 1, 5).unwrap();
/// g.add_edge(1, 2, 5).unwrap();
/// g.add_edge(0, 2, 20).unwrap();
///
/// let dist = floyd_warshall_rows(&g);
/// assert_eq!(dist.get(0, 2), 10); // via vertex 1
/// ```
#[must_use]
pub fn floyd_warshall_rows(g: &Graph) -> Matrix<u64> {
    let n = g.vertices();
    if n == 0 {
        return Matrix::filled(0, 0, 0);
    }
    let mut dist = all_pairs_init(g);

    for k in 0..n {
        // Row k is stable within step k: relaxing dist[k][j] through k adds
        // dist[k][k] == 0. Snapshot it so row tasks need no shared reads.
        let row_k: Vec<u64> = dist[k * n..(k + 1) * n].to_vec();

        dist.par_chunks_mut(n).for_each(|row| {
            for j in 0..n {
                if row[k] != INFINITY && row_k[j] != INFINITY {
                    let candidate = row[k] + row_k[j];
                    if candidate < row[j] {
                        row[j] = candidate;
                    }
                }
            }
        });
    }

    Matrix::from_vec(n, n, dist).expect("n*n distances")
}

/// All-pairs shortest distances via Floyd-Warshall with contiguous row
/// chunks.
///
/// Same sequential `k` loop and row-`k` snapshot as [`floyd_warshall_rows`],
/// but rows are grouped into chunks of `max(1, vertices / threads)` to bound
/// fan-out, and a row whose `dist[i][k]` is the sentinel is skipped without
/// scanning its columns.
#[must_use]
pub fn floyd_warshall_chunked(g: &Graph) -> Matrix<u64> {
    let n = g.vertices();
    if n == 0 {
        return Matrix::filled(0, 0, 0);
    }
    let mut dist = all_pairs_init(g);
    let chunk = chunk_len(n);

    for k in 0..n {
        let row_k: Vec<u64> = dist[k * n..(k + 1) * n].to_vec();

        dist.par_chunks_mut(chunk * n).for_each(|rows| {
            for row in rows.chunks_mut(n) {
                let through_k = row[k];
                if through_k == INFINITY {
                    continue;
                }
                for (j, cell) in row.iter_mut().enumerate() {
                    if row_k[j] != INFINITY {
                        let candidate = through_k + row_k[j];
                        if candidate < *cell {
                            *cell = candidate;
                        }
                    }
                }
            }
        });
    }

    Matrix::from_vec(n, n, dist).expect("n*n distances")
}
