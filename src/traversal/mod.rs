//! Breadth-first search with two competing parallel strategies.
//!
//! Both strategies expand the graph level by level and join all worker tasks
//! at a barrier before the next level starts, so the visitation order is
//! always a valid BFS order: the start vertex first, then each level's
//! discoveries as one batch. Order within a batch depends on task merge order
//! and is not significant.
//!
//! - [`bfs_edge_list`] spawns one task per frontier vertex, each scanning its
//!   adjacency list. Suits sparse graphs; fan-out grows with the frontier.
//! - [`bfs_matrix`] splits the vertex range into contiguous chunks, one task
//!   per chunk, each scanning full matrix rows of its active vertices.
//!   Bounded fan-out regardless of frontier size.
//!
//! Racing discoveries of the same vertex are resolved by an atomic
//! test-and-set claim on the shared visited array: the first task to flip the
//! flag owns the vertex, every other task backs off, so each vertex enters
//! the result exactly once.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::error::Result;
use crate::graph::{chunk_len, Graph, VertexId};

#[cfg(test)]
mod tests_bfs_contract;

/// Claims `v` in the shared visited array. Returns true exactly once per
/// vertex across all racing tasks.
///
/// Relaxed ordering suffices: the flag guards no other data, and the level
/// join barrier publishes all discoveries before the next level reads them.
fn claim(visited: &[AtomicBool], v: VertexId) -> bool {
    visited[v]
        .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
}

/// BFS visitation order via the sparse, edge-list-driven strategy.
///
/// Each level runs one parallel task per frontier vertex; each task scans
/// its adjacency list and claims unvisited neighbors. The per-task local
/// discovery lists are merged into the next frontier after the level's join
/// barrier.
///
/// # Errors
///
/// Returns `InvalidVertex` if `start` is out of range.
///
/// # Examples
///
/// ```
/// use grafo::graph::Graph;
/// use grafo::traversal::bfs_edge_list;
///
/// let mut g = Graph::new(4);
/// g.add_edge(0, 1, 1).unwrap();
/// g.add_edge(1, 2, 1).unwrap();
///
/// let order = bfs_edge_list(&g, 0).unwrap();
/// assert_eq!(order, vec![0, 1, 2]); // vertex 3 unreachable
/// ```
pub fn bfs_edge_list(g: &Graph, start: VertexId) -> Result<Vec<VertexId>> {
    g.check_vertex(start)?;
    let n = g.vertices();

    let visited: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();
    visited[start].store(true, Ordering::Relaxed);

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut frontier = vec![start];

    while !frontier.is_empty() {
        // One task per frontier vertex; collect() is the level barrier.
        let discovered: Vec<Vec<VertexId>> = frontier
            .par_iter()
            .map(|&v| {
                let mut local = Vec::new();
                for e in g.neighbors(v) {
                    if claim(&visited, e.to) {
                        local.push(e.to);
                    }
                }
                local
            })
            .collect();

        frontier = discovered.into_iter().flatten().collect();
        order.extend_from_slice(&frontier);
    }

    Ok(order)
}

/// BFS visitation order via the dense, matrix-row-chunked strategy.
///
/// Maintains a boolean current-level mask over all vertices. Each round, the
/// vertex range is split into contiguous chunks of
/// `max(1, vertices / threads)`; each chunk task scans the full matrix row of
/// every active vertex in its chunk and claims newly reached columns.
/// Terminates when a round discovers nothing.
///
/// # Errors
///
/// Returns `InvalidVertex` if `start` is out of range.
pub fn bfs_matrix(g: &Graph, start: VertexId) -> Result<Vec<VertexId>> {
    g.check_vertex(start)?;
    let n = g.vertices();

    let visited: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();
    visited[start].store(true, Ordering::Relaxed);

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = vec![false; n];
    current[start] = true;

    loop {
        let chunk = chunk_len(n);
        let ranges: Vec<(usize, usize)> = (0..n)
            .step_by(chunk)
            .map(|lo| (lo, (lo + chunk).min(n)))
            .collect();

        // One task per chunk; collect() is the round barrier.
        let discovered: Vec<Vec<VertexId>> = ranges
            .into_par_iter()
            .map(|(lo, hi)| {
                let mut local = Vec::new();
                for v in lo..hi {
                    if !current[v] {
                        continue;
                    }
                    for (u, &w) in g.matrix_row(v).iter().enumerate() {
                        if w != 0 && claim(&visited, u) {
                            local.push(u);
                        }
                    }
                }
                local
            })
            .collect();

        let mut next = vec![false; n];
        let mut any = false;
        for found in &discovered {
            for &u in found {
                next[u] = true;
                order.push(u);
                any = true;
            }
        }
        if !any {
            break;
        }
        current = next;
    }

    Ok(order)
}
