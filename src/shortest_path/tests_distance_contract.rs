// =========================================================================
// FALSIFY-SP: shortest-path contract (grafo shortest_path)
//
// Strategy pairs must agree exactly; all-pairs matrices must be symmetric
// with a zero diagonal; Floyd-Warshall rows must match Bellman-Ford from
// the same source; the sentinel must survive every relaxation untouched.
//
// References:
//   - Bellman (1958) "On a routing problem"
//   - Floyd (1962) "Algorithm 97: Shortest Path"
// =========================================================================

use super::*;
use crate::graph::GraphConfig;

fn random_graph(seed: u64, vertices: usize, density: f64) -> Graph {
    Graph::random(&GraphConfig {
        vertices,
        density,
        max_weight: 10,
        seed: Some(seed),
    })
    .expect("valid config")
}

/// FALSIFY-SP-001: Bellman-Ford strategies agree to exact integer equality.
#[test]
fn falsify_sp_001_bellman_ford_parity() {
    for seed in 0..12 {
        let g = random_graph(seed, 45, 0.08);
        for start in [0, 22, 44] {
            let sparse = bellman_ford_edge_list(&g, start).expect("valid start");
            let dense = bellman_ford_matrix(&g, start).expect("valid start");
            assert_eq!(
                sparse, dense,
                "FALSIFIED SP-001: strategies disagree, seed {seed} start {start}"
            );
        }
    }
}

/// FALSIFY-SP-002: Floyd-Warshall strategies produce identical matrices.
#[test]
fn falsify_sp_002_floyd_warshall_parity() {
    for seed in 0..8 {
        let g = random_graph(seed, 35, 0.12);
        assert_eq!(
            floyd_warshall_rows(&g),
            floyd_warshall_chunked(&g),
            "FALSIFIED SP-002: matrices differ for seed {seed}"
        );
    }
}

/// FALSIFY-SP-003: Floyd-Warshall row s equals Bellman-Ford from s.
#[test]
fn falsify_sp_003_cross_algorithm_consistency() {
    let g = random_graph(17, 30, 0.1);
    let all_pairs = floyd_warshall_chunked(&g);
    for s in 0..g.vertices() {
        let single = bellman_ford_edge_list(&g, s).expect("valid start");
        assert_eq!(
            all_pairs.row(s),
            single.as_slice(),
            "FALSIFIED SP-003: row {s} diverges from single-source distances"
        );
    }
}

/// FALSIFY-SP-004: The sentinel never combines with a weight.
///
/// Every finite distance must be reachable as a sum of real edge weights;
/// any finite value above the maximum possible path weight would prove a
/// sentinel overflowed into the matrix.
#[test]
fn falsify_sp_004_sentinel_overflow_guard() {
    let g = random_graph(23, 40, 0.03); // sparse: plenty of unreachable pairs
    let n = g.vertices() as u64;
    let max_path = n * 10; // longest simple path at max weight

    let all_pairs = floyd_warshall_rows(&g);
    for i in 0..g.vertices() {
        for j in 0..g.vertices() {
            let d = all_pairs.get(i, j);
            assert!(
                d == INFINITY || d <= max_path,
                "FALSIFIED SP-004: dist[{i}][{j}] = {d} is neither finite-plausible nor sentinel"
            );
        }
    }

    let single = bellman_ford_matrix(&g, 0).expect("valid start");
    for (v, &d) in single.iter().enumerate() {
        assert!(
            d == INFINITY || d <= max_path,
            "FALSIFIED SP-004: dist[{v}] = {d} leaked a sentinel sum"
        );
    }
}

/// FALSIFY-SP-005: Triangle inequality holds in the all-pairs matrix.
#[test]
fn falsify_sp_005_triangle_inequality() {
    let g = random_graph(31, 25, 0.2);
    let dist = floyd_warshall_chunked(&g);
    for i in 0..25 {
        for j in 0..25 {
            for k in 0..25 {
                let (ik, kj, ij) = (dist.get(i, k), dist.get(k, j), dist.get(i, j));
                if ik != INFINITY && kj != INFINITY {
                    assert!(
                        ij <= ik + kj,
                        "FALSIFIED SP-005: dist[{i}][{j}]={ij} > {ik}+{kj} via {k}"
                    );
                }
            }
        }
    }
}
