// =========================================================================
// FALSIFY-SC: spectral clustering contract (grafo spectral)
//
// The pipeline must always emit one label per vertex in [0, k), never
// fault on isolated vertices, and reproduce exactly under a fixed seed.
// Partition quality is heuristic and deliberately not asserted.
//
// References:
//   - Ng, Jordan, Weiss (2001) "On Spectral Clustering: Analysis and an algorithm"
//   - von Luxburg (2007) "A tutorial on spectral clustering"
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

/// FALSIFY-SC-001: Exactly one label per vertex.
#[test]
fn falsify_sc_001_labels_length() {
    for seed in 0..5 {
        let g = random_graph(seed, 40, 0.1);
        let labels = SpectralClustering::new(3)
            .with_random_state(seed)
            .fit_predict(&g)
            .expect("pipeline runs");
        assert_eq!(
            labels.len(),
            40,
            "FALSIFIED SC-001: {} labels for 40 vertices",
            labels.len()
        );
    }
}

/// FALSIFY-SC-002: Label values lie in [0, k) for every k.
#[test]
fn falsify_sc_002_label_range() {
    let g = random_graph(2, 30, 0.15);
    for k in 1..=6 {
        let labels = SpectralClustering::new(k)
            .with_random_state(11)
            .fit_predict(&g)
            .expect("pipeline runs");
        for (v, &label) in labels.iter().enumerate() {
            assert!(
                label < k,
                "FALSIFIED SC-002: label[{v}]={label}, expected < {k}"
            );
        }
    }
}

/// FALSIFY-SC-003: Fixed seed reproduces the partition exactly.
#[test]
fn falsify_sc_003_seed_determinism() {
    let g = random_graph(8, 35, 0.12);
    let model = SpectralClustering::new(4).with_random_state(99);
    let first = model.fit_predict(&g).expect("pipeline runs");
    let second = model.fit_predict(&g).expect("pipeline runs");
    assert_eq!(
        first, second,
        "FALSIFIED SC-003: identical seeds produced different partitions"
    );
}

/// FALSIFY-SC-004: Isolated vertices never fault the Laplacian stage.
#[test]
fn falsify_sc_004_isolated_vertices_survive() {
    // Sparse enough that isolated vertices are near-certain.
    let g = random_graph(4, 50, 0.01);
    let laplacian = normalized_laplacian(&g);
    for v in 0..50 {
        if g.neighbors(v).is_empty() {
            for j in 0..50 {
                let expected = if j == v { 1.0 } else { 0.0 };
                assert!(
                    (laplacian.get(v, j) - expected).abs() < 1e-12,
                    "FALSIFIED SC-004: isolated row {v} has entry {} at column {j}",
                    laplacian.get(v, j)
                );
            }
        }
    }

    let labels = SpectralClustering::new(3)
        .with_random_state(1)
        .fit_predict(&g)
        .expect("pipeline must not fault on isolated vertices");
    assert_eq!(labels.len(), 50);
}

/// FALSIFY-SC-005: Laplacian off-diagonal entries are non-positive and
/// symmetric.
#[test]
fn falsify_sc_005_laplacian_structure() {
    let g = random_graph(6, 25, 0.2);
    let laplacian = normalized_laplacian(&g);
    for i in 0..25 {
        for j in 0..25 {
            if i != j {
                let entry = laplacian.get(i, j);
                assert!(
                    entry <= 0.0,
                    "FALSIFIED SC-005: L[{i}][{j}]={entry} is positive off-diagonal"
                );
                assert!(
                    (entry - laplacian.get(j, i)).abs() < 1e-12,
                    "FALSIFIED SC-005: Laplacian asymmetric at ({i}, {j})"
                );
            }
        }
    }
}
