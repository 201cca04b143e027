//! Command-line harness: generate a random graph, run one algorithm's
//! strategy pair, and print timings, speedup, and a result sample.

use clap::{Parser, ValueEnum};

use grafo::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "grafo", about = "Compare parallel graph algorithm strategies")]
struct Cli {
    /// Number of vertices in the generated graph.
    #[arg(long, default_value_t = 1000)]
    vertices: usize,

    /// Edge probability for every unordered vertex pair, in [0, 1].
    #[arg(long, default_value_t = 0.01)]
    density: f64,

    /// Algorithm to run.
    #[arg(long, value_enum, default_value = "bfs")]
    algo: Algorithm,

    /// Number of clusters for spectral clustering.
    #[arg(long, default_value_t = 3)]
    clusters: usize,

    /// Seed for reproducible graph generation and clustering.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the timing report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    BellmanFord,
    FloydWarshall,
    SpectralClustering,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.vertices == 0 {
        return Err(GrafoError::InvalidConfiguration {
            param: "vertices",
            value: "0".to_string(),
            constraint: "vertices >= 1",
        });
    }
    if cli.clusters == 0 {
        return Err(GrafoError::InvalidConfiguration {
            param: "clusters",
            value: "0".to_string(),
            constraint: "clusters >= 1",
        });
    }

    let g = Graph::random(&GraphConfig {
        vertices: cli.vertices,
        density: cli.density,
        max_weight: 10,
        seed: cli.seed,
    })?;
    let start = 0;

    match cli.algo {
        Algorithm::Bfs => {
            let cmp = compare_bfs(&g, start)?;
            print_comparison(cli, &cmp.report());
            if !cli.json {
                println!("visited: {} vertices", cmp.regular.result.len());
            }
        }
        Algorithm::BellmanFord => {
            let cmp = compare_bellman_ford(&g, start)?;
            print_comparison(cli, &cmp.report());
            if !cli.json {
                print_distance_sample(&cmp.regular.result);
            }
        }
        Algorithm::FloydWarshall => {
            let cmp = compare_floyd_warshall(&g);
            print_comparison(cli, &cmp.report());
            if !cli.json {
                print_distance_sample(cmp.regular.result.row(start));
            }
        }
        Algorithm::SpectralClustering => {
            let report = run_spectral(&g, cli.clusters, cli.seed)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("report serializes")
                );
            } else {
                println!("Spectral Clustering Results:");
                println!("Duration: {:.2} ms", report.elapsed_ms);
                println!("Cluster sizes:");
                for (cluster, size) in report.cluster_sizes.iter().enumerate() {
                    println!("Cluster {cluster}: {size} vertices");
                }
            }
        }
    }

    Ok(())
}

fn print_comparison(cli: &Cli, report: &ComparisonReport) {
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).expect("report serializes")
        );
        return;
    }
    println!("{} results:", report.algorithm);
    println!("Regular: {:.2} ms", report.regular_ms);
    println!("Matrix:  {:.2} ms", report.matrix_ms);
    println!("Speedup: {:.2}x", report.speedup);
    println!(
        "Agreement: {}",
        if report.agree { "ok" } else { "MISMATCH" }
    );
}

fn print_distance_sample(distances: &[u64]) {
    println!("First distances from vertex 0:");
    for (v, &d) in distances.iter().take(10).enumerate() {
        if d == INFINITY {
            println!("vertex {v}: unreachable");
        } else {
            println!("vertex {v}: {d}");
        }
    }
}
