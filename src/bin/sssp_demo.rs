use std::collections::BTreeMap;
use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use relax_sssp::graph::{generate_random, RandomGraphConfig};
use relax_sssp::{
    BellmanFord, Dijkstra, DirectedGraph, Error, Graph, RelaxationStats, ShortestPathAlgorithm,
};

/// Configuration for the demo run
#[derive(Debug, Clone)]
struct DemoConfig {
    vertex_count: usize,
    seed: u64,
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            seed: rand::thread_rng().gen(),
            json: false,
        }
    }
}

impl DemoConfig {
    /// `sssp_demo [VERTICES] [--seed N] [--json]`
    fn from_args() -> Self {
        let mut config = DemoConfig::default();
        let mut args = env::args().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--seed" => {
                    if let Some(seed) = args.next().and_then(|s| s.parse().ok()) {
                        config.seed = seed;
                    }
                }
                other => {
                    if let Ok(n) = other.parse() {
                        config.vertex_count = n;
                    } else {
                        log::warn!("Ignoring unrecognized argument {:?}", other);
                    }
                }
            }
        }

        config
    }
}

#[derive(Debug, Serialize)]
struct FrontierReport {
    start: usize,
    end: usize,
    path: Option<Vec<usize>>,
    distance: Option<i64>,
}

#[derive(Debug, Serialize)]
struct VertexReport {
    distance: Option<i64>,
    previous: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum BoundedReport {
    Converged {
        start: usize,
        vertices: BTreeMap<usize, VertexReport>,
        reachable: usize,
        stats: RelaxationStats,
    },
    NegativeCycle {
        start: usize,
        witness: (usize, usize),
        cycle: Option<Vec<usize>>,
    },
}

#[derive(Debug, Serialize)]
struct DemoReport {
    seed: u64,
    graph: RandomGraphConfig,
    frontier: FrontierReport,
    negative_graph: RandomGraphConfig,
    bounded: BoundedReport,
}

fn describe(graph: &DirectedGraph<usize, i64>) {
    println!(
        "Graph: {} vertices, {} edges, min weight {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.min_weight()
    );
    for edge in graph.edges() {
        println!("\t{} -> {} weight: {}", edge.source, edge.dest, edge.weight);
    }
}

fn run_frontier(
    graph: &DirectedGraph<usize, i64>,
    rng: &mut StdRng,
) -> Result<FrontierReport, Error<usize>> {
    let n = graph.vertex_count();
    let start = rng.gen_range(0..n);
    let end = if n > 1 { (start + rng.gen_range(1..n)) % n } else { start };

    let path = Dijkstra::new().shortest_path(graph, start, end)?;
    Ok(FrontierReport {
        start,
        end,
        distance: path.as_ref().map(|p| p.distance),
        path: path.map(|p| p.vertices),
    })
}

fn run_bounded(
    graph: &DirectedGraph<usize, i64>,
    rng: &mut StdRng,
) -> Result<BoundedReport, Error<usize>> {
    let start = rng.gen_range(0..graph.vertex_count());
    let bellman_ford = BellmanFord::new();

    match bellman_ford.compute_shortest_paths(graph, start) {
        Ok(result) => {
            let vertices = graph
                .vertices()
                .map(|v| {
                    let entry = VertexReport {
                        distance: result.distance_to(v),
                        previous: result.predecessor_of(v),
                    };
                    (v, entry)
                })
                .collect();
            Ok(BoundedReport::Converged {
                start,
                vertices,
                reachable: result.reachable_count(),
                stats: result.stats,
            })
        }
        Err(Error::NegativeCycle { from, to }) => Ok(BoundedReport::NegativeCycle {
            start,
            witness: (from, to),
            cycle: bellman_ford.find_negative_cycle(graph, start)?,
        }),
        Err(err) => Err(err),
    }
}

fn print_report(report: &DemoReport) {
    let frontier = &report.frontier;
    println!("Start: {} End: {}", frontier.start, frontier.end);
    println!("Path: {:?}", frontier.path);
    println!("Distance: {:?}", frontier.distance);
    println!();

    match &report.bounded {
        BoundedReport::Converged { start, vertices, reachable, stats } => {
            println!("Start: {}", start);
            println!("Distances and Previous Vertices:");
            for (v, entry) in vertices {
                println!(
                    "Vertex {} - Previous: {:?}, Distance: {:?}",
                    v, entry.previous, entry.distance
                );
            }
            println!("{} of {} vertices reachable", reachable, vertices.len());
            println!("{} passes, {} relaxations", stats.passes, stats.relaxations);
        }
        BoundedReport::NegativeCycle { start, witness, cycle } => {
            println!("Start: {}", start);
            println!(
                "[Error] Encountered a negative edge cycle with vertices {} and {}.",
                witness.1, witness.0
            );
            if let Some(cycle) = cycle {
                println!("Cycle: {:?}", cycle);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DemoConfig::from_args();
    log::info!("Running demo with {:?}", config);
    if config.vertex_count == 0 {
        return Err("vertex count must be positive".into());
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let graph_config = RandomGraphConfig::default().with_vertex_count(config.vertex_count);
    let graph = generate_random(&graph_config, &mut rng);
    let negative_config = RandomGraphConfig::negative().with_vertex_count(config.vertex_count);
    let negative_graph = generate_random(&negative_config, &mut rng);

    if !config.json {
        describe(&graph);
    }
    let frontier = run_frontier(&graph, &mut rng)?;
    if !config.json {
        describe(&negative_graph);
    }
    let bounded = run_bounded(&negative_graph, &mut rng)?;

    let report = DemoReport {
        seed: config.seed,
        graph: graph_config,
        frontier,
        negative_graph: negative_config,
        bounded,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
