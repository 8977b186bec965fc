use std::env;
use std::time::{Duration, Instant};

use adaptable_sssp::graph::generate_grid;
use adaptable_sssp::{Dijkstra, Error, QueueBackend, Result, ShortestPath, ShortestPathAlgorithm};
use chrono::{DateTime, Utc};
use log::{debug, info};
use ordered_float::OrderedFloat;
use serde::Serialize;

type Weight = OrderedFloat<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Benchmark settings, overridable from the command line
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Grid side lengths to test
    sizes: Vec<usize>,
    /// Runs per (size, backend) pair
    repeat: usize,
    backends: Vec<QueueBackend>,
    early_stop: bool,
    format: OutputFormat,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: vec![10, 20, 50, 100],
            repeat: 5,
            backends: QueueBackend::ALL.to_vec(),
            early_stop: true,
            format: OutputFormat::Text,
        }
    }
}

impl BenchmarkConfig {
    fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut config = BenchmarkConfig::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sizes" => {
                    config.sizes = next_value(&mut args, &arg)?
                        .split(',')
                        .map(|s| parse_positive(s.trim(), "--sizes"))
                        .collect::<Result<_>>()?;
                }
                "--repeat" => config.repeat = parse_positive(&next_value(&mut args, &arg)?, "--repeat")?,
                "--backend" => {
                    let value = next_value(&mut args, &arg)?;
                    config.backends = if value == "all" {
                        QueueBackend::ALL.to_vec()
                    } else {
                        vec![value.parse()?]
                    };
                }
                "--all-nodes" => config.early_stop = false,
                "--format" => {
                    config.format = match next_value(&mut args, &arg)?.as_str() {
                        "text" => OutputFormat::Text,
                        "csv" => OutputFormat::Csv,
                        "json" => OutputFormat::Json,
                        other => {
                            return Err(Error::InvalidArgument(format!("unknown format: {}", other)))
                        }
                    };
                }
                other => return Err(Error::InvalidArgument(format!("unknown argument: {}", other))),
            }
        }

        Ok(config)
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::InvalidArgument(format!("{} expects a value", flag)))
}

fn parse_positive(value: &str, flag: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidArgument(format!(
            "{} expects a positive integer, got {:?}",
            flag, value
        ))),
    }
}

/// One measured (size, backend) pair
#[derive(Debug, Serialize)]
struct BenchmarkRecord {
    backend: String,
    grid_side: usize,
    vertices: usize,
    edges: usize,
    early_stop: bool,
    mean_ms: f64,
    distance: f64,
    path_len: usize,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    generated_at: DateTime<Utc>,
    repeat: usize,
    records: Vec<BenchmarkRecord>,
}

fn run(config: &BenchmarkConfig) -> Result<Vec<BenchmarkRecord>> {
    let mut records = Vec::new();

    for &size in &config.sizes {
        info!("generating {}x{} grid", size, size);
        let (graph, matrix) = generate_grid(size, size)?;
        let source = matrix[0][0];
        let destination = matrix[size - 1][size - 1];

        for &backend in &config.backends {
            let dijkstra = Dijkstra::new(backend).with_early_stop(config.early_stop);
            let mut total = Duration::ZERO;
            let mut path: ShortestPath<Weight> = ShortestPath {
                vertices: Vec::new(),
                distance: OrderedFloat(f64::INFINITY),
            };

            for _ in 0..config.repeat {
                let start = Instant::now();
                path = dijkstra.shortest_path(&graph, source, destination)?;
                total += start.elapsed();
            }

            let mean = total / config.repeat as u32;
            debug!("{} on {} vertices: {:?} per run", backend, graph.num_vertices(), mean);

            records.push(BenchmarkRecord {
                backend: backend.to_string(),
                grid_side: size,
                vertices: graph.num_vertices(),
                edges: graph.num_edges(),
                early_stop: config.early_stop,
                mean_ms: mean.as_secs_f64() * 1000.0,
                distance: path.distance.into_inner(),
                path_len: path.vertices.len(),
            });
        }
    }

    Ok(records)
}

fn print_text(records: &[BenchmarkRecord]) {
    println!("=====================================================");
    println!("Benchmark: Dijkstra over three priority queue backends");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<12} | {:<10} | {:<8}",
        "Backend", "Grid", "Vertices", "Mean (ms)", "Distance", "Hops"
    );
    println!("-----------------------------------------------------");
    for record in records {
        println!(
            "{:<10} | {:<10} | {:<10} | {:<12.3} | {:<10} | {:<8}",
            record.backend,
            format!("{0}x{0}", record.grid_side),
            record.vertices,
            record.mean_ms,
            record.distance,
            record.path_len.saturating_sub(1)
        );
    }
}

fn print_csv(records: &[BenchmarkRecord]) {
    println!("backend,grid_side,vertices,edges,early_stop,mean_ms,distance,path_len");
    for r in records {
        println!(
            "{},{},{},{},{},{:.6},{},{}",
            r.backend, r.grid_side, r.vertices, r.edges, r.early_stop, r.mean_ms, r.distance, r.path_len
        );
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = BenchmarkConfig::from_args(env::args().skip(1))?;
    debug!("benchmark config: {:?}", config);

    let records = run(&config)?;

    match config.format {
        OutputFormat::Text => print_text(&records),
        OutputFormat::Csv => print_csv(&records),
        OutputFormat::Json => {
            let report = BenchmarkReport {
                generated_at: Utc::now(),
                repeat: config.repeat,
                records,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
