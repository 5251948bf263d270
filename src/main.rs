use clap::{Args, Parser, Subcommand};
use pathbench::{
    bench::{BenchConfig, ReportFormat, TestMatrix, measure, write_report, write_table},
    error::BenchError,
    generators::GraphKind,
    graph::{UndirectedGraph, VertexId},
    search::SearchAlgorithm,
    statistics::Stats,
};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Benchmarks uninformed path search (DFS, DLS, BFS) on generated graphs
#[derive(Parser, Debug)]
#[command(name = "pathbench")]
#[command(about = "Benchmarks DFS, DLS and BFS on generated undirected graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep generators × vertex counts × degrees and write a report
    Bench(BenchArgs),
    /// Run the three searches on the six-vertex example graph
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Vertex counts to generate (comma-separated list, e.g., "100,1000,10000")
    #[arg(long, value_delimiter = ',', default_value = "100,1000,10000")]
    vertices: Vec<usize>,

    /// Requested edges per vertex (comma-separated list, e.g., "2,5,10")
    #[arg(long, value_delimiter = ',', default_value = "2,5,10")]
    degrees: Vec<usize>,

    /// Graph generators to use (comma-separated list of "random", "knn")
    #[arg(long, value_delimiter = ',', default_value = "random,knn")]
    generators: Vec<GraphKind>,

    /// Depth limit for depth-limited search
    #[arg(long, default_value_t = 5)]
    dls_limit: usize,

    /// Seed for graph generation and endpoint selection
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fixed start vertex for every case (random when omitted)
    #[arg(long)]
    start: Option<VertexId>,

    /// Fixed goal vertex for every case (random when omitted)
    #[arg(long)]
    goal: Option<VertexId>,

    /// Where to write the report
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[arg(long, default_value_t = 0)]
    start: VertexId,

    #[arg(long, default_value_t = 5)]
    goal: VertexId,

    /// Depth limit for depth-limited search
    #[arg(long, default_value_t = 3)]
    limit: usize,
}

impl BenchArgs {
    fn to_config(&self) -> Result<BenchConfig, BenchError> {
        BenchConfig {
            generators: self.generators.clone(),
            vertex_counts: self.vertices.clone(),
            degrees: self.degrees.clone(),
            dls_limit: self.dls_limit,
            seed: self.seed,
            start: self.start,
            goal: self.goal,
            show_progress: !self.quiet,
        }
        .validate()
    }
}

fn run_bench(args: &BenchArgs) -> Result<(), BenchError> {
    let config = args.to_config()?;
    println!("\nStarting sweep:");
    println!("  Generators: {:?}", config.generators);
    println!("  Vertex counts: {:?}", config.vertex_counts);
    println!("  Degrees: {:?}", config.degrees);
    println!("  DLS limit: {}", config.dls_limit);

    let matrix = TestMatrix::new(config);
    let (outcome, elapsed) = measure(|| matrix.run());
    let outcome = outcome?;
    let records = &outcome.records;

    println!("\n==========");
    write_table(io::stdout().lock(), records)?;
    println!("==========");

    let num_cases = records.len().max(1) as f64;
    for (algorithm, totals) in SearchAlgorithm::suite(args.dls_limit)
        .iter()
        .zip(&outcome.totals)
    {
        println!(
            "  {algorithm} avg per case: {:.2} expanded, {:.2} pushed, peak frontier {}, peak retained {}",
            totals.get_expanded() as f64 / num_cases,
            totals.get_pushed() as f64 / num_cases,
            totals.get_peak_frontier(),
            totals.get_peak_retained()
        );
    }
    println!(
        "Completed {} cases in {:.2}s",
        records.len(),
        elapsed.as_secs_f64()
    );

    write_report(&args.output, args.format, records)
}

fn run_demo(args: &DemoArgs) -> Result<(), BenchError> {
    let graph =
        UndirectedGraph::from_edges(6, &[(0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5)])?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built example graph"
    );

    println!("Start: {}", args.start);
    println!("Goal: {}", args.goal);
    for algorithm in SearchAlgorithm::suite(args.limit) {
        let mut stats = Stats::new();
        let (path, elapsed) = measure(|| algorithm.run(&graph, args.start, args.goal, &mut stats));
        println!("{algorithm} path: {path}");
        println!("{algorithm} time (ns): {}", elapsed.as_nanos());
        println!("{algorithm} path length: {}", path.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Command::Bench(args) => run_bench(args),
        Command::Demo(args) => run_demo(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
