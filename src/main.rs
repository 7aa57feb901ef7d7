use anyhow::Result;
use clap::Parser;

mod config;
mod error;
mod generator;
mod graph;
mod metrics;
mod report;
mod sweep;

use config::Config;
use generator::GenerationParams;
use metrics::AveragePathLength;

#[derive(Parser, Debug)]
#[clap(
    name = "smallworld-generator",
    about = "Watts-Strogatz small-world network generation and analysis"
)]
struct Cli {
    /// Number of nodes on the ring
    #[clap(long, default_value = "100")]
    nodes: usize,

    /// Mean degree of the initial lattice (must be even)
    #[clap(long, default_value = "4")]
    degree: usize,

    /// Rewiring probability in [0, 1]
    #[clap(long, default_value = "0.1")]
    beta: f64,

    /// Seed for reproducible generation (random when omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Output directory for results
    #[clap(long, default_value = "network_results")]
    output_dir: String,

    /// Number of beta values for a sweep run (0 = no sweep)
    #[clap(long, default_value = "0")]
    sweep_points: usize,

    /// Generations averaged per sweep point
    #[clap(long, default_value = "10")]
    trials: usize,

    /// Skip writing result files
    #[clap(long)]
    skip_export: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting small-world network generation");

    // 1. Validate configuration
    let config = Config::new(args.nodes, args.degree, args.beta, args.seed);
    config.validate()?;

    let params = GenerationParams::new(config.nodes, config.degree, config.beta)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    log::info!(
        "Parameters: n={}, k={}, beta={}, seed={}",
        params.nodes(),
        params.degree(),
        params.beta(),
        seed
    );

    // 2. Generate the network
    let graph = generator::generate_seeded(&params, Some(seed));

    log::info!(
        "Generated graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // 3. Compute metrics
    let metrics = metrics::analyze(&graph)?;

    log::info!(
        "Clustering coefficient: {:.4}",
        metrics.clustering_coefficient
    );
    match metrics.average_path_length {
        AveragePathLength::Connected { length } => {
            log::info!("Average path length: {:.4}", length);
        }
        AveragePathLength::LargestComponent {
            length,
            component_nodes,
        } => {
            log::info!(
                "Average path length: {:.4} (graph disconnected, largest component has {} nodes)",
                length,
                component_nodes
            );
        }
    }

    // 4. Save results
    if !args.skip_export {
        report::save_results(&graph, &metrics, &params, seed, &args.output_dir)?;
    }

    // 5. Run a beta sweep if requested
    if args.sweep_points > 0 {
        let points = sweep::beta_sweep(
            config.nodes,
            config.degree,
            args.sweep_points,
            args.trials,
            seed,
        )?;

        if !args.skip_export {
            report::save_sweep(&points, &args.output_dir)?;
        }
    }

    if args.skip_export {
        log::info!("Run complete (export skipped)");
    } else {
        log::info!("Run complete. Results saved to {}", args.output_dir);
    }

    Ok(())
}
