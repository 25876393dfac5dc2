//! Kohonen Tracer CLI
//!
//! Command-line interface for tracing noisy point clouds with a 1D SOM.

use clap::{Args, Parser, Subcommand};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use kohonen_tracer::{AnnealingSchedule, Config, Result, Scenario, TracerError};
use log::error;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "kohonen-tracer")]
#[command(version)]
#[command(about = "Trace point clouds with a one-dimensional self-organizing map", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for the CSV files
    #[arg(short, long, global = true, default_value = ".")]
    output: PathBuf,

    /// Random seed for reproducibility
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Evaluate distances and update neighborhoods in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace points scattered around a circle (writes test1.csv, w11.csv, w12.csv)
    Circle(RunArgs),

    /// Trace points scattered around a lemniscate (writes test2.csv, w21.csv, w22.csv)
    Lemniscate(RunArgs),

    /// Run both the circle and the lemniscate scenario
    Demo,
}

#[derive(Args)]
struct RunArgs {
    /// Number of samples
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Number of nodes in the chain
    #[arg(short = 'k', long)]
    nodes: Option<usize>,

    /// Learning-rate stopping threshold, in (0, 1)
    #[arg(short, long)]
    alpha_min: Option<f64>,
}

impl RunArgs {
    fn apply(&self, mut scenario: Scenario) -> Scenario {
        if let Some(samples) = self.samples {
            scenario.num_samples = samples;
        }
        if let Some(nodes) = self.nodes {
            scenario.num_nodes = nodes;
        }
        if let Some(alpha_min) = self.alpha_min {
            scenario.alpha_min = alpha_min;
        }
        scenario
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(&cli).and_then(|config| {
        init_thread_pool(config.som.num_threads)?;

        match &cli.command {
            Commands::Circle(args) => run_scenario(&args.apply(Scenario::circle()), &config, &cli.output),
            Commands::Lemniscate(args) => {
                run_scenario(&args.apply(Scenario::lemniscate()), &config, &cli.output)
            }
            Commands::Demo => {
                run_scenario(&Scenario::circle(), &config, &cli.output)?;
                run_scenario(&Scenario::lemniscate(), &config, &cli.output)
            }
        }
    });

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Loads the configuration file (if any) and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if cli.seed.is_some() {
        config.som.seed = cli.seed;
    }
    if cli.parallel {
        config.som.parallel = true;
    }
    if let Some(threads) = cli.threads {
        config.som.num_threads = threads;
    }

    config.validate()?;
    Ok(config)
}

fn init_thread_pool(num_threads: usize) -> Result<()> {
    if num_threads == 0 {
        return Ok(());
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .map_err(|e| TracerError::Config(format!("Failed to build thread pool: {}", e)))
}

fn run_scenario(scenario: &Scenario, config: &Config, output: &Path) -> Result<()> {
    scenario.validate()?;
    let start_time = Instant::now();

    println!("Kohonen Tracer: {}", scenario.name);
    println!(
        "   {} samples, {} nodes, alpha_min={}",
        scenario.num_samples, scenario.num_nodes, scenario.alpha_min
    );

    let bar_style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} passes {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ");

    let passes = AnnealingSchedule::new(scenario.num_nodes, scenario.alpha_min).count();
    let pb = ProgressBar::new(passes as u64);
    pb.set_style(bar_style);

    let report = scenario.run_with_observer(config, output, |epoch| {
        pb.set_message(format!("alpha={:.2} radius={}", epoch.alpha, epoch.radius));
        pb.inc(1);
    });
    pb.finish_and_clear();
    let report = report?;

    println!("✓ Samples:         {}", report.samples_path.display());
    println!("✓ Initial weights: {}", report.initial_weights_path.display());
    println!("✓ Trained weights: {}", report.trained_weights_path.display());
    println!(
        "✓ {} passes, final radius {} in {}",
        report.summary.passes,
        report.summary.final_radius,
        HumanDuration(start_time.elapsed())
    );
    println!();

    Ok(())
}
