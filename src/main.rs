use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_dispatch::batch::{run_batch, BatchConfig};
use u_dispatch::config::{
    SavingsFormula, SolverConfig, DEFAULT_DRIVER_COST, DEFAULT_MAX_DURATION, DEFAULT_MAX_PASSES,
};
use u_dispatch::problem::{load_problem_file, write_problem_set, ParseMode};
use u_dispatch::solver::solve;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every problem file under a directory and print mean cost and time
    #[command(visible_alias = "b")]
    Batch {
        /// Directory of problem files
        dir: PathBuf,

        #[command(flatten)]
        solver: SolverArgs,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Solve one problem file and print its routes
    Solve {
        file: PathBuf,

        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Write a set of random problem files
    #[command(visible_alias = "g")]
    Generate {
        /// Output directory
        output: PathBuf,

        /// Number of problem files
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// Loads per problem
        #[arg(short, long, default_value_t = 100)]
        loads: usize,

        /// Coordinates are drawn from [-extent, extent]
        #[arg(short, long, default_value_t = 100.0, value_parser = parse_extent)]
        extent: f64,

        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Maximum tour length of one driver
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION)]
    max_duration: f64,

    /// Fixed cost per driver
    #[arg(long, default_value_t = DEFAULT_DRIVER_COST)]
    driver_cost: f64,

    /// Upper bound on local search passes
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    max_passes: usize,

    /// Reject exchanges that push a tour over the duration cap
    #[arg(long)]
    feasible_swaps: bool,

    /// Coerce malformed records instead of rejecting the file
    #[arg(long)]
    lenient: bool,

    #[arg(long, value_enum, default_value_t = SavingsFormula::Link)]
    savings: SavingsFormula,
}

impl SolverArgs {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_max_duration(self.max_duration)
            .with_driver_cost(self.driver_cost)
            .with_max_passes(self.max_passes)
            .with_feasible_swaps(self.feasible_swaps)
            .with_savings(self.savings)
    }

    fn parse_mode(&self) -> ParseMode {
        if self.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }
}

fn parse_extent(arg: &str) -> Result<f64, String> {
    let extent: f64 = arg.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if (2.0 * extent).is_finite() {
        Ok(extent)
    } else {
        Err(format!("extent must be a finite number, got {arg}"))
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Batch {
            dir,
            solver,
            threads,
        }) => {
            let config = BatchConfig {
                solver: solver.solver_config(),
                parse_mode: solver.parse_mode(),
                threads,
            };
            let summary = run_batch(&dir, &config)?;

            match (summary.mean_cost(), summary.mean_elapsed()) {
                (Some(cost), Some(elapsed)) => {
                    println!("Mean Cost: {cost:.2}");
                    println!("Mean Running Time: {elapsed:?}");
                }
                _ => println!("No files found in directory."),
            }
        }
        Some(Commands::Solve { file, solver }) => {
            let loads = load_problem_file(&file, solver.parse_mode())
                .with_context(|| format!("failed to load {}", file.display()))?;
            let report = solve(loads, &solver.solver_config());
            info!(
                cost = report.cost,
                drivers = report.solution.num_drivers(),
                swaps = report.search.swaps,
                "solved {}",
                file.display()
            );
            println!("{}", report.solution.render());
        }
        Some(Commands::Generate {
            output,
            count,
            loads,
            extent,
            seed,
        }) => {
            write_problem_set(&output, count, loads, extent, seed)
                .with_context(|| format!("failed to write problems to {}", output.display()))?;
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}
