//! jumpsim - command-line front end for the path generators
//!
//! - `jumpsim poisson [--lambda 2.0 ...]` - raw and compensated Poisson paths
//! - `jumpsim merton [--sigma-j 0.5 ...]` - Merton jump-diffusion paths
//!
//! Parameters start from the control-panel defaults, are optionally overridden
//! by a JSON file (`--params`), and finally by individual flags.

use clap::{Args, Parser, Subcommand};
use jump_paths::config::{load_params, MertonOverrides, PoissonOverrides};
use jump_paths::math_utils::Timer;
use jump_paths::models::{merton, poisson};
use jump_paths::{
    output, rng, MertonParams, MertonPathGenerator, Normalization, PathEnsemble, PathGenerator,
    PoissonParams, PoissonPathGenerator, SimResult,
};
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "jumpsim")]
#[command(author, version, about = "Simulate Poisson and Merton jump-diffusion sample paths", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for a reproducible ensemble; omitted means OS entropy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file with (a subset of) the model parameters
    #[arg(short, long, global = true)]
    params: Option<PathBuf>,

    /// Write the ensemble in long CSV format
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Reject parameters outside the control-panel slider ranges
    #[arg(long, global = true)]
    check_controls: bool,

    /// Pull parameters into the control-panel slider ranges
    #[arg(long, global = true)]
    clamp_controls: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poisson counting process and its compensated version
    Poisson(PoissonOverrides),
    /// Merton jump-diffusion log-price and price paths
    Merton(MertonArgs),
}

#[derive(Args)]
struct MertonArgs {
    #[command(flatten)]
    overrides: MertonOverrides,
    /// Skip per-step moment matching (needed for a single path)
    #[arg(long)]
    no_normalization: bool,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => rng::seed_rng_from_u64(seed),
        None => rng::entropy_rng(),
    }
}

fn report<E: PathEnsemble>(theory: &str, ensemble: &E, elapsed_ms: f64, csv_path: Option<&Path>) -> SimResult<()> {
    println!("{}\n", theory);
    println!(
        "{} paths x {} steps simulated in {:.2} ms\n",
        ensemble.paths(),
        ensemble.steps(),
        elapsed_ms
    );

    println!(
        "{:<66} {:>10} {:>10} {:>10} {:>10}",
        "Series (terminal value)", "Mean", "Std", "Min", "Max"
    );
    println!("{:-<110}", "");
    for (series, (_, summary)) in ensemble.series().iter().zip(ensemble.summaries()) {
        println!(
            "{:<66} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            format!("{} [{}]", series.title, series.y_label),
            summary.mean,
            summary.std_dev,
            summary.min,
            summary.max
        );
    }

    if let Some(path) = csv_path {
        output::write_ensemble_to_csv(path, ensemble)?;
        info!(path = %path.display(), "ensemble written");
    }
    Ok(())
}

fn run(cli: Cli) -> SimResult<()> {
    let mut rng = make_rng(cli.seed);
    let mut timer = Timer::new();

    match cli.command {
        Commands::Poisson(overrides) => {
            let mut params: PoissonParams = load_params(cli.params.as_deref())?;
            overrides.apply(&mut params);
            if cli.clamp_controls {
                params.clamp_controls();
            }
            if cli.check_controls {
                params.check_controls()?;
            }
            info!(?params, seed = ?cli.seed, "simulating Poisson process");

            let generator = PoissonPathGenerator::new(params)?;
            timer.start();
            let ensemble = generator.generate(&mut rng)?;
            report(poisson::THEORY, &ensemble, timer.elapsed_ms(), cli.output.as_deref())
        }
        Commands::Merton(args) => {
            let mut params: MertonParams = load_params(cli.params.as_deref())?;
            args.overrides.apply(&mut params);
            if cli.clamp_controls {
                params.clamp_controls();
            }
            if cli.check_controls {
                params.check_controls()?;
            }
            let normalization = if args.no_normalization {
                Normalization::Off
            } else {
                Normalization::MomentMatch
            };
            info!(?params, ?normalization, seed = ?cli.seed, "simulating Merton jump-diffusion");

            let generator = MertonPathGenerator::new_with_normalization(params, normalization)?;
            timer.start();
            let ensemble = generator.generate(&mut rng)?;
            report(merton::THEORY, &ensemble, timer.elapsed_ms(), cli.output.as_deref())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
