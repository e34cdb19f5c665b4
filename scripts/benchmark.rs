use jump_paths::math_utils::Timer;
use jump_paths::models::merton::jump_compensator;
use jump_paths::{
    rng, MertonParams, MertonPathGenerator, PathEnsemble, PathGenerator, PoissonParams,
    PoissonPathGenerator, SimResult,
};
use std::env;
use std::fs::File;
use std::io::{self, Write};

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_cells_per_sec: f64,
    /// Ensemble mean at the horizon
    terminal_mean: f64,
    /// Model expectation of that mean
    expected_mean: f64,
}

const PATH_COUNTS: [usize; 3] = [25, 1_000, 10_000];
const STEPS: usize = 500;

fn time_it<T>(f: impl FnOnce() -> SimResult<T>) -> SimResult<(T, f64)> {
    let mut timer = Timer::new();
    timer.start();
    let value = f()?;
    Ok((value, timer.elapsed_ms()))
}

fn run_poisson_benchmarks() -> SimResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    for &paths in &PATH_COUNTS {
        let params = PoissonParams {
            paths,
            steps: STEPS,
            ..Default::default()
        };
        let generator = PoissonPathGenerator::new(params)?;
        let mut rng = rng::seed_rng_from_u64(42);
        let (ensemble, time_ms) = time_it(|| generator.generate(&mut rng))?;

        let (_, x) = ensemble.summaries()[0];
        results.push(BenchmarkResult {
            name: "Poisson".to_string(),
            paths,
            steps: STEPS,
            time_ms,
            throughput_cells_per_sec: (paths * STEPS) as f64 / (time_ms / 1000.0),
            terminal_mean: x.mean,
            expected_mean: params.lambda * params.horizon,
        });
    }
    Ok(results)
}

fn run_merton_benchmarks() -> SimResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    for &paths in &PATH_COUNTS {
        let params = MertonParams {
            paths,
            steps: STEPS,
            ..Default::default()
        };
        let generator = MertonPathGenerator::new(params)?;
        let mut rng = rng::seed_rng_from_u64(42);
        let (ensemble, time_ms) = time_it(|| generator.generate(&mut rng))?;

        // E[S_T] = S0 e^{rT} once the jump compensator is in the drift
        let (_, s) = ensemble.summaries()[1];
        results.push(BenchmarkResult {
            name: format!("Merton (kappa={:.4})", jump_compensator(params.mu_j, params.sigma_j)),
            paths,
            steps: STEPS,
            time_ms,
            throughput_cells_per_sec: (paths * STEPS) as f64 / (time_ms / 1000.0),
            terminal_mean: s.mean,
            expected_mean: params.s0 * (params.r * params.horizon).exp(),
        });
    }
    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;

    writeln!(
        file,
        "Benchmark,Paths,Steps,Time_ms,Throughput_cells_per_sec,Terminal_Mean,Expected_Mean"
    )?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{:.2},{:.0},{:.6},{:.6}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_cells_per_sec,
            result.terminal_mean,
            result.expected_mean
        )?;
    }
    Ok(())
}

fn main() -> SimResult<()> {
    println!("jump-paths Benchmark Suite");
    println!("==========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let mut all_results = run_poisson_benchmarks()?;
    all_results.extend(run_merton_benchmarks()?);

    println!("{:=<96}", "");
    println!(
        "{:<28} {:>8} {:>6} {:>12} {:>14} {:>10} {:>10}",
        "Benchmark", "Paths", "Steps", "Time (ms)", "Cells/sec", "Mean", "Expected"
    );
    println!("{:-<96}", "");
    for result in &all_results {
        println!(
            "{:<28} {:>8} {:>6} {:>12.2} {:>14.0} {:>10.4} {:>10.4}",
            result.name,
            result.paths,
            result.steps,
            result.time_ms,
            result.throughput_cells_per_sec,
            result.terminal_mean,
            result.expected_mean
        );
    }
    println!("{:=<96}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&all_results, &system_info, &filename)?;
    println!("\nResults saved to: {}", filename);
    Ok(())
}
