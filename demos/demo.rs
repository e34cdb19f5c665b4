// demos/demo.rs
use jump_paths::math_utils::Timer;
use jump_paths::models::{merton, poisson};
use jump_paths::{output, rng, simulate_merton, simulate_poisson, PathEnsemble};
use jump_paths::{MertonParams, PoissonParams};

fn print_ensemble<E: PathEnsemble>(ensemble: &E) {
    for (series, (_, summary)) in ensemble.series().iter().zip(ensemble.summaries()) {
        println!("  {} ({} vs time)", series.title, series.y_label);
        println!(
            "    terminal mean {:.4}, std {:.4}, range [{:.4}, {:.4}]",
            summary.mean, summary.std_dev, summary.min, summary.max
        );
    }
}

fn main() {
    println!("Running jump-paths Demo\n");
    let mut rng = rng::seed_rng_from_u64(42);
    let mut timer = Timer::new();

    // Poisson process at the control-panel defaults
    let poisson_params = PoissonParams::default();
    println!("{}\n", poisson::THEORY);
    timer.start();
    let poisson_paths = simulate_poisson(&poisson_params, &mut rng).expect("Valid parameters");
    println!(
        "{} paths x {} steps in {:.2} ms (expected terminal count λT = {:.1})",
        poisson_paths.paths(),
        poisson_paths.steps(),
        timer.elapsed_ms(),
        poisson_params.lambda * poisson_params.horizon
    );
    print_ensemble(&poisson_paths);

    // Merton jump-diffusion at the control-panel defaults
    let merton_params = MertonParams::default();
    println!("\n{}\n", merton::THEORY);
    timer.start();
    let merton_paths = simulate_merton(&merton_params, &mut rng).expect("Valid parameters");
    println!(
        "{} paths x {} steps in {:.2} ms (E[S_T] = S0·e^(rT) = {:.4})",
        merton_paths.paths(),
        merton_paths.steps(),
        timer.elapsed_ms(),
        merton_params.s0 * (merton_params.r * merton_params.horizon).exp()
    );
    print_ensemble(&merton_paths);

    let filename = "merton_paths.csv";
    match output::write_ensemble_to_csv(filename, &merton_paths) {
        Ok(()) => println!("\nMerton ensemble written to {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }

    let mut summary_data = vec![
        ("poisson_paths".to_string(), poisson_paths.paths() as f64),
        ("merton_paths".to_string(), merton_paths.paths() as f64),
    ];
    for (name, summary) in poisson_paths.summaries() {
        summary_data.push((format!("poisson_{}_terminal_mean", name), summary.mean));
    }
    for (name, summary) in merton_paths.summaries() {
        summary_data.push((format!("merton_{}_terminal_mean", name), summary.mean));
    }
    output::write_summary_to_csv("demo_summary.csv", &summary_data).expect("Could not write summary");
    println!("Terminal means written to demo_summary.csv");
}
