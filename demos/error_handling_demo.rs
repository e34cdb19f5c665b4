// demos/error_handling_demo.rs
use jump_paths::{
    rng, simulate_merton, simulate_poisson, MertonParams, MertonPathGenerator, Normalization,
    PathGenerator, PoissonParams, SimError,
};

fn main() {
    println!("Error Handling Demo for jump-paths");
    println!("==================================\n");

    // Test 1: Negative intensity
    println!("1. Testing negative Poisson intensity...");
    let bad_poisson = PoissonParams {
        lambda: -1.0,
        ..Default::default()
    };
    match simulate_poisson(&bad_poisson, &mut rng::seed_rng_from_u64(42)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero paths
    println!("\n2. Testing zero path count...");
    let zero_paths = MertonParams {
        paths: 0,
        ..Default::default()
    };
    match simulate_merton(&zero_paths, &mut rng::seed_rng_from_u64(42)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Single Merton path with moment matching
    println!("\n3. Testing single-path Merton run with moment matching...");
    let single = MertonParams {
        paths: 1,
        ..Default::default()
    };
    match simulate_merton(&single, &mut rng::seed_rng_from_u64(42)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SimError::DegenerateNormalization { step, std_dev }) => {
            println!("   ✓ Caught DegenerateNormalization at step {} (std = {})", step, std_dev)
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // Test 4: Same run with normalization explicitly disabled
    println!("\n4. Testing single-path Merton run with normalization off...");
    let result = MertonPathGenerator::new_with_normalization(single, Normalization::Off)
        .and_then(|generator| generator.generate(&mut rng::seed_rng_from_u64(42)));
    match result {
        Ok(paths) => println!(
            "   ✓ Success: S(T) = {:.4}",
            paths.s[[0, single.steps]]
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 5: Valid but off the control panel
    println!("\n5. Testing parameters outside the slider ranges...");
    let off_panel = MertonParams {
        sigma: 0.9,
        ..Default::default()
    };
    match off_panel.check_controls() {
        Ok(()) => println!("   Unexpected: Should have been flagged!"),
        Err(e) => println!("   ✓ Flagged: {}", e),
    }
    match simulate_merton(&off_panel, &mut rng::seed_rng_from_u64(42)) {
        Ok(_) => println!("   ✓ ...yet still simulated: σ = 0.9 is inside the model's domain"),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 6: Error type matching
    println!("\n6. Testing error type matching...");
    let bad_sigma_j = MertonParams {
        sigma_j: -0.3,
        ..Default::default()
    };
    match simulate_merton(&bad_sigma_j, &mut rng::seed_rng_from_u64(42)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SimError::InvalidParameter {
            parameter,
            value,
            constraint,
        }) => {
            println!("   ✓ Caught InvalidParameter: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
