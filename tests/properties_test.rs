// tests/properties_test.rs
use jump_paths::{rng, simulate_merton, simulate_poisson, MertonParams, PoissonParams};
use ndarray::ArrayView1;
use proptest::prelude::*;

fn assert_grid(time: ArrayView1<'_, f64>, steps: usize, horizon: f64) {
    assert_eq!(time.len(), steps + 1);
    assert_eq!(time[0], 0.0);
    assert!((time[steps] - horizon).abs() <= 1e-12 * horizon);
    assert!(time.windows(2).into_iter().all(|w| w[1] > w[0]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn poisson_paths_are_counting_processes(
        paths in 1usize..8,
        steps in 1usize..60,
        horizon in 0.1f64..50.0,
        lambda in 0.0f64..5.0,
        seed in any::<u64>(),
    ) {
        let params = PoissonParams { paths, steps, horizon, lambda };
        let ensemble = simulate_poisson(&params, &mut rng::seed_rng_from_u64(seed)).unwrap();

        assert_grid(ensemble.time.view(), steps, horizon);
        prop_assert_eq!(ensemble.x.dim(), (paths, steps + 1));
        prop_assert_eq!(ensemble.x_compensated.dim(), (paths, steps + 1));
        prop_assert!(ensemble.x.column(0).iter().all(|&v| v == 0.0));
        prop_assert!(ensemble.x_compensated.column(0).iter().all(|&v| v == 0.0));
        for row in ensemble.x.outer_iter() {
            prop_assert!(row.windows(2).into_iter().all(|w| w[1] >= w[0]));
        }
    }

    #[test]
    fn merton_prices_are_exp_of_log_prices(
        paths in 2usize..8,
        steps in 1usize..60,
        s0 in 1.0f64..500.0,
        horizon in 0.1f64..10.0,
        lambda in 0.0f64..2.0,
        mu_j in -0.5f64..0.5,
        sigma_j in 0.0f64..1.0,
        r in -0.1f64..0.1,
        sigma in 0.0f64..0.5,
        seed in any::<u64>(),
    ) {
        let params = MertonParams { paths, steps, s0, horizon, lambda, mu_j, sigma_j, r, sigma };
        let ensemble = simulate_merton(&params, &mut rng::seed_rng_from_u64(seed)).unwrap();

        assert_grid(ensemble.time.view(), steps, horizon);
        prop_assert_eq!(ensemble.x.dim(), (paths, steps + 1));
        prop_assert_eq!(ensemble.s.dim(), (paths, steps + 1));
        prop_assert!(ensemble.x.column(0).iter().all(|&v| v == s0.ln()));
        prop_assert!(ensemble.s.column(0).iter().all(|&v| v == s0));
        for (row_x, row_s) in ensemble.x.outer_iter().zip(ensemble.s.outer_iter()) {
            for (&x, &s) in row_x.iter().zip(row_s.iter()).skip(1) {
                prop_assert!(s > 0.0 && s.is_finite());
                prop_assert_eq!(s, x.exp());
            }
        }
    }
}
