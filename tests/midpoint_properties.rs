// tests/midpoint_properties.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use stochastic_diffusion::sampling::draw_uncertainties;
use stochastic_diffusion::{evaluate, evaluate_with, solve_field, DiffusionError, ProblemParameters};

fn sample(seed: u64, n: usize) -> Vec<f64> {
    draw_uncertainties(&mut StdRng::seed_from_u64(seed), n)
}

#[test]
fn coarse_constant_coefficient_matches_analytic_midpoint() {
    // u'' = -10, u(0) = u(1) = 0 gives u = 5x(1-x)
    let value = evaluate(5, 0, &[]).unwrap();
    assert!((value - 1.25).abs() < 1e-12);
}

#[test]
fn uniform_field_gives_symmetric_solution() {
    let params = ProblemParameters::default();
    for n in [3, 8, 25, 100] {
        let xi = vec![0.0; 6];
        let u = solve_field(&params, n, xi.len(), &xi).unwrap();
        for i in 0..n {
            assert!(
                (u[i] - u[n - 1 - i]).abs() < 1e-12,
                "n = {n}: u[{i}] = {}, u[{}] = {}",
                u[i],
                n - 1 - i,
                u[n - 1 - i]
            );
        }
    }
}

#[test]
fn cosine_modes_keep_the_solution_symmetric() {
    let xi = sample(3, 10);
    let n = 65;
    let u = solve_field(&ProblemParameters::default(), n, xi.len(), &xi).unwrap();
    for i in 0..n {
        assert!((u[i] - u[n - 1 - i]).abs() < 1e-9);
    }
}

#[test]
fn midpoint_converges_under_refinement() {
    let xi = sample(2024, 10);
    let values: Vec<f64> = [11, 51, 201, 801]
        .iter()
        .map(|&n| evaluate(n, xi.len(), &xi).unwrap())
        .collect();

    let differences: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    for pair in differences.windows(2) {
        assert!(
            pair[1] < pair[0] || pair[1] < 1e-9,
            "differences do not shrink: {differences:?}"
        );
    }
    assert!(differences[2] < 1e-3, "differences: {differences:?}");
}

#[test]
fn repeated_calls_are_bit_identical() {
    let xi = sample(99, 10);
    let first = evaluate(100, xi.len(), &xi).unwrap();
    let second = evaluate(100, xi.len(), &xi).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn concurrent_evaluations_match_sequential() {
    let samples: Vec<Vec<f64>> = (0..8).map(|seed| sample(seed, 10)).collect();
    let sequential: Vec<f64> = samples
        .iter()
        .map(|xi| evaluate(100, xi.len(), xi).unwrap())
        .collect();

    let concurrent: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = samples
            .iter()
            .map(|xi| scope.spawn(move || evaluate(100, xi.len(), xi).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn random_field_stays_close_to_the_uniform_solution() {
    // |k - 1| < 1/6 bounds the midpoint between 1.25 / (7/6) and 1.25 / (5/6)
    for seed in 0..20 {
        let xi = sample(seed, 10);
        let value = evaluate(101, xi.len(), &xi).unwrap();
        assert!(value > 1.25 * 6.0 / 7.0 && value < 1.25 * 6.0 / 5.0, "value = {value}");
    }
}

#[test]
fn larger_sigma_moves_the_midpoint_further() {
    let xi = [1.0];
    let weak = ProblemParameters {
        sigma: 0.5,
        ..ProblemParameters::default()
    };
    let strong = ProblemParameters {
        sigma: 2.0,
        ..ProblemParameters::default()
    };
    let base = evaluate(101, 0, &[]).unwrap();
    let weak = evaluate_with(&weak, 101, 1, &xi).unwrap();
    let strong = evaluate_with(&strong, 101, 1, &xi).unwrap();
    assert!((strong - base).abs() > (weak - base).abs());
}

#[test]
fn two_point_grid_returns_right_boundary() {
    let xi = sample(5, 4);
    assert_eq!(evaluate(2, xi.len(), &xi).unwrap(), 0.0);
}

#[test]
fn invalid_arguments_fail_fast() {
    assert!(matches!(
        evaluate(1, 0, &[]),
        Err(DiffusionError::InvalidGridPoints { .. })
    ));
    assert!(matches!(
        evaluate(10, 5, &[0.0; 4]),
        Err(DiffusionError::UncertaintyCountMismatch { expected: 5, actual: 4 })
    ));
    assert!(matches!(
        evaluate(usize::MAX / 4, 0, &[]),
        Err(DiffusionError::GridTooLarge { .. })
    ));
}
