//! Integration tests for the Kohonen tracer.

use kohonen_tracer::data::{generate_samples, seeded_rng, uniform_weights, Circle, Lemniscate};
use kohonen_tracer::{
    evaluate_distances, locate_bmu, train, Config, Matrix, Scenario, SomConfig, SomTrainer,
};
use std::fs;
use tempfile::tempdir;

/// Mean over nodes of the distance to the closest sample.
fn mean_nearest_sample_distance(samples: &Matrix, weights: &Matrix) -> f64 {
    let total: f64 = weights
        .iter_rows()
        .map(|node| {
            let (_, d) = locate_bmu(&evaluate_distances(node, samples)).unwrap();
            d.sqrt()
        })
        .sum();
    total / weights.rows() as f64
}

/// Creates the circle data set: 500 points near radius 0.75 and 50 nodes in [-1, 1]^2.
fn circle_setup(seed: u64) -> (Matrix, Matrix) {
    let mut rng = seeded_rng(Some(seed));
    let weights = uniform_weights(50, 2, -1.0, 1.0, &mut rng).unwrap();
    let samples = generate_samples(&Circle::default(), 500, &mut rng);
    (samples, weights)
}

#[test]
fn test_chain_contracts_onto_circle() {
    for seed in [1, 42, 1234] {
        let (samples, mut weights) = circle_setup(seed);
        let before = mean_nearest_sample_distance(&samples, &weights);

        train(&samples, &mut weights, 0.1).unwrap();
        let after = mean_nearest_sample_distance(&samples, &weights);

        assert!(after < before, "seed {}: {} >= {}", seed, after, before);
        assert_eq!(weights.rows(), 50);
        assert_eq!(weights.cols(), 2);
    }
}

#[test]
fn test_trained_nodes_inside_sample_disc() {
    let (samples, mut weights) = circle_setup(7);
    train(&samples, &mut weights, 0.1).unwrap();

    // Every sample lies within radius 1.05, and trained nodes are running
    // averages of samples, so none may remain in the corners of [-1, 1]^2.
    for node in weights.iter_rows() {
        let r = (node[0] * node[0] + node[1] * node[1]).sqrt();
        assert!(r < 1.1, "node at radius {}", r);
    }
}

#[test]
fn test_training_is_deterministic() {
    let (samples, initial) = circle_setup(99);

    let mut a = initial.clone();
    let mut b = initial;
    train(&samples, &mut a, 0.1).unwrap();
    train(&samples, &mut b, 0.1).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_parallel_trainer_matches_sequential() {
    let mut rng = seeded_rng(Some(5));
    let initial = uniform_weights(20, 2, -1.0, 1.0, &mut rng).unwrap();
    let samples = generate_samples(&Lemniscate::default(), 300, &mut rng);

    let mut sequential = initial.clone();
    let mut parallel = initial;

    let config = SomConfig { parallel: true, ..Default::default() };
    let summary_seq = SomTrainer::default().train(&samples, &mut sequential, 0.01).unwrap();
    let summary_par = SomTrainer::new(&config).train(&samples, &mut parallel, 0.01).unwrap();

    assert_eq!(summary_seq, summary_par);
    assert_eq!(summary_seq.passes, 99);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_circle_scenario_writes_csv() {
    let dir = tempdir().unwrap();
    let config = Config {
        som: SomConfig { seed: Some(42), ..Default::default() },
        ..Default::default()
    };

    let report = Scenario::circle().run(&config, dir.path()).unwrap();
    assert_eq!(report.summary.passes, 90);

    let samples = fs::read_to_string(&report.samples_path).unwrap();
    let initial = fs::read_to_string(&report.initial_weights_path).unwrap();
    let trained = fs::read_to_string(&report.trained_weights_path).unwrap();

    assert_eq!(samples.lines().count(), 500);
    assert_eq!(initial.lines().count(), 50);
    assert_eq!(trained.lines().count(), 50);
    assert!(!trained.ends_with('\n'));
    assert_ne!(initial, trained);

    for line in trained.lines() {
        let values: Vec<f64> = line.split(',').map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 2);
    }

    assert!(dir.path().join("test1.csv").exists());
    assert!(dir.path().join("w11.csv").exists());
    assert!(dir.path().join("w12.csv").exists());
}

#[test]
fn test_lemniscate_scenario_in_nested_dir() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("runs").join("lemniscate");
    let config = Config {
        som: SomConfig { seed: Some(3), ..Default::default() },
        ..Default::default()
    };

    let report = Scenario::lemniscate().run(&config, &out).unwrap();
    assert_eq!(report.summary.passes, 99);
    assert_eq!(report.summary.final_radius, 1);

    let trained = fs::read_to_string(out.join("w22.csv")).unwrap();
    assert_eq!(trained.lines().count(), 20);
}

#[test]
fn test_seeded_scenarios_reproducible() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();
    let config = Config {
        som: SomConfig { seed: Some(11), ..Default::default() },
        ..Default::default()
    };

    let a = Scenario::lemniscate().run(&config, dir_a.path()).unwrap();
    let b = Scenario::lemniscate().run(&config, dir_b.path()).unwrap();

    assert_eq!(
        fs::read_to_string(a.trained_weights_path).unwrap(),
        fs::read_to_string(b.trained_weights_path).unwrap()
    );
}
