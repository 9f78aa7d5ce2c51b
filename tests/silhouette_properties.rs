use clustereval::{
    Cluster, Clustering, EuclideanDistance, EvaluatorConfig, ManhattanDistance, Matrix,
    NoiseHandling, PointRelation, SimplifiedSilhouette,
};
use ndarray::{concatenate, Array2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const HANDLINGS: [NoiseHandling; 3] = [
    NoiseHandling::IgnoreNoise,
    NoiseHandling::IgnoreNoiseWithPenalty,
    NoiseHandling::TreatNoiseAsSingletons,
];

/// `k` blobs of `per_cluster` points each, followed by `n_noise` scattered points.
fn blobs(rng: &mut StdRng, k: usize, per_cluster: usize, n_noise: usize, dim: usize) -> (Clustering, PointRelation) {
    let mut parts = Vec::new();
    let mut clustering = Clustering::default();
    let mut next_id = 0;

    for _ in 0..k {
        let center = Array2::random_using((1, dim), Uniform::new(-20.0, 20.0), rng);
        let jitter: Matrix = Array2::random_using((per_cluster, dim), Uniform::new(-1.0, 1.0), rng);
        parts.push(&jitter + &center);
        clustering.push(Cluster::new((next_id..next_id + per_cluster).collect()));
        next_id += per_cluster;
    }

    if n_noise > 0 {
        parts.push(Array2::random_using((n_noise, dim), Uniform::new(-40.0, 40.0), rng));
        clustering.push(Cluster::noise((next_id..next_id + n_noise).collect()));
    }

    let views: Vec<_> = parts.iter().map(|p| p.view()).collect();
    let features = concatenate(Axis(0), &views).unwrap();
    (clustering, PointRelation::new(features))
}

fn shuffled(clustering: &Clustering, rng: &mut StdRng) -> Clustering {
    let mut clusters: Vec<Cluster> = clustering
        .clusters()
        .iter()
        .map(|c| {
            let mut ids = c.ids().to_vec();
            ids.shuffle(rng);
            if c.is_noise() { Cluster::noise(ids) } else { Cluster::new(ids) }
        })
        .collect();
    clusters.shuffle(rng);
    Clustering::new(clusters)
}

#[test]
fn test_well_separated_scenario() {
    let relation = PointRelation::new(ndarray::array![
        [0.0, 0.0],
        [0.0, 1.0],
        [10.0, 0.0],
        [10.0, 1.0]
    ]);
    let clustering = Clustering::from_labels(&ndarray::array![0.0, 0.0, 1.0, 1.0]).unwrap();

    let score = SimplifiedSilhouette::new(EuclideanDistance)
        .noise_handling(NoiseHandling::IgnoreNoise)
        .evaluate(&clustering, &relation)
        .unwrap();

    assert!(score > 0.94 && score < 1.0);
}

#[test]
fn test_score_is_bounded() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let k = rng.gen_range(1..6);
        let (clustering, relation) = blobs(&mut rng, k, 6, 4, 3);

        for handling in HANDLINGS {
            let report = SimplifiedSilhouette::new(EuclideanDistance)
                .noise_handling(handling)
                .evaluate_detailed(&clustering, &relation)
                .unwrap();

            assert!(report.raw_score >= -1.0 && report.raw_score <= 1.0);
            assert!(report.score.abs() <= report.penalty + 1e-12);
            for cluster in &report.clusters {
                assert!(cluster.min >= -1.0 && cluster.max <= 1.0);
                assert!(cluster.min <= cluster.mean + 1e-12 && cluster.mean <= cluster.max + 1e-12);
            }
        }
    }
}

#[test]
fn test_penalty_relation() {
    let mut rng = StdRng::seed_from_u64(11);

    for n_noise in [0, 1, 5, 12] {
        let (clustering, relation) = blobs(&mut rng, 3, 8, n_noise, 2);
        let n_total = clustering.total_size() as f64;

        let ignore = SimplifiedSilhouette::new(EuclideanDistance)
            .noise_handling(NoiseHandling::IgnoreNoise)
            .evaluate(&clustering, &relation)
            .unwrap();
        let penalised = SimplifiedSilhouette::new(EuclideanDistance)
            .noise_handling(NoiseHandling::IgnoreNoiseWithPenalty)
            .evaluate(&clustering, &relation)
            .unwrap();

        if n_noise == 0 {
            assert_eq!(ignore.to_bits(), penalised.to_bits());
        } else {
            let factor = (n_total - n_noise as f64) / n_total;
            assert!((penalised - ignore * factor).abs() < 1e-12);
        }
    }
}

#[test]
fn test_invariant_under_reordering() {
    let mut rng = StdRng::seed_from_u64(23);
    let (clustering, relation) = blobs(&mut rng, 4, 10, 3, 5);

    for handling in HANDLINGS {
        let evaluator = SimplifiedSilhouette::new(ManhattanDistance).noise_handling(handling);
        let reference = evaluator.evaluate(&clustering, &relation).unwrap();

        for _ in 0..5 {
            let reordered = shuffled(&clustering, &mut rng);
            let score = evaluator.evaluate(&reordered, &relation).unwrap();
            assert!((score - reference).abs() < 1e-9);
        }
    }
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(31);
    let (clustering, relation) = blobs(&mut rng, 5, 20, 7, 4);
    let evaluator = SimplifiedSilhouette::new(EuclideanDistance);

    let first = evaluator.evaluate(&clustering, &relation).unwrap();
    for _ in 0..3 {
        let again = evaluator.evaluate(&clustering, &relation).unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

#[test]
fn test_parallel_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(43);
    let (clustering, relation) = blobs(&mut rng, 6, 50, 10, 8);

    for handling in HANDLINGS {
        let config = EvaluatorConfig {
            noise_handling: handling,
            ..EvaluatorConfig::default()
        };
        let sequential = config.build().evaluate_detailed(&clustering, &relation).unwrap();

        let parallel_config = EvaluatorConfig {
            parallel: true,
            ..config
        };
        let parallel = parallel_config
            .build()
            .evaluate_detailed(&clustering, &relation)
            .unwrap();

        assert_eq!(sequential.score.to_bits(), parallel.score.to_bits());
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn test_noise_as_singletons_accounting() {
    let mut rng = StdRng::seed_from_u64(59);
    let (clustering, relation) = blobs(&mut rng, 3, 5, 2, 2);

    let report = SimplifiedSilhouette::new(EuclideanDistance)
        .noise_handling(NoiseHandling::TreatNoiseAsSingletons)
        .evaluate_detailed(&clustering, &relation)
        .unwrap();

    assert_eq!(report.n_scored_clusters, 3 + 2);
    assert_eq!(report.n_noise, 0);
    assert_eq!(report.n_scored_points, report.n_total);
    assert_eq!(report.penalty, 1.0);

    // The former noise points sit at the end as singletons
    let singletons = &report.clusters[3..];
    assert!(singletons.iter().all(|c| c.size == 1 && c.mean == 0.0));
}

#[test]
fn test_single_cluster_with_noise_scenario() {
    let mut rng = StdRng::seed_from_u64(71);
    let (clustering, relation) = blobs(&mut rng, 1, 7, 3, 2);

    let report = SimplifiedSilhouette::new(EuclideanDistance)
        .noise_handling(NoiseHandling::IgnoreNoiseWithPenalty)
        .evaluate_detailed(&clustering, &relation)
        .unwrap();

    assert!((report.penalty - 0.7).abs() < 1e-12);
    assert_eq!(report.raw_score, 0.0);
    assert_eq!(report.score, 0.0);
}
