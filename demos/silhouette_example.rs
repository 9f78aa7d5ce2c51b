use clustereval::{
    Clustering, DistanceMetric, EvaluatorConfig, NoiseHandling, PointRelation, SimplifiedSilhouette,
};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simplified Silhouette Evaluation ===\n");

    // Sample data with three natural clusters
    let x = array![
        // Cluster 1: around (2, 2)
        [1.5, 1.8], [2.0, 2.2], [2.3, 1.9], [1.8, 2.5], [2.1, 1.7],
        // Cluster 2: around (8, 8)
        [7.8, 8.2], [8.1, 7.9], [8.3, 8.1], [7.9, 8.4], [8.2, 7.7],
        // Cluster 3: around (2, 8)
        [1.9, 7.8], [2.2, 8.1], [1.7, 8.3], [2.4, 7.9], [2.0, 8.2],
        // Some noise points
        [5.0, 5.0], [0.0, 0.0], [10.0, 0.0]
    ];
    let relation = PointRelation::new(x);

    println!("Dataset: {} samples, {} features\n", relation.len(), relation.dimensionality());

    // Candidate labellings, as a density-based algorithm would emit them (-1 = noise)
    let candidates = vec![
        (
            "Three clusters + noise",
            array![0., 0., 0., 0., 0., 1., 1., 1., 1., 1., 2., 2., 2., 2., 2., -1., -1., -1.],
        ),
        (
            "Two clusters (1 and 3 merged)",
            array![0., 0., 0., 0., 0., 1., 1., 1., 1., 1., 0., 0., 0., 0., 0., -1., -1., -1.],
        ),
        (
            "Noise assigned to nearest cluster",
            array![0., 0., 0., 0., 0., 1., 1., 1., 1., 1., 2., 2., 2., 2., 2., 1., 0., 1.],
        ),
        (
            "Mostly noise",
            array![0., 0., -1., -1., -1., 1., 1., -1., -1., -1., -1., -1., -1., -1., -1., -1., -1., -1.],
        ),
    ];

    let handlings = [
        NoiseHandling::IgnoreNoise,
        NoiseHandling::IgnoreNoiseWithPenalty,
        NoiseHandling::TreatNoiseAsSingletons,
    ];

    for (description, labels) in &candidates {
        let clustering = Clustering::from_labels(labels)?;
        println!(
            "{}: {} clusters, {} noise points",
            description,
            clustering.len() - usize::from(clustering.noise_size() > 0),
            clustering.noise_size()
        );

        for &handling in &handlings {
            let score = SimplifiedSilhouette::new(DistanceMetric::Euclidean)
                .noise_handling(handling)
                .evaluate(&clustering, &relation)?;
            println!("  {:<28} {:>8.4}", handling.to_string(), score);
        }
        println!();
    }

    println!("=== Detailed Report ===");

    let config = EvaluatorConfig {
        distance: DistanceMetric::Manhattan,
        ..EvaluatorConfig::default()
    };
    let clustering = Clustering::from_labels(&candidates[0].1)?;
    let report = config.build().evaluate_detailed(&clustering, &relation)?;
    println!("{}", report);

    Ok(())
}
