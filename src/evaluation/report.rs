use super::NoiseHandling;
use std::fmt;

/// Mean silhouette of one scored cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterSilhouette {
    /// Position in the evaluated cluster sequence (after any noise expansion).
    pub index: usize,
    pub size: usize,
    pub mean: f64,
    /// Smallest per-point silhouette in the cluster.
    pub min: f64,
    pub max: f64,
}

/// Detailed outcome of a simplified silhouette evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct SilhouetteReport {
    /// Final score, penalty applied.
    pub score: f64,
    /// Mean per-point silhouette before the penalty.
    pub raw_score: f64,
    pub penalty: f64,
    /// Sample variance of the per-point silhouettes.
    pub variance: f64,
    pub noise_handling: NoiseHandling,
    pub n_total: usize,
    pub n_noise: usize,
    pub n_scored_points: usize,
    pub n_scored_clusters: usize,
    pub clusters: Vec<ClusterSilhouette>,
}

impl SilhouetteReport {
    pub const NAME: &'static str = "Simplified Silhouette coefficient";
    pub const SHORT_NAME: &'static str = "sswc";
}

impl fmt::Display for SilhouetteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}): {:.6}", Self::NAME, Self::SHORT_NAME, self.score)?;
        writeln!(f, "  noise handling: {}", self.noise_handling)?;
        writeln!(
            f,
            "  raw mean: {:.6}, variance: {:.6}, penalty: {:.4}",
            self.raw_score, self.variance, self.penalty
        )?;
        write!(
            f,
            "  points: {} scored / {} noise / {} total in {} clusters",
            self.n_scored_points, self.n_noise, self.n_total, self.n_scored_clusters
        )?;
        for cluster in &self.clusters {
            write!(
                f,
                "\n    cluster {}: {} points, mean {:.6} (min {:.6}, max {:.6})",
                cluster.index, cluster.size, cluster.mean, cluster.min, cluster.max
            )?;
        }
        Ok(())
    }
}
