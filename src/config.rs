//! Evaluator configuration.
//!
//! Names the values an evaluator needs so they can be loaded from any serde
//! format instead of being wired up in code.

use crate::distance::DistanceMetric;
use crate::evaluation::{NoiseHandling, SimplifiedSilhouette};
use serde::{Deserialize, Serialize};

/// Configuration for [`SimplifiedSilhouette`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EvaluatorConfig {
    /// Distance between points and centroids.
    /// Default: Euclidean
    pub distance: DistanceMetric,

    /// How noise clusters are scored.
    /// Default: IgnoreNoiseWithPenalty
    #[serde(rename = "noise-option")]
    pub noise_handling: NoiseHandling,

    /// Use the rayon pool for centroid and scoring passes.
    /// Default: false
    pub parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            distance: DistanceMetric::default(),
            noise_handling: NoiseHandling::default(),
            parallel: false,
        }
    }
}

impl EvaluatorConfig {
    pub fn build(&self) -> SimplifiedSilhouette<DistanceMetric> {
        SimplifiedSilhouette::from_config(self)
    }
}

impl SimplifiedSilhouette<DistanceMetric> {
    pub fn from_config(config: &EvaluatorConfig) -> Self {
        SimplifiedSilhouette::new(config.distance)
            .noise_handling(config.noise_handling)
            .parallel(config.parallel)
    }
}
