use crate::error::EvaluationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How clusters flagged as noise take part in an evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseHandling {
    /// Noise points are left out of centroids and scoring.
    IgnoreNoise,
    /// As `IgnoreNoise`, then scale by the fraction of non-noise points.
    #[default]
    IgnoreNoiseWithPenalty,
    /// Every noise point becomes its own singleton cluster.
    TreatNoiseAsSingletons,
}

impl NoiseHandling {
    /// Whether noise clusters are excluded from scoring.
    pub fn excludes_noise(self) -> bool {
        matches!(
            self,
            NoiseHandling::IgnoreNoise | NoiseHandling::IgnoreNoiseWithPenalty
        )
    }

    /// Factor applied to the raw mean silhouette.
    pub fn penalty(self, n_total: usize, n_noise: usize) -> f64 {
        match self {
            NoiseHandling::IgnoreNoiseWithPenalty if n_noise > 0 && n_total > 0 => {
                (n_total - n_noise) as f64 / n_total as f64
            }
            _ => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoiseHandling::IgnoreNoise => "ignore-noise",
            NoiseHandling::IgnoreNoiseWithPenalty => "ignore-noise-with-penalty",
            NoiseHandling::TreatNoiseAsSingletons => "treat-noise-as-singletons",
        }
    }
}

impl fmt::Display for NoiseHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseHandling {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore-noise" => Ok(NoiseHandling::IgnoreNoise),
            "ignore-noise-with-penalty" => Ok(NoiseHandling::IgnoreNoiseWithPenalty),
            "treat-noise-as-singletons" => Ok(NoiseHandling::TreatNoiseAsSingletons),
            _ => Err(EvaluationError::InvalidConfig(format!(
                "Invalid noise handling: {}. Must be 'ignore-noise', \
                 'ignore-noise-with-penalty' or 'treat-noise-as-singletons'",
                s
            ))),
        }
    }
}
