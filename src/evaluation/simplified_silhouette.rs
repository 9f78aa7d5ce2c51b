use super::centroid::centroids;
use super::{ClusterSilhouette, MeanVariance, NoiseHandling, SilhouetteReport};
use crate::cluster::{Cluster, Clustering};
use crate::dataset::PointRelation;
use crate::distance::DistanceFunction;
use crate::error::{EvaluationError, Result};
use crate::Vector;
use rayon::prelude::*;
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// Simplified (centroid-based) silhouette coefficient.
///
/// For every scored point, `a` is the distance to its own cluster's centroid
/// and `b` the distance to the nearest other centroid; the point contributes
/// `(b - a) / max(a, b)`. Points of singleton clusters, and all points when
/// only one cluster is scored, contribute exactly `0`.
///
/// Cost is O(n·k) distance computations for `n` scored points and `k` scored
/// clusters.
#[derive(Clone, Debug)]
pub struct SimplifiedSilhouette<D> {
    distance: D,
    noise_handling: NoiseHandling,
    parallel: bool,
}

impl<D: DistanceFunction> SimplifiedSilhouette<D> {
    pub fn new(distance: D) -> Self {
        Self {
            distance,
            noise_handling: NoiseHandling::default(),
            parallel: false,
        }
    }

    pub fn noise_handling(mut self, noise_handling: NoiseHandling) -> Self {
        self.noise_handling = noise_handling;
        self
    }

    /// Spread centroid and scoring passes over the rayon pool. The result is
    /// bit-identical to the sequential path.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn get_noise_handling(&self) -> NoiseHandling {
        self.noise_handling
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn distance_function(&self) -> &D {
        &self.distance
    }

    /// Score a clustering; see [`evaluate_detailed`](Self::evaluate_detailed).
    pub fn evaluate(&self, clustering: &Clustering, relation: &PointRelation) -> Result<f64> {
        self.evaluate_detailed(clustering, relation)
            .map(|report| report.score)
    }

    /// Score several clusterings of the same relation, in order.
    pub fn evaluate_all(&self, clusterings: &[Clustering], relation: &PointRelation) -> Vec<Result<f64>> {
        clusterings
            .iter()
            .map(|clustering| self.evaluate(clustering, relation))
            .collect()
    }

    pub fn evaluate_detailed(&self, clustering: &Clustering, relation: &PointRelation) -> Result<SilhouetteReport> {
        if clustering.is_empty() {
            return Err(EvaluationError::InvalidInput(
                "Clustering must contain at least one cluster".to_string(),
            ));
        }
        if let Some(expected) = self.distance.dimensionality() {
            if expected != relation.dimensionality() {
                return Err(EvaluationError::DimensionMismatch {
                    expected,
                    actual: relation.dimensionality(),
                });
            }
        }

        let clustering = match self.noise_handling {
            NoiseHandling::TreatNoiseAsSingletons => Cow::Owned(clustering.noise_to_singletons()),
            _ => Cow::Borrowed(clustering),
        };

        let n_total = clustering.total_size();
        let mut n_noise = 0;
        let mut indices = Vec::new();
        let mut scored: Vec<&Cluster> = Vec::new();

        for (index, cluster) in clustering.clusters().iter().enumerate() {
            if let Some(&id) = cluster.ids().iter().find(|&&id| !relation.contains(id)) {
                return Err(EvaluationError::InvalidInput(format!(
                    "Point id {} of cluster {} not found in relation",
                    id, index
                )));
            }
            if cluster.is_noise() && self.noise_handling.excludes_noise() {
                n_noise += cluster.len();
                continue;
            }
            if cluster.is_empty() {
                return Err(EvaluationError::DegenerateCluster { index });
            }
            indices.push(index);
            scored.push(cluster);
        }

        let reps = centroids(relation, &scored, self.parallel)?;

        let score_cluster = |own: usize| self.score_cluster(relation, scored[own], own, &reps);
        let per_cluster: Vec<ClusterScores> = if self.parallel {
            (0..scored.len())
                .into_par_iter()
                .map(&score_cluster)
                .collect::<Result<_>>()?
        } else {
            (0..scored.len()).map(&score_cluster).collect::<Result<_>>()?
        };

        // Fixed reduction order keeps results reproducible.
        let mut total = MeanVariance::new();
        for (scores, &index) in per_cluster.iter().zip(&indices) {
            trace!(
                cluster = index,
                size = scores.mv.count(),
                mean = scores.mv.mean(),
                min = scores.min,
                max = scores.max,
                "Cluster silhouette"
            );
            total.merge(&scores.mv);
        }

        let (raw_score, variance) = match total.count() {
            0 => {
                warn!(n_total, n_noise, "No scored points; simplified silhouette defaults to 0");
                (0.0, 0.0)
            }
            1 => (total.mean(), 0.0),
            _ => (total.mean(), total.sample_variance()),
        };

        let penalty = self.noise_handling.penalty(n_total, n_noise);
        let score = penalty * raw_score;

        debug!(
            score,
            raw_score,
            penalty,
            n_scored_points = total.count(),
            n_scored_clusters = scored.len(),
            noise_handling = %self.noise_handling,
            "Mean Simplified Silhouette"
        );

        Ok(SilhouetteReport {
            score,
            raw_score,
            penalty,
            variance,
            noise_handling: self.noise_handling,
            n_total,
            n_noise,
            n_scored_points: total.count(),
            n_scored_clusters: scored.len(),
            clusters: per_cluster
                .iter()
                .zip(&indices)
                .map(|(scores, &index)| ClusterSilhouette {
                    index,
                    size: scores.mv.count(),
                    mean: scores.mv.mean(),
                    min: scores.min,
                    max: scores.max,
                })
                .collect(),
        })
    }

    /// Per-point silhouettes of one scored cluster, `own` being its position
    /// among the centroids.
    ///
    /// Centroids and points are rows of the same relation, so their widths
    /// agree; the distance's declared width is checked up front.
    fn score_cluster(&self, relation: &PointRelation, cluster: &Cluster, own: usize, reps: &[Vector]) -> Result<ClusterScores> {
        let mut scores = ClusterScores::new();

        // Singleton, or nothing to compare against
        if cluster.len() <= 1 || reps.len() <= 1 {
            for _ in cluster.ids() {
                scores.put(0.0);
            }
            return Ok(scores);
        }

        for &id in cluster.ids() {
            let point = relation.resolve(id)?;
            let a = self.distance.distance(&reps[own].view(), &point);

            // Scan every competitor; only the own cluster is skipped.
            let mut b = f64::INFINITY;
            for (other, rep) in reps.iter().enumerate() {
                if other == own {
                    continue;
                }
                b = b.min(self.distance.distance(&rep.view(), &point));
            }

            scores.put(silhouette(a, b));
        }

        Ok(scores)
    }
}

/// Per-point silhouettes of one cluster: running moments plus extremes.
struct ClusterScores {
    mv: MeanVariance,
    min: f64,
    max: f64,
}

impl ClusterScores {
    fn new() -> Self {
        Self {
            mv: MeanVariance::new(),
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn put(&mut self, value: f64) {
        self.mv.put(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// `(b - a) / max(a, b)`, with `0` when both distances vanish.
fn silhouette(a: f64, b: f64) -> f64 {
    let max = a.max(b);
    if max > 0.0 { (b - a) / max } else { 0.0 }
}
