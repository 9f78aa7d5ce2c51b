//! Distance functions consumed by the evaluator.
//!
//! The evaluator only needs [`DistanceFunction`]; the metrics here are the
//! ones selectable through [`EvaluatorConfig`](crate::EvaluatorConfig).

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// A pure, symmetric, non-negative distance over equal-width vectors.
///
/// Callers guarantee `a.len() == b.len()`; the evaluator checks widths before
/// calling so implementations do not have to. Implementations are shared
/// across the rayon pool, hence `Send + Sync`.
pub trait DistanceFunction: Send + Sync {
    fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64;

    /// Required vector width, or `None` if any width is accepted.
    fn dimensionality(&self) -> Option<usize> {
        None
    }
}

impl<T: DistanceFunction + ?Sized> DistanceFunction for &T {
    fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        (**self).distance(a, b)
    }

    fn dimensionality(&self) -> Option<usize> {
        (**self).dimensionality()
    }
}

impl<T: DistanceFunction + ?Sized> DistanceFunction for Box<T> {
    fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        (**self).distance(a, b)
    }

    fn dimensionality(&self) -> Option<usize> {
        (**self).dimensionality()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EuclideanDistance;

impl DistanceFunction for EuclideanDistance {
    fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManhattanDistance;

impl DistanceFunction for ManhattanDistance {
    fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .sum::<f64>()
    }
}

/// Distance selectable by name from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceFunction for DistanceMetric {
    fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        match self {
            DistanceMetric::Euclidean => EuclideanDistance.distance(a, b),
            DistanceMetric::Manhattan => ManhattanDistance.distance(a, b),
        }
    }
}
