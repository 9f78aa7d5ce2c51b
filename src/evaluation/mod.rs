//! Internal clustering quality measures.
//!
//! This module provides:
//! - `SimplifiedSilhouette`: centroid-based silhouette coefficient, O(n·k)
//! - `NoiseHandling`: how noise clusters take part in scoring
//! - `MeanVariance`: streaming mean/variance used for aggregation
//!
//! # Examples
//!
//! ## Scoring a DBSCAN-style labelling
//! ```rust
//! use clustereval::{Clustering, DistanceMetric, NoiseHandling, PointRelation, SimplifiedSilhouette};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [15.0, 1.0] // Outlier
//! ];
//! let labels = array![0.0, 0.0, 1.0, 1.0, -1.0];
//!
//! let relation = PointRelation::new(x);
//! let clustering = Clustering::from_labels(&labels).unwrap();
//!
//! let evaluator = SimplifiedSilhouette::new(DistanceMetric::Euclidean)
//!     .noise_handling(NoiseHandling::IgnoreNoiseWithPenalty);
//! let report = evaluator.evaluate_detailed(&clustering, &relation).unwrap();
//!
//! // One point in five was discarded as noise
//! assert!((report.penalty - 0.8).abs() < 1e-12);
//! println!("{}", report);
//! ```

mod centroid;
mod mean_variance;
mod noise;
mod report;
mod simplified_silhouette;

pub use centroid::{centroid, centroids};
pub use mean_variance::MeanVariance;
pub use noise::NoiseHandling;
pub use report::{ClusterSilhouette, SilhouetteReport};
pub use simplified_silhouette::SimplifiedSilhouette;
