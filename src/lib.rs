//! Cluster-quality evaluation.
//!
//! Scores an existing partition of a data set with the simplified
//! (centroid-based) silhouette coefficient. Clustering itself happens
//! elsewhere; this crate only consumes the resulting [`Clustering`].
//!
//! ```rust
//! use clustereval::{Clustering, EuclideanDistance, NoiseHandling, PointRelation, SimplifiedSilhouette};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
//! let relation = PointRelation::new(x);
//! let clustering = Clustering::from_labels(&array![0.0, 0.0, 1.0, 1.0]).unwrap();
//!
//! let sswc = SimplifiedSilhouette::new(EuclideanDistance)
//!     .noise_handling(NoiseHandling::IgnoreNoise)
//!     .evaluate(&clustering, &relation)
//!     .unwrap();
//! assert!(sswc > 0.9);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod config;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod evaluation;

pub use cluster::{Cluster, Clustering};
pub use config::EvaluatorConfig;
pub use dataset::{PointId, PointRelation};
pub use distance::{DistanceFunction, DistanceMetric, EuclideanDistance, ManhattanDistance};
pub use error::{EvaluationError, Result};
pub use evaluation::{
    ClusterSilhouette, MeanVariance, NoiseHandling, SilhouetteReport, SimplifiedSilhouette,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
