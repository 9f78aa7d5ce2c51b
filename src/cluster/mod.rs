//! Partitions of a point set into clusters.
//!
//! This module provides the clustering model consumed by the evaluators:
//! - `Cluster`: a set of point ids, optionally flagged as noise
//! - `Clustering`: an ordered sequence of clusters
//!
//! Clusterings are produced elsewhere (k-means, DBSCAN, EM, ...). Any
//! algorithm emitting per-row labels can be adapted with
//! [`Clustering::from_labels`].
//!
//! # Examples
//!
//! ## From DBSCAN-style labels
//! ```rust
//! use clustereval::Clustering;
//! use ndarray::array;
//!
//! // -1 marks noise
//! let labels = array![0.0, 0.0, 1.0, 1.0, -1.0];
//! let clustering = Clustering::from_labels(&labels).unwrap();
//!
//! assert_eq!(clustering.len(), 3);
//! assert_eq!(clustering.noise_size(), 1);
//! ```
//!
//! ## Noise as singletons
//! ```rust
//! use clustereval::{Cluster, Clustering};
//!
//! let clustering = Clustering::new(vec![
//!     Cluster::new(vec![0, 1, 2]),
//!     Cluster::noise(vec![3, 4]),
//! ]);
//!
//! let split = clustering.noise_to_singletons();
//! assert_eq!(split.len(), 3);
//! assert_eq!(split.noise_size(), 0);
//! ```

mod clustering;
mod labels;

pub use clustering::{Cluster, Clustering};
