use super::{Cluster, Clustering};
use crate::error::{EvaluationError, Result};
use crate::Vector;
use std::collections::BTreeMap;

const NOISE_LABEL: f64 = -1.0;

impl Clustering {
    /// Build a clustering from per-row labels, DBSCAN style.
    ///
    /// Row `i` becomes point id `i`. Label `-1` marks noise; other labels must
    /// be non-negative integers. Clusters come out in ascending label order,
    /// with the noise cluster (if any) last.
    pub fn from_labels(labels: &Vector) -> Result<Self> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut noise = Vec::new();

        for (i, &label) in labels.iter().enumerate() {
            if label == NOISE_LABEL {
                noise.push(i);
                continue;
            }
            if !label.is_finite() || label < 0.0 || label.fract() != 0.0 {
                return Err(EvaluationError::InvalidInput(format!(
                    "Invalid cluster label {} at row {}",
                    label, i
                )));
            }
            // `as` saturates; keep distinct huge labels from collapsing
            if label >= usize::MAX as f64 {
                return Err(EvaluationError::InvalidInput(format!(
                    "Cluster label {} at row {} is out of range",
                    label, i
                )));
            }
            groups.entry(label as usize).or_default().push(i);
        }

        let mut clustering: Clustering = groups.into_values().map(Cluster::new).collect();
        if !noise.is_empty() {
            clustering.push(Cluster::noise(noise).with_name("noise"));
        }

        Ok(clustering)
    }
}
