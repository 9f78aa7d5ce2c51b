use crate::cluster::Cluster;
use crate::dataset::{PointId, PointRelation};
use crate::error::{EvaluationError, Result};
use crate::Vector;
use rayon::prelude::*;

/// Coordinate-wise arithmetic mean of the given points.
pub fn centroid(relation: &PointRelation, ids: &[PointId]) -> Result<Vector> {
    if ids.is_empty() {
        return Err(EvaluationError::InvalidInput(
            "Cannot compute the centroid of an empty point set".to_string(),
        ));
    }

    let mut mean = Vector::zeros(relation.dimensionality());
    for &id in ids {
        mean += &relation.resolve(id)?;
    }
    mean /= ids.len() as f64;

    Ok(mean)
}

/// One centroid per cluster, in cluster order.
///
/// An empty cluster fails with `DegenerateCluster` carrying its position in
/// `clusters`.
pub fn centroids(relation: &PointRelation, clusters: &[&Cluster], parallel: bool) -> Result<Vec<Vector>> {
    let compute = |(index, cluster): (usize, &&Cluster)| {
        if cluster.is_empty() {
            return Err(EvaluationError::DegenerateCluster { index });
        }
        centroid(relation, cluster.ids())
    };

    if parallel {
        clusters.par_iter().enumerate().map(compute).collect()
    } else {
        clusters.iter().enumerate().map(compute).collect()
    }
}
