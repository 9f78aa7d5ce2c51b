use crate::error::{EvaluationError, Result};
use crate::Matrix;
use ndarray::ArrayView1;
use std::collections::HashMap;

/// Stable identifier of a point within a [`PointRelation`].
pub type PointId = usize;

/// Read-only point store: one feature row per identifier.
#[derive(Clone, Debug)]
pub struct PointRelation {
    features: Matrix,
    ids: Vec<PointId>,
    index: HashMap<PointId, usize>,
}

impl PointRelation {
    /// Relation whose identifiers are the row indices of `features`.
    pub fn new(features: Matrix) -> Self {
        let ids: Vec<PointId> = (0..features.nrows()).collect();
        let index = ids.iter().map(|&id| (id, id)).collect();

        Self { features, ids, index }
    }

    pub fn with_ids(features: Matrix, ids: Vec<PointId>) -> Result<Self> {
        if features.nrows() != ids.len() {
            return Err(EvaluationError::InvalidInput(format!(
                "Number of ids ({}) must match number of rows ({})",
                ids.len(),
                features.nrows()
            )));
        }

        let mut index = HashMap::with_capacity(ids.len());
        for (row, &id) in ids.iter().enumerate() {
            if index.insert(id, row).is_some() {
                return Err(EvaluationError::InvalidInput(format!(
                    "Duplicate point id {}",
                    id
                )));
            }
        }

        Ok(Self { features, ids, index })
    }

    pub fn get(&self, id: PointId) -> Option<ArrayView1<'_, f64>> {
        self.index.get(&id).map(|&row| self.features.row(row))
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn resolve(&self, id: PointId) -> Result<ArrayView1<'_, f64>> {
        self.get(id).ok_or_else(|| {
            EvaluationError::InvalidInput(format!("Point id {} not found in relation", id))
        })
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimensionality(&self) -> usize {
        self.features.ncols()
    }
}
