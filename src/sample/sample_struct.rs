use serde::{Serialize, Deserialize};

use super::feature_matrix::FeatureMatrix;
use super::labels::{LabelEncoding, LabelVector};
use crate::{Error, Result};


/// Struct `Sample` pairs a [`FeatureMatrix`] with
/// an index-aligned [`LabelVector`].
/// This is the unit of data the learners train on
/// and the resampler draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    features: FeatureMatrix,
    target: LabelVector,
}


impl Sample {
    /// Construct a `Sample`.
    /// The number of matrix rows must equal the number of labels.
    pub fn new(features: FeatureMatrix, target: LabelVector) -> Result<Self> {
        let n_sample = features.shape().0;
        if n_sample != target.len() {
            return Err(Error::DimensionMismatch {
                expected: n_sample,
                found: target.len(),
            });
        }
        Ok(Self { features, target })
    }


    /// Construct a `Sample` from raw rows and labels
    /// following `encoding`.
    pub fn from_raw<T: AsRef<[f64]>>(
        rows: &[T],
        labels: Vec<i8>,
        encoding: LabelEncoding,
    ) -> Result<Self>
    {
        let features = FeatureMatrix::from_rows(rows)?;
        let target = LabelVector::new(labels, encoding)?;
        Self::new(features, target)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        self.features.shape()
    }


    /// The feature matrix of `self`.
    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }


    /// The label vector of `self`.
    pub fn target(&self) -> &LabelVector {
        &self.target
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (&[f64], i8) {
        (self.features.row(idx), self.target.values()[idx])
    }


    /// Materialize the instances at `indices` into a new sample,
    /// preserving the order of `indices`.
    pub fn gather(&self, indices: &[usize]) -> Result<Self> {
        let features = self.features.gather(indices)?;
        let target = self.target.gather(indices)?;
        Self::new(features, target)
    }


    /// Relabel the target into `encoding`,
    /// leaving the features untouched.
    pub fn relabel(&self, encoding: LabelEncoding) -> Self {
        Self {
            features: self.features.clone(),
            target: self.target.relabel(encoding),
        }
    }
}
