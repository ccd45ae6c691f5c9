use serde::{Serialize, Deserialize};

use crate::{Error, Result};


/// Struct `FeatureMatrix` holds an `N x D` matrix of binary
/// feature values in a row-major buffer,
/// where `N` is the number of examples
/// and `D` is the number of features for each example.
/// Every entry is `0.0` or `1.0`;
/// the constructors reject anything else.
/// A `FeatureMatrix` is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    values: Vec<f64>,
    n_sample: usize,
    n_feature: usize,
}


impl FeatureMatrix {
    /// Construct a `FeatureMatrix` from a row-major buffer.
    pub fn new(values: Vec<f64>, n_sample: usize, n_feature: usize)
        -> Result<Self>
    {
        if n_sample == 0 || n_feature == 0 {
            return Err(Error::InvalidArgument(
                format!("matrix shape ({n_sample}, {n_feature}) is empty")
            ));
        }
        if values.len() != n_sample * n_feature {
            return Err(Error::DimensionMismatch {
                expected: n_sample * n_feature,
                found: values.len(),
            });
        }
        check_binary(&values)?;

        Ok(Self { values, n_sample, n_feature })
    }


    /// Construct a `FeatureMatrix` from a slice of rows.
    /// All rows must have the same length.
    pub fn from_rows<T: AsRef<[f64]>>(rows: &[T]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidArgument(
                "a matrix needs at least one row".into()
            ));
        }
        let n_sample = rows.len();
        let n_feature = rows[0].as_ref().len();

        let mut values = Vec::with_capacity(n_sample * n_feature);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_feature {
                return Err(Error::DimensionMismatch {
                    expected: n_feature,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Self::new(values, n_sample, n_feature)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th row.
    pub fn row(&self, idx: usize) -> &[f64] {
        let start = idx * self.n_feature;
        &self.values[start..start + self.n_feature]
    }


    /// Iterates over the rows of `self`.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_feature)
    }


    /// Materialize the rows at `indices` into a new matrix,
    /// preserving the order of `indices`.
    /// Indices may repeat.
    /// The output buffer is allocated once up front;
    /// rows are written by index, not concatenated one at a time.
    pub fn gather(&self, indices: &[usize]) -> Result<Self> {
        if indices.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot gather zero rows".into()
            ));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_sample) {
            return Err(Error::InvalidArgument(
                format!("row index {bad} is out of range [0, {})", self.n_sample)
            ));
        }

        let mut values = vec![0f64; indices.len() * self.n_feature];
        for (chunk, &i) in values.chunks_exact_mut(self.n_feature).zip(indices) {
            chunk.copy_from_slice(self.row(i));
        }

        Ok(Self {
            values,
            n_sample: indices.len(),
            n_feature: self.n_feature,
        })
    }
}


fn check_binary(values: &[f64]) -> Result<()> {
    match values.iter().find(|v| **v != 0f64 && **v != 1f64) {
        Some(v) => Err(Error::InvalidArgument(
            format!("feature value {v} is not in {{0, 1}}")
        )),
        None => Ok(()),
    }
}
