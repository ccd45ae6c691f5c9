use serde::{Serialize, Deserialize};

use crate::{Error, Result};


/// The two label conventions used by the classifiers.
/// The original email-classification framing calls the negative class
/// **ham** and the positive class **spam**;
/// the encoding is carried explicitly alongside every label vector
/// instead of being inferred from a sentinel parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelEncoding {
    /// Ham is `0`, spam is `1`.
    ZeroOne,
    /// Ham is `-1`, spam is `+1`.
    PlusMinus,
}


impl LabelEncoding {
    /// The numeric value of the ham (negative) class.
    pub fn ham(&self) -> i8 {
        match self {
            Self::ZeroOne => 0,
            Self::PlusMinus => -1,
        }
    }


    /// The numeric value of the spam (positive) class.
    pub fn spam(&self) -> i8 {
        1
    }


    /// Maps a spam decision to a label of this encoding.
    pub fn label(&self, is_spam: bool) -> i8 {
        if is_spam { self.spam() } else { self.ham() }
    }


    fn contains(&self, value: i8) -> bool {
        value == self.ham() || value == self.spam()
    }
}


impl Default for LabelEncoding {
    fn default() -> Self {
        Self::ZeroOne
    }
}


/// Struct `LabelVector` holds one label per example,
/// index-aligned with the rows of a [`FeatureMatrix`],
/// together with the [`LabelEncoding`] its values follow.
///
/// [`FeatureMatrix`]: crate::FeatureMatrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelVector {
    values: Vec<i8>,
    encoding: LabelEncoding,
}


impl LabelVector {
    /// Construct a `LabelVector`.
    /// Every value must belong to `encoding`.
    pub fn new(values: Vec<i8>, encoding: LabelEncoding) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidArgument(
                "a label vector needs at least one entry".into()
            ));
        }
        if let Some(&bad) = values.iter().find(|v| !encoding.contains(**v)) {
            return Err(Error::InvalidArgument(
                format!("label {bad} does not belong to {encoding:?}")
            ));
        }
        Ok(Self { values, encoding })
    }


    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if `self` holds no labels.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// The encoding of `self`.
    pub fn encoding(&self) -> LabelEncoding {
        self.encoding
    }


    /// Returns the labels as a slice.
    pub fn values(&self) -> &[i8] {
        &self.values[..]
    }


    /// Returns `true` if the `idx`-th example is labeled spam.
    pub fn is_spam(&self, idx: usize) -> bool {
        self.values[idx] == self.encoding.spam()
    }


    /// Relabel `self` into `encoding`.
    /// Only the numeric convention changes;
    /// which examples are called spam does not.
    pub fn relabel(&self, encoding: LabelEncoding) -> Self {
        let values = self.values.iter()
            .map(|&v| encoding.label(v == self.encoding.spam()))
            .collect();
        Self { values, encoding }
    }


    /// Materialize the labels at `indices`, preserving their order.
    pub(crate) fn gather(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.len()) {
            return Err(Error::InvalidArgument(
                format!("label index {bad} is out of range [0, {})", self.len())
            ));
        }
        let values = indices.iter()
            .map(|&i| self.values[i])
            .collect();
        Ok(Self { values, encoding: self.encoding })
    }
}
