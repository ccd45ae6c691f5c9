//! Defines the `Learner` and `Model` traits.
//! A `Learner` is a configured training procedure;
//! `fit` is its only state-producing step and returns a `Model`,
//! which is consumed read-only by prediction.
use crate::sample::{FeatureMatrix, LabelVector, Sample};
use crate::Result;


/// A trait that defines the behavior of a base learner.
/// The bagging ensemble trains one model per bootstrap replicate
/// through this trait.
pub trait Learner {
    /// The trained model this learner produces.
    type Model: Model;


    /// Train a model on the given sample.
    fn fit(&self, sample: &Sample) -> Result<Self::Model>;
}


/// A trait that defines the behavior of a trained model.
pub trait Model {
    /// Predicts the labels of all rows of `features`.
    fn predict_all(&self, features: &FeatureMatrix) -> Result<LabelVector>;
}


/// A model that can also rate its predictions with a score in `[0, 1]`,
/// interpreted as the probability that an example belongs to
/// the spam (positive) class.
/// Rank-based AUC needs these scores; hard labels are not enough.
pub trait SoftModel: Model {
    /// Computes the spam-class scores of all rows of `features`.
    fn confidence_all(&self, features: &FeatureMatrix) -> Result<Vec<f64>>;
}
