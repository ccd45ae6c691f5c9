use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::common::utils::inner_product;
use crate::learner::{Model, SoftModel};
use crate::sample::{FeatureMatrix, LabelEncoding, LabelVector};
use crate::{Error, Result};

use super::logistic::sigmoid;


/// The weight vector trained by
/// [`LogisticRegression`](super::LogisticRegression).
/// The leading entry is the bias weight,
/// so the vector has `D + 1` entries for `D` features.
/// Read-only after training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    theta: Vec<f64>,
    epochs_run: usize,
    converged: bool,
}


impl LogisticModel {
    pub(super) fn new(theta: Vec<f64>, epochs_run: usize, converged: bool)
        -> Self
    {
        Self { theta, epochs_run, converged }
    }


    /// The trained weights, bias first.
    pub fn theta(&self) -> &[f64] {
        &self.theta[..]
    }


    /// The number of epochs the training loop ran.
    pub fn epochs_run(&self) -> usize {
        self.epochs_run
    }


    /// `true` if training stopped early because the epoch error
    /// moved less than the threshold,
    /// `false` if it exhausted the epoch budget.
    pub fn converged(&self) -> bool {
        self.converged
    }


    /// Computes `sigmoid(x . theta)` for all rows of `features`
    /// without thresholding.
    /// When `add_bias` is `true` (the usual case),
    /// a leading one is prepended to every row;
    /// pass `false` only when `features` is already bias-augmented.
    /// Scores lie in `(0, 1)` except under numeric saturation.
    pub fn predict_soft(&self, features: &FeatureMatrix, add_bias: bool)
        -> Result<Vec<f64>>
    {
        self.check_width(features, add_bias)?;

        let scores = features.rows()
            .map(|x| {
                let z = if add_bias {
                    self.theta[0] + inner_product(x, &self.theta[1..])
                } else {
                    inner_product(x, &self.theta)
                };
                sigmoid(z)
            })
            .collect();
        Ok(scores)
    }


    /// Predicts `{0, 1}` labels for all rows of `features` by
    /// thresholding the sigmoid scores at `0.5`.
    /// The comparison is strict, so a tie goes to `0`.
    pub fn predict(&self, features: &FeatureMatrix, add_bias: bool)
        -> Result<LabelVector>
    {
        let values = self.predict_soft(features, add_bias)?
            .into_iter()
            .map(|p| i8::from(p > 0.5))
            .collect();
        LabelVector::new(values, LabelEncoding::ZeroOne)
    }


    /// Write `self` to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }


    /// Read a model written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let model = serde_json::from_reader(BufReader::new(file))?;
        Ok(model)
    }


    fn check_width(&self, features: &FeatureMatrix, add_bias: bool)
        -> Result<()>
    {
        let expected = if add_bias {
            self.theta.len() - 1
        } else {
            self.theta.len()
        };
        let n_feature = features.shape().1;
        if n_feature != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: n_feature,
            });
        }
        Ok(())
    }
}


impl Model for LogisticModel {
    fn predict_all(&self, features: &FeatureMatrix) -> Result<LabelVector> {
        self.predict(features, true)
    }
}


impl SoftModel for LogisticModel {
    fn confidence_all(&self, features: &FeatureMatrix) -> Result<Vec<f64>> {
        self.predict_soft(features, true)
    }
}
