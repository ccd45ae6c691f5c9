use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::learner::{Model, SoftModel};
use crate::sample::{FeatureMatrix, LabelEncoding, LabelVector};
use crate::{Error, Result};


/// The parameters estimated by [`NaiveBayes`](super::NaiveBayes):
/// class priors and per-feature presence likelihoods.
/// A model is created by `fit`, consumed read-only by prediction,
/// and never mutated.
/// After stabilization no likelihood entry is exactly `0`, `1`, or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    prior_ham: f64,
    prior_spam: f64, // equals `1.0 - prior_ham`

    likelihood_ham: Vec<f64>,
    likelihood_spam: Vec<f64>,

    encoding: LabelEncoding,
}


impl NaiveBayesModel {
    pub(super) fn new(
        prior_ham: f64,
        prior_spam: f64,
        likelihood_ham: Vec<f64>,
        likelihood_spam: Vec<f64>,
        encoding: LabelEncoding,
    ) -> Self
    {
        Self {
            prior_ham, prior_spam,
            likelihood_ham, likelihood_spam,
            encoding,
        }
    }


    /// The pair `(prior_ham, prior_spam)`.
    pub fn priors(&self) -> (f64, f64) {
        (self.prior_ham, self.prior_spam)
    }


    /// The per-feature presence likelihoods `(ham, spam)`.
    pub fn likelihoods(&self) -> (&[f64], &[f64]) {
        (&self.likelihood_ham[..], &self.likelihood_spam[..])
    }


    /// The number of features this model was trained on.
    pub fn n_feature(&self) -> usize {
        self.likelihood_ham.len()
    }


    /// The label convention of the predictions.
    pub fn encoding(&self) -> LabelEncoding {
        self.encoding
    }


    /// Computes the unnormalized log-posteriors `(ham, spam)`
    /// of a single instance.
    /// Logs are used because products of many small probabilities
    /// underflow.
    /// The absence of a feature contributes through the `(1 - x)` term.
    fn log_posteriors(&self, x: &[f64]) -> (f64, f64) {
        let mut ham = self.prior_ham.ln();
        let mut spam = self.prior_spam.ln();

        x.iter()
            .zip(self.likelihood_ham.iter().zip(&self.likelihood_spam))
            .for_each(|(xi, (ph, ps))| {
                ham += xi * ph.ln() + (1.0 - xi) * (1.0 - ph).ln();
                spam += xi * ps.ln() + (1.0 - xi) * (1.0 - ps).ln();
            });

        (ham, spam)
    }


    /// Predicts the labels of all rows of `features`
    /// in the model's label convention.
    /// An instance is called spam iff its spam log-posterior is
    /// strictly greater than its ham log-posterior;
    /// ties default to ham.
    /// No normalization is performed since only the relative ordering
    /// of the two posteriors matters.
    pub fn predict(&self, features: &FeatureMatrix) -> Result<LabelVector> {
        self.check_width(features)?;

        let values = features.rows()
            .map(|x| {
                let (ham, spam) = self.log_posteriors(x);
                self.encoding.label(spam > ham)
            })
            .collect::<Vec<_>>();

        LabelVector::new(values, self.encoding)
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


    fn check_width(&self, features: &FeatureMatrix) -> Result<()> {
        let n_feature = features.shape().1;
        if n_feature != self.n_feature() {
            return Err(Error::DimensionMismatch {
                expected: self.n_feature(),
                found: n_feature,
            });
        }
        Ok(())
    }
}


impl Model for NaiveBayesModel {
    fn predict_all(&self, features: &FeatureMatrix) -> Result<LabelVector> {
        self.predict(features)
    }
}


impl SoftModel for NaiveBayesModel {
    /// The posterior probability of the spam class,
    /// recovered from the log-posterior gap.
    fn confidence_all(&self, features: &FeatureMatrix) -> Result<Vec<f64>> {
        self.check_width(features)?;

        let scores = features.rows()
            .map(|x| {
                let (ham, spam) = self.log_posteriors(x);
                1.0 / (1.0 + (ham - spam).exp())
            })
            .collect();
        Ok(scores)
    }
}
