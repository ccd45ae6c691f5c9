use crate::learner::Learner;
use crate::sample::{LabelEncoding, Sample};
use crate::{Error, Result};

use super::nbayes_model::NaiveBayesModel;


/// Tolerance factor used to keep the estimated likelihoods
/// away from exactly `0` and `1`.
const TOLERANCE: f64 = 1e-30;


/// Bernoulli Naive Bayes learner.
/// `NaiveBayes` is stateless;
/// [`fit`](Learner::fit) estimates closed-form priors and
/// per-feature presence likelihoods and returns them as a
/// [`NaiveBayesModel`].
///
/// # Example
/// ```
/// use minibags::prelude::*;
///
/// let sample = Sample::from_raw(
///     &[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]],
///     vec![1, 0, 1, 0],
///     LabelEncoding::ZeroOne,
/// ).unwrap();
///
/// let nbayes = NaiveBayes::new();
/// let f = nbayes.fit(&sample).unwrap();
/// let predictions = f.predict_all(sample.features()).unwrap();
/// assert_eq!(predictions.values(), sample.target().values());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBayes {
    encoding: LabelEncoding,
}


impl NaiveBayes {
    /// Construct a `NaiveBayes` learner with the
    /// default `ZeroOne` label convention.
    pub fn new() -> Self {
        Self { encoding: LabelEncoding::ZeroOne }
    }


    /// Set the label convention of the experiment.
    /// The trained model predicts labels in the same convention.
    pub fn encoding(mut self, encoding: LabelEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}


impl Learner for NaiveBayes {
    type Model = NaiveBayesModel;

    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        let target = sample.target();
        if target.encoding() != self.encoding {
            return Err(Error::InvalidArgument(
                format!(
                    "the sample is labeled with {:?} \
                     but the learner is configured for {:?}",
                    target.encoding(), self.encoding,
                )
            ));
        }

        let (n_sample, n_feature) = sample.shape();
        let n_spam = (0..n_sample).filter(|&i| target.is_spam(i)).count();
        let n_ham = n_sample - n_spam;

        if n_ham == 0 || n_spam == 0 {
            let missing = if n_ham == 0 { "ham" } else { "spam" };
            return Err(Error::InsufficientData(
                format!("the {missing} class has no examples")
            ));
        }

        let prior_spam = n_spam as f64 / n_sample as f64;
        let prior_ham = 1.0 - prior_spam;


        // Per-class presence counts for each feature.
        let mut likelihood_ham = vec![0f64; n_feature];
        let mut likelihood_spam = vec![0f64; n_feature];
        for i in 0..n_sample {
            let (x, _) = sample.at(i);
            let acc = if target.is_spam(i) {
                &mut likelihood_spam
            } else {
                &mut likelihood_ham
            };
            acc.iter_mut()
                .zip(x)
                .for_each(|(a, xi)| { *a += xi; });
        }

        likelihood_ham.iter_mut().for_each(|p| *p /= n_ham as f64);
        likelihood_spam.iter_mut().for_each(|p| *p /= n_spam as f64);


        // Mandatory before inference:
        // `predict` takes logarithms of both the likelihood and its
        // complement, so an exact 0 or 1 here would turn into
        // a `-inf`/NaN log-posterior and a silently wrong prediction.
        process_parameters(&mut likelihood_ham);
        process_parameters(&mut likelihood_spam);

        Ok(NaiveBayesModel::new(
            prior_ham,
            prior_spam,
            likelihood_ham,
            likelihood_spam,
            self.encoding,
        ))
    }
}


/// Replace NaN and exact-zero entries by the tolerance factor
/// and exact-one entries by its complement.
/// This is a deliberate numerical correction, not error recovery.
fn process_parameters(p: &mut [f64]) {
    p.iter_mut()
        .for_each(|v| {
            if v.is_nan() || *v == 0f64 {
                *v = TOLERANCE;
            } else if *v == 1f64 {
                *v = 1f64 - TOLERANCE;
            }
        });
}
