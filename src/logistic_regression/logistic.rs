use rand::prelude::*;

use crate::common::utils::inner_product;
use crate::learner::Learner;
use crate::sample::{LabelEncoding, Sample};
use crate::{Error, Result};

use super::logistic_model::LogisticModel;


const DEFAULT_ALPHA: f64 = 0.1;
const DEFAULT_EPOCHS: usize = 100;
const DEFAULT_THRESHOLD: f64 = 1e-5;
const DEFAULT_SEED: u64 = 1234;


/// The sigmoid function `1 / (1 + exp(-z))`.
/// No stabilization is applied;
/// an extreme `z` saturates to exactly `0` or `1` and the saturated
/// value propagates.
/// That is accepted boundary behavior, not a bug.
#[inline(always)]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}


/// Logistic regression learner.
/// `fit` augments the features with a leading bias column of ones,
/// then runs online gradient descent on the binary cross-entropy loss,
/// one example at a time,
/// stopping early once the training error stops moving.
///
/// The example order is fixed by **one** random permutation drawn
/// before the epoch loop and re-applied every epoch,
/// not re-shuffled per epoch.
///
/// # Example
/// ```
/// use minibags::prelude::*;
///
/// let sample = Sample::from_raw(
///     &[[0.0, 0.0], [1.0, 1.0]],
///     vec![0, 1],
///     LabelEncoding::ZeroOne,
/// ).unwrap();
///
/// let lr = LogisticRegression::new()
///     .alpha(0.5)
///     .epochs(500)
///     .seed(42);
/// let f = lr.fit(&sample).unwrap();
/// let predictions = f.predict(sample.features(), true).unwrap();
/// assert_eq!(predictions.values(), sample.target().values());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogisticRegression {
    alpha: f64,
    epochs: usize,
    threshold: f64,
    seed: u64,
}


impl LogisticRegression {
    /// Construct a `LogisticRegression` learner with
    /// the default parameters.
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            epochs: DEFAULT_EPOCHS,
            threshold: DEFAULT_THRESHOLD,
            seed: DEFAULT_SEED,
        }
    }


    /// Set the stepsize to take along the gradient.
    /// Default value is `0.1`.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }


    /// Set the maximum number of full passes over the training set.
    /// Default value is `100`.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }


    /// Set the early-stopping threshold.
    /// Training stops once the training error of an epoch is within
    /// `threshold` of the previous epoch's error.
    /// Default value is `1e-5`.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }


    /// Set the seed of the randomness for the example permutation.
    /// Default value is `1234`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}


impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}


impl Learner for LogisticRegression {
    type Model = LogisticModel;

    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        if !(self.alpha > 0f64) {
            return Err(Error::InvalidArgument(
                format!("the stepsize must be positive, got {}", self.alpha)
            ));
        }
        if self.epochs == 0 {
            return Err(Error::InvalidArgument(
                "the number of epochs must be positive".into()
            ));
        }
        let target = sample.target();
        if target.encoding() != LabelEncoding::ZeroOne {
            return Err(Error::InvalidArgument(
                "the gradient update needs {0, 1} labels; \
                 relabel the sample first".into()
            ));
        }

        let (n_sample, n_feature) = sample.shape();

        // Bias-augmented copy of the training matrix.
        let width = n_feature + 1;
        let mut rows = vec![1f64; n_sample * width];
        for (chunk, i) in rows.chunks_exact_mut(width).zip(0..n_sample) {
            chunk[1..].copy_from_slice(sample.features().row(i));
        }
        let y = target.values()
            .iter()
            .map(|&v| v as f64)
            .collect::<Vec<_>>();

        let mut theta = vec![0f64; width];

        // One permutation for the entire run.
        // Re-applying it at the start of every epoch reproduces the
        // cumulative reordering of the reference design.
        let mut perm = (0..n_sample).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(self.seed);
        perm.shuffle(&mut rng);

        let mut order = (0..n_sample).collect::<Vec<_>>();
        let mut last_epoch_error = 1e6;
        let mut epochs_run = 0;
        let mut converged = false;

        for _ in 0..self.epochs {
            order = perm.iter()
                .map(|&k| order[k])
                .collect();

            // Online update, one example at a time.
            for &i in &order {
                let x = &rows[i * width..(i + 1) * width];
                let s = sigmoid(inner_product(x, &theta));
                let grad = s - y[i];
                theta.iter_mut()
                    .zip(x)
                    .for_each(|(t, xi)| *t -= self.alpha * grad * xi);
            }
            epochs_run += 1;

            // Training error of this epoch under the current weights.
            let n_wrong = (0..n_sample).filter(|&i| {
                    let x = &rows[i * width..(i + 1) * width];
                    let p = sigmoid(inner_product(x, &theta));
                    let predicted = if p > 0.5 { 1f64 } else { 0f64 };
                    predicted != y[i]
                })
                .count();
            let epoch_error = n_wrong as f64 / n_sample as f64;

            if (last_epoch_error - epoch_error).abs() < self.threshold {
                converged = true;
                break;
            }
            last_epoch_error = epoch_error;
        }

        Ok(LogisticModel::new(theta, epochs_run, converged))
    }
}
