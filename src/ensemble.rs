//! Defines the bagging orchestration:
//! `N` independently trained base learners,
//! one per bootstrap replicate.
//! The ensemble's product is the per-learner predictions;
//! how they are aggregated is the consumer's decision,
//! though a majority-vote helper is provided.
use rayon::prelude::*;

use crate::bootstrap::Bootstrap;
use crate::learner::{Learner, Model};
use crate::sample::{FeatureMatrix, LabelVector, Sample};
use crate::{Error, Result};


const DEFAULT_MEMBERS: usize = 10;
const DEFAULT_SEED: u64 = 1234;


/// Struct `Bagging` trains `n_members` copies of a base learner,
/// each on its own bootstrap replicate of the training sample.
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
/// let bagging = Bagging::new(NaiveBayes::new())
///     .members(5)
///     .draws(64)
///     .seed(42);
/// let models = bagging.fit(&sample).unwrap();
/// assert_eq!(models.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Bagging<L> {
    learner: L,
    n_members: usize,
    n_draws: Option<usize>,
    seed: u64,
}


impl<L> Bagging<L> {
    /// Construct a `Bagging` ensemble around a base learner.
    pub fn new(learner: L) -> Self {
        Self {
            learner,
            n_members: DEFAULT_MEMBERS,
            n_draws: None,
            seed: DEFAULT_SEED,
        }
    }


    /// Set the number of ensemble members.
    /// Default value is `10`.
    pub fn members(mut self, n_members: usize) -> Self {
        self.n_members = n_members;
        self
    }


    /// Set the number of instances drawn into each replicate.
    /// By default each replicate has the size of the base sample.
    pub fn draws(mut self, n_draws: usize) -> Self {
        self.n_draws = Some(n_draws);
        self
    }


    /// Set the seed of the randomness for the bootstrap draws.
    /// Default value is `1234`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}


impl<L> Bagging<L>
    where L: Learner + Sync,
          L::Model: Send,
{
    /// Train one model per bootstrap replicate.
    /// The replicates are drawn sequentially from the seeded
    /// generator, so the draw sequence is reproducible;
    /// the members have no data dependency on each other and
    /// are trained in parallel.
    /// A failure in any member is fatal to the whole call.
    pub fn fit(&self, sample: &Sample) -> Result<Vec<L::Model>> {
        if self.n_members == 0 {
            return Err(Error::InvalidArgument(
                "the number of ensemble members must be positive".into()
            ));
        }
        let n_draws = self.n_draws.unwrap_or(sample.shape().0);

        let mut bootstrap = Bootstrap::new(self.seed);
        let replicates = (0..self.n_members)
            .map(|_| bootstrap.replicate_sample(sample, n_draws))
            .collect::<Result<Vec<_>>>()?;

        replicates.par_iter()
            .map(|replicate| self.learner.fit(replicate))
            .collect()
    }
}


/// Predicts the labels of `features` under every model,
/// one label vector per ensemble member.
pub fn predict_members<M>(models: &[M], features: &FeatureMatrix)
    -> Result<Vec<LabelVector>>
    where M: Model + Sync,
{
    models.par_iter()
        .map(|model| model.predict_all(features))
        .collect()
}


/// Aggregate per-member predictions by majority vote.
/// An example is called spam iff a strict majority of the members
/// calls it spam; ties go to ham.
pub fn majority_vote(votes: &[LabelVector]) -> Result<LabelVector> {
    let first = votes.first()
        .ok_or_else(|| Error::InvalidArgument(
            "majority vote needs at least one voter".into()
        ))?;
    let n_sample = first.len();
    let encoding = first.encoding();

    for vote in votes {
        if vote.len() != n_sample {
            return Err(Error::DimensionMismatch {
                expected: n_sample,
                found: vote.len(),
            });
        }
        if vote.encoding() != encoding {
            return Err(Error::InvalidArgument(
                "voters disagree on the label encoding".into()
            ));
        }
    }

    let values = (0..n_sample)
        .map(|i| {
            let n_spam = votes.iter()
                .filter(|vote| vote.is_spam(i))
                .count();
            encoding.label(2 * n_spam > votes.len())
        })
        .collect();
    LabelVector::new(values, encoding)
}
