//! Defines the bootstrap resampler.
//! A bootstrap replicate is a dataset sampled with replacement
//! from a base dataset;
//! bagging trains one base learner per replicate.
use rand::prelude::*;
use rand::distributions::Uniform;

use crate::sample::{FeatureMatrix, Sample};
use crate::{Error, Result};


/// Struct `Bootstrap` draws sampling-with-replacement index sets
/// and materializes replicate datasets from them.
/// All randomness flows through the seeded generator `self` holds,
/// never through ambient process-wide state,
/// so experiments are reproducible.
#[derive(Debug)]
pub struct Bootstrap {
    rng: StdRng,
}


impl Bootstrap {
    /// Construct a new resampler from a seed.
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }


    /// Construct a new resampler from an existing generator.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }


    /// Draw `n_draws` indices independently and uniformly
    /// from `[0, n_available)`, with replacement.
    /// Indices may repeat and some source rows may never appear.
    /// The output preserves draw order and
    /// its length always equals `n_draws`.
    pub fn sample_indices(&mut self, n_available: usize, n_draws: usize)
        -> Result<Vec<usize>>
    {
        if n_available == 0 {
            return Err(Error::InvalidArgument(
                "cannot draw from an empty dataset".into()
            ));
        }
        if n_draws == 0 {
            return Err(Error::InvalidArgument(
                "the number of draws must be positive".into()
            ));
        }

        let range = Uniform::from(0..n_available);
        let indices = (&mut self.rng).sample_iter(range)
            .take(n_draws)
            .collect::<Vec<_>>();
        Ok(indices)
    }


    /// Build a single replicate matrix of `n_draws` rows
    /// drawn with replacement from `features`.
    pub fn replicate(&mut self, features: &FeatureMatrix, n_draws: usize)
        -> Result<FeatureMatrix>
    {
        let n_available = features.shape().0;
        let indices = self.sample_indices(n_available, n_draws)?;
        features.gather(&indices)
    }


    /// Build a single replicate of `n_draws` labeled instances
    /// drawn with replacement from `sample`.
    /// Rows and labels are drawn together,
    /// so the replicate stays index-aligned.
    pub fn replicate_sample(&mut self, sample: &Sample, n_draws: usize)
        -> Result<Sample>
    {
        let n_available = sample.shape().0;
        let indices = self.sample_indices(n_available, n_draws)?;
        sample.gather(&indices)
    }


    /// Generate `n_replicates` independent replicate matrices,
    /// each built from an independent draw.
    pub fn replicates(
        &mut self,
        features: &FeatureMatrix,
        n_draws: usize,
        n_replicates: usize,
    ) -> Result<Vec<FeatureMatrix>>
    {
        if n_replicates == 0 {
            return Err(Error::InvalidArgument(
                "the number of replicates must be positive".into()
            ));
        }

        (0..n_replicates)
            .map(|_| self.replicate(features, n_draws))
            .collect()
    }
}
