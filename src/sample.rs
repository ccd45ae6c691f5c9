//! The files in `sample/` directory define the in-memory containers
//! exchanged by the classifiers, the resampler, and the metrics engine.

pub(crate) mod feature_matrix;
pub(crate) mod labels;
pub(crate) mod sample_struct;


pub use feature_matrix::FeatureMatrix;
pub use labels::{
    LabelEncoding,
    LabelVector,
};
pub use sample_struct::Sample;
