//! Exports the commonly used types and traits of this crate.
//!
pub use crate::sample::{
    // Data containers
    FeatureMatrix,
    LabelEncoding,
    LabelVector,
    Sample,
};


pub use crate::learner::{
    // Learner/Model traits
    Learner,
    Model,
    SoftModel,
};


pub use crate::naive_bayes::{
    NaiveBayes,
    NaiveBayesModel,
};


pub use crate::logistic_regression::{
    LogisticRegression,
    LogisticModel,
};


pub use crate::bootstrap::Bootstrap;


pub use crate::ensemble::{
    Bagging,
    majority_vote,
    predict_members,
};


pub use crate::metrics::{
    ConfusionCounts,
    confusion_counts,
    error_rate,
    roc_auc,
};


pub use crate::research::ExperimentLogger;


pub use crate::error::{Error, Result};
