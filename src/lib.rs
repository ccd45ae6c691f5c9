#![warn(missing_docs)]

//!
//! A crate that provides bagging ensembles of simple binary
//! classifiers for studying robustness under training-data poisoning.
//!
//! The crate covers the core of such experiments:
//!
//! - Two base classifiers over binary feature matrices,
//!     Bernoulli Naive Bayes (closed-form estimation with
//!     numerical stabilization) and logistic regression
//!     (online gradient descent with convergence-based early
//!     stopping).
//!
//! - A bootstrap resampler that draws replicate datasets
//!     with replacement, and a bagging orchestrator that trains
//!     one base learner per replicate.
//!
//! - A metrics engine turning predictions into comparable scores:
//!     error rate, confusion counts with their derived rates,
//!     and rank-based AUC.
//!
//! Poisoning attacks themselves are out of scope;
//! the crate consumes training matrices that are assumed to be
//! already poisoned.
//! All randomness flows through caller-seeded generators,
//! so a baseline run and its bagged variants are reproducible.

mod common;

pub mod sample;
pub mod error;
pub mod learner;
pub mod bootstrap;
pub mod naive_bayes;
pub mod logistic_regression;
pub mod metrics;
pub mod ensemble;
pub mod research;

pub mod prelude;


pub use sample::{
    FeatureMatrix,
    LabelEncoding,
    LabelVector,
    Sample,
};

pub use error::{Error, Result};

pub use learner::{
    Learner,
    Model,
    SoftModel,
};

pub use bootstrap::Bootstrap;

pub use naive_bayes::{
    NaiveBayes,
    NaiveBayesModel,
};

pub use logistic_regression::{
    LogisticRegression,
    LogisticModel,
    sigmoid,
};

pub use metrics::{
    ConfusionCounts,
    confusion_counts,
    error_rate,
    roc_auc,
};

pub use ensemble::{
    Bagging,
    majority_vote,
    predict_members,
};

pub use research::ExperimentLogger;
