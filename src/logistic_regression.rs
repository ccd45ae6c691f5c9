//! Defines logistic regression trained by online
//! (per-example) stochastic gradient descent.

mod logistic;
mod logistic_model;

pub use logistic::{LogisticRegression, sigmoid};
pub use logistic_model::LogisticModel;
