//! Defines Bernoulli Naive Bayes.
//! The learner models each binary feature as a presence/absence
//! indicator; absence contributes to the likelihood too,
//! which is what distinguishes the Bernoulli variant from
//! multinomial ones.

mod nbayes;
mod nbayes_model;

pub use nbayes::NaiveBayes;
pub use nbayes_model::NaiveBayesModel;
