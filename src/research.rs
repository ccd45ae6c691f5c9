//! Research utilities:
//! writes the per-ensemble-size metric rows that downstream
//! plotting and reporting consume.

mod experiment_logger;

pub use experiment_logger::ExperimentLogger;
