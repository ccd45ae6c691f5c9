use colored::Colorize;
use rayon::prelude::*;

use std::io::Write;

use crate::ensemble::{majority_vote, predict_members};
use crate::learner::SoftModel;
use crate::metrics::{confusion_counts, error_rate, roc_auc};
use crate::sample::Sample;
use crate::Result;


const HEADER: &str = "ErrorRate,TPR,FPR,FNR,TNR,AUC\n";
const WIDTH: usize = 9;


/// Struct `ExperimentLogger` scores the prefixes of a trained
/// ensemble on a held-out sample and writes one CSV row per prefix:
/// the row for `k` describes the majority vote of the first `k`
/// members (AUC uses their averaged soft scores).
/// Row `1` is therefore the single-classifier baseline the bagged
/// variants are compared against.
///
/// Where the rows end up (and how result files are named by
/// classifier/dataset/attack/percentage) is the caller's concern;
/// the logger only needs an `io::Write`.
pub struct ExperimentLogger<'a, W> {
    writer: W,
    test: &'a Sample,
    verbose: bool,
}


impl<'a, W> ExperimentLogger<'a, W>
    where W: Write,
{
    /// Create a new instance of `ExperimentLogger`.
    pub fn new(writer: W, test: &'a Sample) -> Self {
        Self { writer, test, verbose: false }
    }


    /// Set the verbose parameter.
    /// If `true`, `ExperimentLogger` prints a summary line
    /// per ensemble prefix.
    /// Default value is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Score every prefix of `models` on the held-out sample and
    /// write the metric rows.
    pub fn run<M>(&mut self, models: &[M]) -> Result<()>
        where M: SoftModel + Sync,
    {
        self.writer.write_all(HEADER.as_bytes())?;

        let features = self.test.features();
        let target = self.test.target();

        let predictions = predict_members(models, features)?;
        let scores = models.par_iter()
            .map(|model| model.confidence_all(features))
            .collect::<Result<Vec<_>>>()?;

        let mut score_acc = vec![0f64; target.len()];
        for k in 1..=models.len() {
            let voted = majority_vote(&predictions[..k])?;

            score_acc.iter_mut()
                .zip(&scores[k - 1])
                .for_each(|(acc, s)| *acc += s);
            let averaged = score_acc.iter()
                .map(|acc| acc / k as f64)
                .collect::<Vec<_>>();

            let error = error_rate(target, &voted)?;
            let counts = confusion_counts(target, &voted)?;
            let auc = roc_auc(target, &averaged)?;

            let line = format!(
                "{error},{},{},{},{},{auc}\n",
                counts.tpr(), counts.fpr(), counts.fnr(), counts.tnr(),
            );
            self.writer.write_all(line.as_bytes())?;

            if self.verbose {
                println!(
                    "{}    {}    {}",
                    format!("  [{k: >3} members]").bold().red(),
                    format!("[ERROR {error:>WIDTH$.5}]").bold().green(),
                    format!("[AUC {auc:>WIDTH$.5}]").bold().yellow(),
                );
            }
        }
        Ok(())
    }
}
