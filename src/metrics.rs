//! Defines the metrics engine:
//! error rate, confusion counts and their derived rates,
//! and rank-based AUC.
//! These are the scores that make a single classifier and its
//! bagged variants comparable across attack types and
//! poisoning percentages.
use serde::{Serialize, Deserialize};

use crate::sample::LabelVector;
use crate::{Error, Result};


/// The four confusion-matrix cells of a single evaluation.
///
/// The row/column convention is fixed and intentionally inverts the
/// usual positive-class choice:
/// **the ham class is the positive one.**
/// - actual ham,  predicted ham  → true positive,
/// - actual ham,  predicted spam → false positive,
/// - actual spam, predicted ham  → false negative,
/// - actual spam, predicted spam → true negative.
///
/// Every classifier in an experiment must be scored under this same
/// convention, otherwise their rates are not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    true_positive: usize,
    false_positive: usize,
    false_negative: usize,
    true_negative: usize,
}


impl ConfusionCounts {
    /// The counts as a `(TP, FP, FN, TN)` tuple.
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.true_positive,
            self.false_positive,
            self.false_negative,
            self.true_negative,
        )
    }


    /// The number of evaluated examples.
    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive
            + self.false_negative + self.true_negative
    }


    /// True positive rate `TP / (TP + FN)`.
    /// NaN when the denominator is zero.
    pub fn tpr(&self) -> f64 {
        self.true_positive as f64
            / (self.true_positive + self.false_negative) as f64
    }


    /// False positive rate `FP / (FP + TN)`.
    /// NaN when the denominator is zero.
    pub fn fpr(&self) -> f64 {
        self.false_positive as f64
            / (self.false_positive + self.true_negative) as f64
    }


    /// False negative rate `FN / (TP + FN)`.
    /// NaN when the denominator is zero.
    pub fn fnr(&self) -> f64 {
        self.false_negative as f64
            / (self.true_positive + self.false_negative) as f64
    }


    /// True negative rate `TN / (FP + TN)`.
    /// NaN when the denominator is zero.
    pub fn tnr(&self) -> f64 {
        self.true_negative as f64
            / (self.false_positive + self.true_negative) as f64
    }
}


/// The fraction of mismatched entries between the true labels and
/// the predictions, in `[0, 1]`.
pub fn error_rate(y: &LabelVector, predictions: &LabelVector)
    -> Result<f64>
{
    check_pair(y, predictions)?;

    let n_wrong = y.values()
        .iter()
        .zip(predictions.values())
        .filter(|(a, b)| a != b)
        .count();
    Ok(n_wrong as f64 / y.len() as f64)
}


/// Build the [`ConfusionCounts`] of a single evaluation.
pub fn confusion_counts(y: &LabelVector, predictions: &LabelVector)
    -> Result<ConfusionCounts>
{
    check_pair(y, predictions)?;

    let mut counts = ConfusionCounts {
        true_positive: 0,
        false_positive: 0,
        false_negative: 0,
        true_negative: 0,
    };
    for i in 0..y.len() {
        match (y.is_spam(i), predictions.is_spam(i)) {
            (false, false) => counts.true_positive += 1,
            (false, true) => counts.false_positive += 1,
            (true, false) => counts.false_negative += 1,
            (true, true) => counts.true_negative += 1,
        }
    }
    Ok(counts)
}


/// Standard rank-based AUC of the spam-class scores against the
/// true labels.
/// Tied scores receive their average rank.
/// Unlike the confusion-derived rates,
/// AUC needs the full soft-score vector;
/// the 2x2 counts alone cannot produce it.
pub fn roc_auc(y: &LabelVector, scores: &[f64]) -> Result<f64> {
    let n_sample = y.len();
    if scores.len() != n_sample {
        return Err(Error::DimensionMismatch {
            expected: n_sample,
            found: scores.len(),
        });
    }
    if scores.iter().any(|s| s.is_nan()) {
        return Err(Error::InvalidArgument(
            "scores contain NaN".into()
        ));
    }

    let n_spam = (0..n_sample).filter(|&i| y.is_spam(i)).count();
    let n_ham = n_sample - n_spam;
    if n_spam == 0 || n_ham == 0 {
        return Err(Error::InsufficientData(
            "AUC needs at least one example of each class".into()
        ));
    }

    let mut ix = (0..n_sample).collect::<Vec<_>>();
    ix.sort_by(|&i, &j| scores[i].partial_cmp(&scores[j]).unwrap());

    // 1-based ranks, averaged over ties.
    let mut ranks = vec![0f64; n_sample];
    let mut lo = 0;
    while lo < n_sample {
        let mut hi = lo;
        while hi + 1 < n_sample && scores[ix[hi + 1]] == scores[ix[lo]] {
            hi += 1;
        }
        let avg = (lo + hi + 2) as f64 / 2.0;
        for k in lo..=hi {
            ranks[ix[k]] = avg;
        }
        lo = hi + 1;
    }

    let rank_sum = (0..n_sample).filter(|&i| y.is_spam(i))
        .map(|i| ranks[i])
        .sum::<f64>();

    let auc = (rank_sum - (n_spam * (n_spam + 1)) as f64 / 2.0)
        / (n_spam * n_ham) as f64;
    Ok(auc)
}


fn check_pair(y: &LabelVector, predictions: &LabelVector) -> Result<()> {
    if y.len() != predictions.len() {
        return Err(Error::DimensionMismatch {
            expected: y.len(),
            found: predictions.len(),
        });
    }
    if y.encoding() != predictions.encoding() {
        return Err(Error::InvalidArgument(
            format!(
                "label encodings disagree: {:?} vs {:?}",
                y.encoding(), predictions.encoding(),
            )
        ));
    }
    Ok(())
}
