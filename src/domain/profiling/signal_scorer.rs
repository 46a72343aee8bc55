//! Signal Scorer - reduces a sequence of answers to per-signal counts.

use super::{Answer, SignalScoreMap};

/// Stateless scorer for quiz answers.
pub struct SignalScorer;

impl SignalScorer {
    /// Counts every signal tag across all answers.
    ///
    /// Duplicate tags inside one answer each count. Order of answers does not
    /// matter. An empty slice yields [`SignalScoreMap::zero`].
    pub fn score(answers: &[Answer]) -> SignalScoreMap {
        answers
            .iter()
            .flat_map(|answer| answer.signals.iter())
            .fold(SignalScoreMap::zero(), |mut scores, signal| {
                scores.increment(*signal);
                scores
            })
    }
}
