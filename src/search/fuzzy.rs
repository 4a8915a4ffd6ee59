//! Approximate substring matching.
//!
//! Scores follow the familiar fuzzy-search model: `0.0` is a perfect match
//! at the start of the text, `1.0` is no match at all.
//!
//! ```text
//! score = errors / pattern_len + start / distance
//! ```
//!
//! `errors` is the edit distance of the best approximate occurrence of the
//! pattern anywhere in the text (Sellers' algorithm), `start` is where that
//! occurrence begins. The location term is dropped with `ignore_location`.

use crate::config::SearchConfig;

/// Lower-cased text as chars, the unit the matcher works on.
pub fn normalize(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
    distance: usize,
    ignore_location: bool,
}

impl FuzzyMatcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            threshold: config.threshold,
            distance: config.distance,
            ignore_location: config.ignore_location,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `pattern` against `text` (both normalized).
    ///
    /// Returns `None` when the best score exceeds the threshold.
    pub fn score(&self, pattern: &[char], text: &[char]) -> Option<f64> {
        let best = self.best_score(pattern, text);
        (best <= self.threshold).then_some(best)
    }

    fn best_score(&self, pattern: &[char], text: &[char]) -> f64 {
        let m = pattern.len();
        if m == 0 {
            return 0.0;
        }

        // row[j]: fewest edits aligning the pattern prefix with a substring
        // of `text` ending at j. Row 0 is free at every position.
        let mut row: Vec<usize> = vec![0; text.len() + 1];
        let mut prev = row.clone();
        for (i, &pc) in pattern.iter().enumerate() {
            std::mem::swap(&mut row, &mut prev);
            row[0] = i + 1;
            for (j, &tc) in text.iter().enumerate() {
                let substitute = prev[j] + usize::from(pc != tc);
                row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
            }
        }

        row.iter()
            .enumerate()
            .map(|(end, &errors)| self.compute(errors, end.saturating_sub(m), m))
            .fold(1.0, f64::min)
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, errors: usize, start: usize, pattern_len: usize) -> f64 {
        let accuracy = errors as f64 / pattern_len as f64;
        if self.ignore_location {
            return accuracy;
        }
        if self.distance == 0 {
            return if start == 0 { accuracy } else { 1.0 };
        }
        accuracy + start as f64 / self.distance as f64
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}
