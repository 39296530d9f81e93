//! Word-error-rate scoring over a batch of (reference, hypothesis) pairs.
//!
//! WER = total word-level edit distance across all pairs, divided by the
//! total number of reference words. Tokenization is whitespace splitting.

/// Accumulated (reference, hypothesis) pairs from one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pairs: Vec<(String, String)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored pair.
    pub fn push(&mut self, reference: &str, hypothesis: &str) {
        self.pairs
            .push((reference.to_string(), hypothesis.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Aggregate word error rate over all recorded pairs.
    ///
    /// Returns `None` when no pairs were recorded or every reference is
    /// empty, so callers never divide by zero.
    pub fn wer(&self) -> Option<f64> {
        if self.pairs.is_empty() {
            return None;
        }

        let mut total_edits = 0usize;
        let mut total_ref_words = 0usize;
        for (reference, hypothesis) in &self.pairs {
            let ref_words: Vec<&str> = reference.split_whitespace().collect();
            let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();
            total_edits += edit_distance(&ref_words, &hyp_words);
            total_ref_words += ref_words.len();
        }

        if total_ref_words == 0 {
            return None;
        }
        Some(total_edits as f64 / total_ref_words as f64)
    }
}

/// Word-level Levenshtein distance, single-row dynamic program.
fn edit_distance(reference: &[&str], hypothesis: &[&str]) -> usize {
    if reference.is_empty() {
        return hypothesis.len();
    }
    if hypothesis.is_empty() {
        return reference.len();
    }

    let mut row: Vec<usize> = (0..=hypothesis.len()).collect();
    for (i, ref_word) in reference.iter().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, hyp_word) in hypothesis.iter().enumerate() {
            let substitution = prev_diag + usize::from(ref_word != hyp_word);
            let insertion = row[j] + 1;
            let deletion = row[j + 1] + 1;
            prev_diag = row[j + 1];
            row[j + 1] = substitution.min(insertion).min(deletion);
        }
    }
    row[hypothesis.len()]
}
