// Vocabulary-overlap paragraph ranking.
//
// A paragraph's similarity to the target text is the number of *distinct*
// words it shares with the target vocabulary — a set-intersection count,
// not a frequency-weighted score. A word repeated ten times in a paragraph
// contributes exactly once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::tokenizer::tokenize;

/// A paragraph together with its distinct-shared-word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedParagraph {
    pub text: String,
    pub score: u32,
}

/// Build the set of unique tokens from a reference text.
pub fn target_vocabulary(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Score every paragraph against the target vocabulary and return the top k.
///
/// Sorted by score descending; the sort is stable, so paragraphs with equal
/// scores keep their document order. Zero-overlap paragraphs participate in
/// the ranking and are only dropped by the top-k cutoff.
pub fn score_and_rank(
    paragraphs: &[String],
    vocabulary: &HashSet<String>,
    k: usize,
) -> Vec<RankedParagraph> {
    let mut ranked: Vec<RankedParagraph> = paragraphs
        .iter()
        .map(|paragraph| {
            let words: HashSet<String> = tokenize(paragraph).into_iter().collect();
            let score = words.iter().filter(|w| vocabulary.contains(*w)).count() as u32;
            RankedParagraph {
                text: paragraph.clone(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_distinct_shared_words() {
        let vocab = target_vocabulary("the river was wide");
        let paragraphs = vec!["the the the river river ".to_string()];
        let ranked = score_and_rank(&paragraphs, &vocab, 10);
        // "the" and "river" each count once despite repetition
        assert_eq!(ranked[0].score, 2);
    }

    #[test]
    fn test_score_bounded_by_vocabulary_size() {
        let vocab = target_vocabulary("a b");
        let paragraphs = vec!["a b c d e f g a b ".to_string()];
        let ranked = score_and_rank(&paragraphs, &vocab, 10);
        assert!(ranked[0].score as usize <= vocab.len());
    }

    #[test]
    fn test_ranking_descends() {
        let vocab = target_vocabulary("one two three");
        let paragraphs = vec![
            "nothing shared here ".to_string(),
            "one two three all shared ".to_string(),
            "one shared ".to_string(),
        ];
        let ranked = score_and_rank(&paragraphs, &vocab, 10);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].score, 3);
        assert_eq!(ranked[1].score, 1);
        assert_eq!(ranked[2].score, 0);
    }

    #[test]
    fn test_equal_scores_keep_document_order() {
        let vocab = target_vocabulary("shared");
        let paragraphs = vec![
            "shared first ".to_string(),
            "shared second ".to_string(),
            "shared third ".to_string(),
        ];
        let ranked = score_and_rank(&paragraphs, &vocab, 10);
        assert_eq!(ranked[0].text, "shared first ");
        assert_eq!(ranked[1].text, "shared second ");
        assert_eq!(ranked[2].text, "shared third ");
    }

    #[test]
    fn test_truncates_to_k() {
        let vocab = target_vocabulary("x");
        let paragraphs: Vec<String> = (0..20).map(|i| format!("paragraph {i} ")).collect();
        assert_eq!(score_and_rank(&paragraphs, &vocab, 10).len(), 10);
    }

    #[test]
    fn test_empty_inputs() {
        let vocab = target_vocabulary("");
        assert!(vocab.is_empty());
        assert!(score_and_rank(&[], &vocab, 10).is_empty());
    }
}
