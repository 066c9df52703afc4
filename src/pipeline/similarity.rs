// Paragraph-similarity pipeline: build the target vocabulary from the
// reference text, split each corpus into paragraphs, then score and rank
// each corpus's paragraphs by distinct shared words.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::paragraphs::split_paragraphs;
use crate::analysis::similarity::{score_and_rank, target_vocabulary, RankedParagraph};
use crate::corpus::Corpus;

/// Ranked paragraph lists for both corpora against one target vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityComparison {
    pub first_name: String,
    pub second_name: String,
    pub vocabulary_size: usize,
    pub first: Vec<RankedParagraph>,
    pub second: Vec<RankedParagraph>,
}

/// Run the paragraph-similarity comparison over two corpora.
pub fn run(first: &Corpus, second: &Corpus, target: &Corpus, k: usize) -> SimilarityComparison {
    let vocabulary = target_vocabulary(&target.text);
    if vocabulary.is_empty() {
        warn!(target = %target.name, "Target text produced an empty vocabulary");
    }

    let first_paragraphs = split_paragraphs(&first.text);
    let second_paragraphs = split_paragraphs(&second.text);

    info!(
        vocabulary = vocabulary.len(),
        first = %first.name,
        first_paragraphs = first_paragraphs.len(),
        second = %second.name,
        second_paragraphs = second_paragraphs.len(),
        "Scoring paragraphs against target vocabulary"
    );

    SimilarityComparison {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        vocabulary_size: vocabulary.len(),
        first: score_and_rank(&first_paragraphs, &vocabulary, k),
        second: score_and_rank(&second_paragraphs, &vocabulary, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ranks_by_shared_vocabulary() {
        let a = Corpus::from_text(
            "a",
            "the river was wide and muddy\n\nnothing relevant at all\n",
        );
        let b = Corpus::from_text("b", "the wide river\n");
        let target = Corpus::from_text("target", "river wide muddy");

        let comparison = run(&a, &b, &target, 10);

        assert_eq!(comparison.vocabulary_size, 3);
        assert_eq!(comparison.first.len(), 2);
        assert_eq!(comparison.first[0].score, 3);
        assert_eq!(comparison.first[1].score, 0);
        assert_eq!(comparison.second[0].score, 2);
    }

    #[test]
    fn test_run_with_empty_target() {
        let a = Corpus::from_text("a", "one paragraph\n");
        let b = Corpus::from_text("b", "another paragraph\n");
        let target = Corpus::from_text("target", "");

        let comparison = run(&a, &b, &target, 10);

        assert_eq!(comparison.vocabulary_size, 0);
        // Paragraphs still appear, all with zero scores
        assert_eq!(comparison.first[0].score, 0);
        assert_eq!(comparison.second[0].score, 0);
    }
}
