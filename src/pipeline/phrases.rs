// Phrase-frequency pipeline: tokenize each corpus once, then sweep phrase
// lengths 1..=max_len, counting and ranking per corpus at each length.
//
// Each (corpus, length) pair gets its own freshly built frequency map; the
// maps are dropped as soon as the ranked lists are extracted, so peak memory
// stays proportional to one length's map rather than all ten.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::phrases::count_phrases;
use crate::analysis::ranking::{top_k, RankedPhrase};
use crate::analysis::tokenizer::tokenize;
use crate::corpus::Corpus;

/// Ranked phrase lists for both corpora at one phrase length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseLengthResult {
    pub length: usize,
    pub first: Vec<RankedPhrase>,
    pub second: Vec<RankedPhrase>,
}

/// The full phrase comparison across all swept lengths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseComparison {
    pub first_name: String,
    pub second_name: String,
    pub first_token_count: usize,
    pub second_token_count: usize,
    pub lengths: Vec<PhraseLengthResult>,
}

/// Run the phrase-frequency comparison over two corpora.
///
/// `max_len` is the longest phrase length swept (inclusive, starting at 1);
/// `k` is how many entries each ranked list keeps.
pub fn run(first: &Corpus, second: &Corpus, max_len: usize, k: usize) -> PhraseComparison {
    let first_tokens = tokenize(&first.text);
    let second_tokens = tokenize(&second.text);

    info!(
        first = %first.name,
        first_tokens = first_tokens.len(),
        second = %second.name,
        second_tokens = second_tokens.len(),
        "Tokenized corpora"
    );

    let pb = ProgressBar::new(max_len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Phrases [{bar:30}] length {pos}/{len}")
            .unwrap(),
    );

    let mut lengths = Vec::with_capacity(max_len);
    for n in 1..=max_len {
        let first_freq = count_phrases(&first_tokens, n);
        let second_freq = count_phrases(&second_tokens, n);

        lengths.push(PhraseLengthResult {
            length: n,
            first: top_k(&first_freq, k),
            second: top_k(&second_freq, k),
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    PhraseComparison {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        first_token_count: first_tokens.len(),
        second_token_count: second_tokens.len(),
        lengths,
    }
}
