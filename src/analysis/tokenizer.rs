// Word tokenization.
//
// A token is a whitespace-delimited unit with all ASCII punctuation removed.
// Case is preserved deliberately — "The" and "the" are distinct tokens, which
// matches the source texts' own usage rather than flattening it.

/// Split text into cleaned word tokens.
///
/// Splits on runs of ASCII whitespace, strips ASCII punctuation from each
/// unit, and drops units that become empty (e.g. a lone "--" or "...").
/// Numeric tokens are kept. Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_ascii_whitespace()
        .filter_map(|unit| {
            let cleaned: String = unit.chars().filter(|c| !c.is_ascii_punctuation()).collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned)
            }
        })
        .collect()
}
