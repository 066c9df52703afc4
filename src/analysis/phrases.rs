// Contiguous phrase counting.
//
// A phrase of length n is n consecutive tokens serialized with a trailing
// space after every token ("the cat " rather than "the cat"). The trailing
// space is part of the map key and of the reported phrase text.

use std::collections::HashMap;

/// Count every contiguous n-token phrase in the token sequence.
///
/// Returns a freshly allocated frequency map. When the sequence holds fewer
/// than n tokens (or n is zero) the map is empty — the window arithmetic
/// must never wrap below zero.
pub fn count_phrases(tokens: &[String], n: usize) -> HashMap<String, u32> {
    let mut freq = HashMap::new();
    if n == 0 || tokens.len() < n {
        return freq;
    }

    for window in tokens.windows(n) {
        let mut phrase = String::with_capacity(window.iter().map(|t| t.len() + 1).sum());
        for token in window {
            phrase.push_str(token);
            phrase.push(' ');
        }
        *freq.entry(phrase).or_insert(0) += 1;
    }

    freq
}
