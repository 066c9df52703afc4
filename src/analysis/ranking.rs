// Top-k selection over a phrase frequency map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A phrase together with its occurrence count, as reported to the output
/// layer. The phrase keeps its trailing-space serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPhrase {
    pub phrase: String,
    pub count: u32,
}

/// Select the k highest-frequency phrases, count descending.
///
/// Equal counts are ordered lexicographically by phrase text so results are
/// reproducible across runs — the original relied on hash-map iteration
/// order here, which isn't stable.
///
/// Returns `min(k, |freq|)` entries; callers presenting fixed-width tables
/// pad the difference rather than treating a short list as an error.
pub fn top_k(freq: &HashMap<String, u32>, k: usize) -> Vec<RankedPhrase> {
    let mut entries: Vec<RankedPhrase> = freq
        .iter()
        .map(|(phrase, &count)| RankedPhrase {
            phrase: phrase.clone(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.phrase.cmp(&b.phrase)));
    entries.truncate(k);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq_of(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(p, c)| (p.to_string(), *c)).collect()
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let freq = freq_of(&[("a ", 3), ("b ", 7), ("c ", 5)]);
        let top = top_k(&freq, 10);
        let counts: Vec<u32> = top.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![7, 5, 3]);
    }

    #[test]
    fn test_truncates_to_k() {
        let freq = freq_of(&[("a ", 1), ("b ", 2), ("c ", 3), ("d ", 4)]);
        assert_eq!(top_k(&freq, 2).len(), 2);
        assert_eq!(top_k(&freq, 4).len(), 4);
        assert_eq!(top_k(&freq, 9).len(), 4);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let freq = freq_of(&[("zebra ", 2), ("apple ", 2), ("mango ", 2)]);
        let top = top_k(&freq, 3);
        let phrases: Vec<&str> = top.iter().map(|e| e.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["apple ", "mango ", "zebra "]);
    }

    #[test]
    fn test_empty_map() {
        let freq = HashMap::new();
        assert!(top_k(&freq, 10).is_empty());
    }
}
