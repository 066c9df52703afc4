// Colored terminal output for phrase and similarity comparisons.
//
// This module handles all terminal-specific formatting: colors, tables,
// column widths. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::analysis::ranking::RankedPhrase;
use crate::pipeline::phrases::PhraseComparison;
use crate::pipeline::similarity::SimilarityComparison;

const PHRASE_COL: usize = 34;

/// Display the side-by-side phrase frequency tables, one per phrase length.
pub fn display_phrase_comparison(comparison: &PhraseComparison) {
    println!(
        "\n{}",
        format!(
            "=== Phrase Frequency: {} ({} tokens) vs {} ({} tokens) ===",
            comparison.first_name,
            comparison.first_token_count,
            comparison.second_name,
            comparison.second_token_count,
        )
        .bold()
    );

    for result in &comparison.lengths {
        if result.first.is_empty() && result.second.is_empty() {
            println!(
                "\n  {}",
                format!("Length {}: no phrases in either corpus", result.length).dimmed()
            );
            continue;
        }

        println!(
            "\n  {}",
            format!("-- Phrases of length {} --", result.length).bold()
        );
        println!(
            "  {:>4}  {:<w$} {:>6}   {:<w$} {:>6}",
            "Rank".dimmed(),
            comparison.first_name.dimmed(),
            "Count".dimmed(),
            comparison.second_name.dimmed(),
            "Count".dimmed(),
            w = PHRASE_COL,
        );
        println!("  {}", "-".repeat(PHRASE_COL * 2 + 22).dimmed());

        let rows = result.first.len().max(result.second.len());
        for i in 0..rows {
            let (first_phrase, first_count) = cell(&result.first, i);
            let (second_phrase, second_count) = cell(&result.second, i);
            println!(
                "  {:>4}. {:<w$} {:>6}   {:<w$} {:>6}",
                i + 1,
                first_phrase,
                first_count,
                second_phrase,
                second_count,
                w = PHRASE_COL,
            );
        }
    }
    println!();
}

/// Display the ranked paragraph similarity lists for both corpora.
pub fn display_similarity(comparison: &SimilarityComparison) {
    println!(
        "\n{}",
        format!(
            "=== Paragraph Similarity (target vocabulary: {} words) ===",
            comparison.vocabulary_size
        )
        .bold()
    );

    display_paragraph_list(&comparison.first_name, &comparison.first);
    display_paragraph_list(&comparison.second_name, &comparison.second);
}

fn display_paragraph_list(
    name: &str,
    paragraphs: &[crate::analysis::similarity::RankedParagraph],
) {
    println!("\n  {}", format!("-- {name} --").bold());

    if paragraphs.is_empty() {
        println!("  {}", "(no paragraphs)".dimmed());
        return;
    }

    for (i, entry) in paragraphs.iter().enumerate() {
        let preview = super::truncate_chars(entry.text.trim_end(), 100);
        let score_str = if entry.score > 0 {
            format!("{:>3} shared", entry.score).green().to_string()
        } else {
            format!("{:>3} shared", entry.score).dimmed().to_string()
        };
        println!("  {:>4}. [{}] {}", i + 1, score_str, preview.dimmed());
    }
}

/// One table cell: the i-th entry's phrase and count, or blank/zero filler
/// when the ranked list is shorter than the table.
fn cell(entries: &[RankedPhrase], i: usize) -> (String, u32) {
    match entries.get(i) {
        Some(entry) => (
            super::truncate_chars(entry.phrase.trim_end(), PHRASE_COL - 3),
            entry.count,
        ),
        None => (String::new(), 0),
    }
}
