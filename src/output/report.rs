// Plain-text report generation.
//
// Writes the phrase-frequency tables and the paragraph-similarity rankings
// to a single report file. The file is truncated and rewritten each run so
// repeated runs never accumulate stale sections.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::analysis::ranking::RankedPhrase;
use crate::output::truncate_chars;
use crate::pipeline::phrases::PhraseComparison;
use crate::pipeline::similarity::SimilarityComparison;

const PHRASE_COL: usize = 30;
const COUNT_COL: usize = 25;

/// Generate the combined report file and return its path.
///
/// An unwritable sink is fatal — the caller is expected to propagate the
/// error and exit non-zero.
pub fn generate_report(
    phrases: &PhraseComparison,
    similarity: &SimilarityComparison,
    path: &str,
) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "Concord Analysis Report")?;
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(
        out,
        "Corpora: {} ({} tokens) vs {} ({} tokens)",
        phrases.first_name,
        phrases.first_token_count,
        phrases.second_name,
        phrases.second_token_count,
    )?;
    writeln!(out)?;

    for result in &phrases.lengths {
        let k = result.first.len().max(result.second.len()).max(10);

        writeln!(
            out,
            "Top {k} Most Frequent Phrases of Length {}:",
            result.length
        )?;
        writeln!(
            out,
            "{:<PHRASE_COL$}{:<COUNT_COL$}{:<PHRASE_COL$}{}",
            format!("Phrase ({})", phrases.first_name),
            "Frequency",
            format!("Phrase ({})", phrases.second_name),
            "Frequency",
        )?;

        for i in 0..k {
            let (first_phrase, first_count) = cell(&result.first, i);
            let (second_phrase, second_count) = cell(&result.second, i);
            writeln!(
                out,
                "{first_phrase:<PHRASE_COL$}{first_count:<COUNT_COL$}{second_phrase:<PHRASE_COL$}{second_count}"
            )?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "Paragraphs Most Similar to Target (vocabulary: {} words):",
        similarity.vocabulary_size
    )?;
    writeln!(out)?;
    write_paragraph_section(&mut out, &similarity.first_name, &similarity.first)?;
    write_paragraph_section(&mut out, &similarity.second_name, &similarity.second)?;

    let path_ref = Path::new(path);
    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }
    fs::write(path_ref, out).with_context(|| format!("Failed to write report to {path}"))?;

    Ok(path.to_string())
}

fn write_paragraph_section(
    out: &mut String,
    name: &str,
    paragraphs: &[crate::analysis::similarity::RankedParagraph],
) -> Result<()> {
    writeln!(out, "-- {name} --")?;
    if paragraphs.is_empty() {
        writeln!(out, "(no paragraphs)")?;
    }
    for (i, entry) in paragraphs.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. [{} shared] {}",
            i + 1,
            entry.score,
            truncate_chars(entry.text.trim_end(), 160),
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// One fixed-width table cell: the i-th phrase and count, or blank/zero
/// filler when the ranked list is shorter than the table.
fn cell(entries: &[RankedPhrase], i: usize) -> (String, u32) {
    match entries.get(i) {
        Some(entry) => (
            truncate_chars(entry.phrase.trim_end(), PHRASE_COL - 4),
            entry.count,
        ),
        None => (String::new(), 0),
    }
}
