// Core text analysis — tokenization, phrase counting, ranking, paragraph
// splitting, and vocabulary-overlap scoring.
//
// Everything in here is a pure in-memory transformation: no I/O, no shared
// state, deterministic output for a given input.

pub mod paragraphs;
pub mod phrases;
pub mod ranking;
pub mod similarity;
pub mod tokenizer;
