// Concord: phrase-frequency and paragraph-similarity comparison for two
// text corpora.
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
