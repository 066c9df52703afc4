// Corpus loading — the I/O boundary in front of the analysis pipeline.

pub mod loader;

pub use loader::Corpus;
