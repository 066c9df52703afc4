// Corpus file loading.
//
// A missing or unreadable corpus is reported and replaced with empty text
// rather than aborting the run — the analysis stages all tolerate empty
// input and produce empty result lists for that side.

use std::fs;
use std::path::Path;

use colored::Colorize;
use tracing::{info, warn};

/// One input text, named for display in reports and tables.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub name: String,
    pub text: String,
}

impl Corpus {
    /// Build a corpus directly from in-memory text. Used by tests and by
    /// callers that already hold the content.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Load a corpus from a file, naming it after the file stem.
    ///
    /// On read failure this warns and returns an empty corpus so the run
    /// can continue with the other inputs.
    pub fn load(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match fs::read_to_string(path) {
            Ok(text) => {
                info!(corpus = %name, bytes = text.len(), "Loaded corpus");
                Self { name, text }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read corpus");
                println!(
                    "  {} could not read {}: {e}",
                    "Warning:".yellow(),
                    path.display()
                );
                Self {
                    name,
                    text: String::new(),
                }
            }
        }
    }
}
