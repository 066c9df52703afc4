use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Every field has a default; CLI flags override whatever is loaded here.
/// A .env file is picked up automatically at startup via dotenvy.
pub struct Config {
    /// How many entries each ranked list keeps (CONCORD_TOP_K, default 10)
    pub top_k: usize,
    /// Longest phrase length to sweep (CONCORD_MAX_PHRASE_LEN, default 10)
    pub max_phrase_len: usize,
    /// Where the `report` subcommand writes its output
    /// (CONCORD_REPORT_PATH, default output/concord-report.txt)
    pub report_path: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let top_k = parse_positive("CONCORD_TOP_K", 10)?;
        let max_phrase_len = parse_positive("CONCORD_MAX_PHRASE_LEN", 10)?;
        let report_path = env::var("CONCORD_REPORT_PATH")
            .unwrap_or_else(|_| "output/concord-report.txt".to_string());

        Ok(Self {
            top_k,
            max_phrase_len,
            report_path,
        })
    }
}

/// Read a positive integer from the environment, falling back to a default
/// when unset. A set-but-invalid value is an error, not a silent fallback.
fn parse_positive(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => {
            let value: usize = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("{var} must be a positive integer, got {raw:?}"))?;
            if value == 0 {
                anyhow::bail!("{var} must be at least 1");
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}
