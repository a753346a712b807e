use crate::core::config::{Config, Input};
use crate::core::errors::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Entry Collection
-------------------------------------------------------------------------------------------------*/

/// Collect the candidate tokens from the configured input.
pub fn collect(config: &Config) -> Result<Vec<String>> {
    match &config.input {
        Input::List(list) => Ok(collect_from_text(list)),
        Input::File(path) => collect_from_file(path),
    }
}

/// Split a comma-separated list into tokens. All whitespace is removed first and empty tokens
/// are dropped.
///
/// ```
/// let tokens = wafipset::collect_from_text(" 8.8.8.8, 1.1.1.0 /24,,");
/// assert_eq!(tokens, ["8.8.8.8", "1.1.1.0/24"]);
/// ```
pub fn collect_from_text(input: &str) -> Vec<String> {
    let compact: String = input.split_whitespace().collect();
    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read one token per line. Lines are trimmed and blank lines are skipped.
pub fn collect_from_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Successfully opened the file {:?} for reading", path);

    let tokens: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!("Read {} token(s) from {:?}", tokens.len(), path);

    Ok(tokens)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
