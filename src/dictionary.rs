use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Where the dictionary is looked for when no path is given.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary.txt";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Can’t read dictionary “{}”: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split dictionary file contents into uppercased words. Tokens may be separated by any
/// whitespace, several to a line; file order and duplicates are kept.
#[must_use]
pub fn parse_dictionary(contents: &str) -> Vec<String> {
    contents
        .split_whitespace()
        .map(str::to_uppercase)
        .collect()
}

/// Normalize words supplied one per entry (e.g. from a JS array) the same way as file contents:
/// an entry may hold several whitespace-separated words, or none.
#[must_use]
pub fn dictionary_from_entries<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.as_ref().split_whitespace())
        .map(str::to_uppercase)
        .collect()
}

/// Read the whole dictionary at `path`. An unreadable file is an error rather than an empty
/// dictionary, which would be indistinguishable from a search that found nothing.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_dictionary(&contents);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
