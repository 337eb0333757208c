//! Word list loading utilities
//!
//! Dictionaries hold one word per line. Frequency tables hold `word count`
//! pairs, one per line.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_calibrator::wordlists::load_dictionary;
///
/// let words = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_dictionary(&content))
}

/// Parse dictionary text
///
/// Blank lines and a `word` header are skipped, invalid words are skipped
/// with a debug log, and duplicates keep their first occurrence.
#[must_use]
pub fn parse_dictionary(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || (line_no == 0 && trimmed.eq_ignore_ascii_case("word")) {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!("Skipping dictionary line {}: '{trimmed}' ({e})", line_no + 1);
                    None
                }
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Load a usage frequency table
///
/// A missing file is not an error: a warning is logged and an empty table is
/// returned, which makes every frequency 0.
///
/// # Errors
///
/// Returns an I/O error for any failure other than a missing file.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> io::Result<FxHashMap<String, u64>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_frequencies(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "Frequency table {} not found, using neutral frequencies",
                path.display()
            );
            Ok(FxHashMap::default())
        }
        Err(e) => Err(e),
    }
}

/// Parse `word count` lines; malformed lines are skipped
#[must_use]
pub fn parse_frequencies(content: &str) -> FxHashMap<String, u64> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let word = fields.next()?;
            let count = fields.next()?.parse::<u64>().ok();
            if count.is_none() {
                debug!("Skipping malformed frequency line '{line}'");
            }
            Some((word.to_lowercase(), count?))
        })
        .collect()
}
