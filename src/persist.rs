//! On-disk formats
//!
//! - weights: `w_base=0.40` style lines, two decimals
//! - opening entropy cache: CSV `word,entropy` with a header
//! - simulation log: CSV `answer,guess1..guessN,attempts`, guesses padded blank

use crate::solver::entropy::EntropyTable;
use crate::solver::{GameRecord, ScoreWeights};
use log::{info, warn};
use csv::{ReaderBuilder, Trim};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

/// Load weights, falling back to pure entropy when the file is missing
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or `InvalidData` for an
/// unparseable value or weights the engine rejects.
pub fn load_weights<P: AsRef<Path>>(path: P) -> io::Result<ScoreWeights> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => parse_weights(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "Weights file {} not found, using defaults ({})",
                path.display(),
                ScoreWeights::default()
            );
            Ok(ScoreWeights::default())
        }
        Err(e) => Err(e),
    }
}

/// Parse `key=value` weight lines
///
/// Keys that are absent keep their default value; unknown keys are ignored.
///
/// # Errors
/// Returns `InvalidData` for a value that is not a number or weights the
/// engine rejects.
pub fn parse_weights(content: &str) -> io::Result<ScoreWeights> {
    let defaults = ScoreWeights::default();
    let (mut base, mut positional, mut entropy) =
        (defaults.base(), defaults.positional(), defaults.entropy());

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|e| invalid_data(format!("bad value for {}: {e}", key.trim())))?;
        match key.trim() {
            "w_base" => base = value,
            "w_positional" => positional = value,
            "w_entropy" => entropy = value,
            _ => {}
        }
    }

    ScoreWeights::new(base, positional, entropy).map_err(|e| invalid_data(e.to_string()))
}

/// Render weights in the file format
#[must_use]
pub fn format_weights(weights: ScoreWeights) -> String {
    format!(
        "w_base={:.2}\nw_positional={:.2}\nw_entropy={:.2}\n",
        weights.base(),
        weights.positional(),
        weights.entropy()
    )
}

/// Save weights with two decimals
///
/// # Errors
/// Returns an I/O error if the file cannot be written.
pub fn save_weights<P: AsRef<Path>>(path: P, weights: ScoreWeights) -> io::Result<()> {
    fs::write(path.as_ref(), format_weights(weights))?;
    info!("Saved weights to {}", path.as_ref().display());
    Ok(())
}

/// Load an opening entropy cache
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or `InvalidData` for a
/// malformed row.
pub fn load_entropy_cache<P: AsRef<Path>>(path: P) -> io::Result<EntropyTable> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path.as_ref())?;
    read_entropy_cache(reader)
}

/// Parse `word,entropy` rows after the header
///
/// # Errors
/// Returns `InvalidData` for a row without two fields or a bad number.
pub fn parse_entropy_cache(content: &str) -> io::Result<EntropyTable> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(content.as_bytes());
    read_entropy_cache(reader)
}

fn read_entropy_cache<R: io::Read>(mut reader: csv::Reader<R>) -> io::Result<EntropyTable> {
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| invalid_data(format!("cache has no '{name}' column")))
    };
    let (word_col, entropy_col) = (column("word")?, column("entropy")?);

    let mut scores = Vec::new();
    for result in reader.records() {
        let record = result?;
        let word = record.get(word_col).unwrap_or_default();
        let entropy: f64 = record
            .get(entropy_col)
            .unwrap_or_default()
            .parse()
            .map_err(|e| invalid_data(format!("bad entropy for '{word}': {e}")))?;
        scores.push((word.to_lowercase(), entropy));
    }

    Ok(EntropyTable::from_scores(scores))
}

/// Write an entropy table as `word,entropy` CSV, highest entropy first
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_entropy_cache<W: Write>(writer: W, table: &EntropyTable) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["word", "entropy"])?;
    for (word, entropy) in table.ranked() {
        writer.write_record([word, entropy.to_string().as_str()])?;
    }
    writer.flush()
}

/// Save an entropy table to a CSV file
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn save_entropy_cache<P: AsRef<Path>>(path: P, table: &EntropyTable) -> io::Result<()> {
    write_entropy_cache(File::create(path.as_ref())?, table)?;
    info!(
        "Saved {} entropy scores to {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write a simulation log with `max_guesses` guess columns
///
/// Guesses beyond `max_guesses` are dropped and missing ones left blank.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_simulation_log<W: Write>(
    writer: W,
    records: &[GameRecord],
    max_guesses: usize,
) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["answer".to_string()];
    header.extend((1..=max_guesses).map(|i| format!("guess{i}")));
    header.push("attempts".to_string());
    writer.write_record(&header)?;

    for record in records {
        writer.write_record(record.log_fields(max_guesses))?;
    }
    writer.flush()
}

/// Save a simulation log to a CSV file
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn save_simulation_log<P: AsRef<Path>>(
    path: P,
    records: &[GameRecord],
    max_guesses: usize,
) -> io::Result<()> {
    write_simulation_log(File::create(path.as_ref())?, records, max_guesses)?;
    info!(
        "Saved {} game records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::ExhaustReason;

    #[test]
    fn weights_round_trip_through_text() {
        let weights = ScoreWeights::new(0.4, 0.3, 0.3).unwrap();
        let text = format_weights(weights);
        assert_eq!(text, "w_base=0.40\nw_positional=0.30\nw_entropy=0.30\n");

        let parsed = parse_weights(&text).unwrap();
        assert!((parsed.base() - 0.4).abs() < 1e-12);
        assert!((parsed.entropy() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn missing_weight_keys_keep_defaults() {
        let parsed = parse_weights("w_base=0.5\n# comment\n").unwrap();
        assert!((parsed.base() - 0.5).abs() < 1e-12);
        assert!(parsed.positional().abs() < 1e-12);
        assert!((parsed.entropy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bad_weights_are_rejected() {
        assert!(parse_weights("w_base=abc").is_err());
        assert!(parse_weights("w_entropy=-1").is_err());
    }

    #[test]
    fn missing_weights_file_gives_defaults() {
        let weights = load_weights("/nonexistent/weights.txt").unwrap();
        assert_eq!(weights, ScoreWeights::default());
    }

    #[test]
    fn entropy_cache_round_trip() {
        let table = EntropyTable::from_scores([
            ("crane".to_string(), 1.5),
            ("slate".to_string(), 2.25),
        ]);
        let mut buffer = Vec::new();
        write_entropy_cache(&mut buffer, &table).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "word,entropy\nslate,2.25\ncrane,1.5\n");
        assert_eq!(parse_entropy_cache(&text).unwrap(), table);
    }

    #[test]
    fn malformed_cache_row_is_an_error() {
        assert!(parse_entropy_cache("word,entropy\ncrane\n").is_err());
        assert!(parse_entropy_cache("word,entropy\ncrane,high\n").is_err());
    }

    #[test]
    fn quoted_cache_fields_are_unquoted() {
        let table = parse_entropy_cache("word,entropy\n\"crane\",5.5\n\"slate\",\"2.0\"\n").unwrap();
        assert!((table.get(&Word::new("crane").unwrap()) - 5.5).abs() < f64::EPSILON);
        assert!((table.get(&Word::new("slate").unwrap()) - 2.0).abs() < f64::EPSILON);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn cache_columns_are_found_by_header() {
        let table = parse_entropy_cache("entropy,word\n1.25,crane\n").unwrap();
        assert!((table.get(&Word::new("crane").unwrap()) - 1.25).abs() < f64::EPSILON);
        assert!(parse_entropy_cache("guess,bits\ncrane,1.0\n").is_err());
    }

    #[test]
    fn cached_scores_are_looked_up_by_word() {
        let table = parse_entropy_cache("word,entropy\nCRANE,5.5\n").unwrap();
        assert!((table.get(&Word::new("crane").unwrap()) - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn simulation_log_has_padded_columns() {
        let records = [
            GameRecord {
                answer: "crone".to_string(),
                guesses: vec!["crane".to_string(), "crone".to_string()],
                attempts: 2,
                exhausted: None,
            },
            GameRecord {
                answer: "match".to_string(),
                guesses: vec!["batch".to_string()],
                attempts: 0,
                exhausted: Some(ExhaustReason::OutOfGuesses),
            },
        ];
        let mut buffer = Vec::new();
        write_simulation_log(&mut buffer, &records, 3).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "answer,guess1,guess2,guess3,attempts\ncrone,crane,crone,,2\nmatch,batch,,,0\n"
        );
    }
}
