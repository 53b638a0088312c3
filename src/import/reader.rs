//! Raw row extraction: byte decoding and delimiter sniffing.

use encoding_rs::WINDOWS_1252;

use super::ImportError;

/// Delimiters tried during detection, in order of preference on ties.
const CANDIDATE_DELIMITERS: [u8; 4] = [b';', b',', b'\t', b'|'];

/// How many non-empty lines the sniffer looks at.
const SAMPLE_LINES: usize = 20;

/// Decode an uploaded file. Every export this system reads is Windows-1252
/// (the Excel default on pt-BR machines), never UTF-8.
pub(crate) fn decode(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Pick the delimiter whose per-line count is most consistent across the
/// sampled lines. Separators inside double quotes are not counted.
pub(crate) fn detect_delimiter(text: &str) -> u8 {
    let sample: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let mut best: Option<(u8, usize)> = None;
    for &candidate in &CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| count_unquoted(line, candidate))
            .collect();
        let Some(mode) = most_common_nonzero(&counts) else {
            continue;
        };
        let consistency = counts.iter().filter(|&&c| c == mode).count();

        if best.map_or(true, |(_, best_consistency)| consistency > best_consistency) {
            best = Some((candidate, consistency));
        }
    }

    best.map(|(d, _)| d).unwrap_or(b';')
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line.as_bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

/// The most frequent nonzero value; ties go to the larger count.
fn most_common_nonzero(counts: &[usize]) -> Option<usize> {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    for &c in counts.iter().filter(|&&c| c > 0) {
        match tally.iter_mut().find(|(value, _)| *value == c) {
            Some((_, n)) => *n += 1,
            None => tally.push((c, 1)),
        }
    }
    tally
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(value, _)| value)
}

/// Decode, sniff and split a file into untyped rows. No header is assumed.
pub(crate) fn read_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let text = decode(bytes);
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }
    let delimiter = detect_delimiter(&text);
    tracing::debug!(delimiter = %(delimiter as char).escape_default(), "detected delimiter");

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
