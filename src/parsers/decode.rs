//! Byte decoding and delimited-text preamble handling.
//!
//! Exports arrive with no declared encoding; the byte-order mark is the
//! only reliable signal. Everything here is total - undecodable sequences
//! are replaced, and an input that cleans down to nothing is a typed
//! no-result for the caller, not an error.

use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8};

/// Decode artifact bytes to text.
///
/// UTF-16 LE/BE and UTF-8 byte-order marks select the decoder (and are
/// stripped); without one, bytes are decoded as UTF-8 with malformed
/// sequences replaced. Never fails.
pub(crate) fn decode_bytes(data: &[u8]) -> String {
    if data.starts_with(&[0xFF, 0xFE]) {
        UTF_16LE.decode_with_bom_removal(data).0.into_owned()
    } else if data.starts_with(&[0xFE, 0xFF]) {
        UTF_16BE.decode_with_bom_removal(data).0.into_owned()
    } else {
        UTF_8.decode_with_bom_removal(data).0.into_owned()
    }
}

/// Pick the column separator from a header line.
///
/// Tab wins only when it strictly beats both others; semicolon beats
/// comma; comma is the default.
pub(crate) fn detect_delimiter(header_line: &str) -> u8 {
    let tabs = header_line.matches('\t').count();
    let semis = header_line.matches(';').count();
    let commas = header_line.matches(',').count();
    if tabs > commas && tabs > semis {
        b'\t'
    } else if semis > commas {
        b';'
    } else {
        b','
    }
}

/// First-field tokens of KiCad CSV preamble lines.
const PREAMBLE_TOKENS: &[&str] = &["source:", "date:", "tool:", "generator:"];

/// Decode and clean delimited-text bytes down to a parseable block.
///
/// Drops `#` comment lines, then leading preamble lines whose first
/// comma-field (lower-cased, quote-stripped) is empty or a known preamble
/// token, picks the delimiter from the first remaining line unless `forced`
/// is given, and finally drops any further leading lines lacking the
/// delimiter. Returns `None` when nothing tabular remains.
pub(crate) fn prepare_delimited(data: &[u8], forced: Option<u8>) -> Option<(String, u8)> {
    let text = decode_bytes(data);
    let mut lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect();

    let preamble_end = lines
        .iter()
        .position(|line| {
            let first_field = line
                .split(',')
                .next()
                .unwrap_or("")
                .trim()
                .trim_matches('"')
                .to_lowercase();
            !first_field.is_empty() && !PREAMBLE_TOKENS.contains(&first_field.as_str())
        })
        .unwrap_or(lines.len());
    lines.drain(..preamble_end);

    let first = lines.first()?;
    let delimiter = forced.unwrap_or_else(|| detect_delimiter(first));
    let sep = delimiter as char;

    let start = lines.iter().position(|line| line.contains(sep))?;
    Some((lines[start..].join("\n"), delimiter))
}
