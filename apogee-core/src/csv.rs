//! Micro CSV parser for the planned-launch files.
//!
//! Deliberately small rather than RFC 4180: commas split fields outside
//! double-quote pairs, a doubled quote inside a quoted field is a literal
//! quote, and embedded newlines inside quoted fields are not supported.
//! The first non-blank line is the header row; its cells become the keys of
//! each row's raw record. Blank lines are skipped wherever they appear.

use crate::normalize::RawRecord;
use serde_json::Value;

/// Parse CSV text into raw records keyed by the header row.
///
/// Header-only and empty inputs yield an empty list; this parser has no
/// failure mode.
#[must_use]
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let Some((header_line, rows)) = lines.split_first() else {
        return Vec::new();
    };
    if rows.is_empty() {
        return Vec::new();
    }

    let headers: Vec<String> = split_line(header_line)
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    rows.iter()
        .map(|row| {
            let cells = split_line(row);
            let mut record = RawRecord::new();
            for (index, header) in headers.iter().enumerate() {
                let cell = cells
                    .get(index)
                    .map(|value| value.trim().to_string())
                    .unwrap_or_default();
                record.insert(header.clone(), Value::String(cell));
            }
            record
        })
        .collect()
}

/// Split one CSV line on commas outside of double-quote pairs.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Doubled quote inside a quoted field is an escaped literal.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_and_doubled_quote_round_trip() {
        let text = "company,quote\n\"Acme, Inc.\",\"He said \"\"hi\"\"\"\n";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["company"], "Acme, Inc.");
        assert_eq!(records[0]["quote"], "He said \"hi\"");
    }

    #[test]
    fn blank_lines_are_skipped_including_between_header_and_data() {
        let text = "\nname,motor\n\n   \nAlpha,B6-4\n\n";
        let records = parse_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Alpha");
        assert_eq!(records[0]["motor"], "B6-4");
    }

    #[test]
    fn short_rows_pad_with_empty_strings() {
        let records = parse_records("a,b,c\n1,2\n");
        assert_eq!(records[0]["a"], "1");
        assert_eq!(records[0]["b"], "2");
        assert_eq!(records[0]["c"], "");
    }

    #[test]
    fn header_only_and_empty_inputs_yield_nothing() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("date,event\n").is_empty());
        assert!(parse_records("   \n  \n").is_empty());
    }

    #[test]
    fn values_and_headers_are_trimmed() {
        let records = parse_records(" date , event \n 2026-03-01 ,  Demo Day \n");
        assert_eq!(records[0]["date"], "2026-03-01");
        assert_eq!(records[0]["event"], "Demo Day");
    }
}
