// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::errors::SeqWinError;
use crate::seq::record::SeqRecord;

/// Outcome of parsing one FastA source: the well-formed records, in file order, and the number of
/// records that were dropped because their header carried no identifier field.
#[derive(Debug, Default)]
pub struct FastaParse {
    pub records: Vec<SeqRecord>,
    pub skipped_headers: usize,
}

/// Returns the identifier encoded in a UniProt-style header, i.e. the second `|`-delimited field
/// (`>sp|P12345|DESC` -> `P12345`). `None` if the line is not a header or has no second field.
pub fn parse_header_id(header: &str) -> Option<&str> {
    header.strip_prefix('>')?.split('|').nth(1)
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<FastaParse, SeqWinError> {
    let mut result = FastaParse::default();
    // None before the first header, and while inside a record whose header was rejected.
    let mut current_record: Option<SeqRecord> = None;

    for (idx, line) in reader.lines().enumerate() {
        let raw = line?;
        let l = raw.trim();
        if l.starts_with('>') {
            if let Some(record) = current_record.take() {
                result.records.push(record);
            }
            match parse_header_id(l) {
                Some(id) => {
                    current_record = Some(SeqRecord {
                        id: String::from(id),
                        sequence: String::new(),
                    });
                }
                None => {
                    warn!(
                        "line {}: no identifier in FastA header '{}', skipping record",
                        idx + 1,
                        l
                    );
                    result.skipped_headers += 1;
                }
            }
        } else if let Some(record) = current_record.as_mut() {
            record.sequence.push_str(l);
        }
    }
    if let Some(record) = current_record {
        result.records.push(record);
    }

    Ok(result)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<FastaParse, SeqWinError> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_id_00() {
        assert_eq!(parse_header_id(">sp|P12345|DESC"), Some("P12345"));
    }

    #[test]
    fn test_parse_header_id_05() {
        // Only the second field counts, whatever follows it.
        assert_eq!(parse_header_id(">tr|A0A024R161|A0A024R161_HUMAN Guanine|x"), Some("A0A024R161"));
        assert_eq!(parse_header_id(">db|X1"), Some("X1"));
    }

    #[test]
    fn test_parse_header_id_10() {
        assert_eq!(parse_header_id(">P12345 no pipes here"), None);
        assert_eq!(parse_header_id("sp|P12345|DESC"), None);
    }

    #[test]
    fn test_read_fasta_00() {
        let text = ">db|X1|desc\nMKVLA\n";
        let fasta = read_fasta(text.as_bytes()).expect("parse");
        assert_eq!(fasta.records.len(), 1);
        assert_eq!(fasta.records[0].id, "X1");
        assert_eq!(fasta.records[0].sequence, "MKVLA");
        assert_eq!(fasta.skipped_headers, 0);
    }

    #[test]
    fn test_read_fasta_05() {
        // Preamble lines are ignored, and sequence lines are trimmed before being joined.
        let text = "stray line\n\n>sp|A1|first\n  MKV \nLA\n\n>sp|B2|second\nGG\n";
        let fasta = read_fasta(text.as_bytes()).expect("parse");
        assert_eq!(fasta.records.len(), 2);
        assert_eq!(fasta.records[0].sequence, "MKVLA");
        assert_eq!(fasta.records[1].id, "B2");
        assert_eq!(fasta.records[1].sequence, "GG");
    }

    #[test]
    fn test_read_fasta_10() {
        // The malformed record's sequence must not leak into its neighbours.
        let text = ">sp|A1|ok\nAAA\n>broken\nCCC\n>sp|B2|ok\nDDD\n";
        let fasta = read_fasta(text.as_bytes()).expect("parse");
        assert_eq!(fasta.skipped_headers, 1);
        assert_eq!(
            fasta.records,
            vec![
                SeqRecord { id: String::from("A1"), sequence: String::from("AAA") },
                SeqRecord { id: String::from("B2"), sequence: String::from("DDD") },
            ]
        );
    }

    #[test]
    fn test_read_fasta_15() {
        // A header with no sequence lines still yields an (empty) record.
        let fasta = read_fasta(">sp|E1|empty\n".as_bytes()).expect("parse");
        assert_eq!(fasta.records[0].id, "E1");
        assert!(fasta.records[0].sequence.is_empty());
    }

    #[test]
    fn test_read_fasta_file_1() {
        let path = "data/test1.fasta";
        let fasta = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.records.len(), 1);
        assert_eq!(fasta.records[0].id, "P04637");
        assert_eq!(fasta.records[0].sequence.len(), 120);
        assert!(fasta.records[0].sequence.starts_with("MEEPQSDPSV"));
    }

    #[test]
    fn test_read_fasta_file_2() {
        let path = "data/test2.fasta";
        let fasta = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.skipped_headers, 1);
        assert_eq!(fasta.records.len(), 3);
        assert_eq!(fasta.records[0].id, "Q00001");
        assert_eq!(fasta.records[0].sequence, "MKVLAAGIVGLLLAQSTPSR");
        assert_eq!(fasta.records[1].id, "Q00002");
        assert_eq!(fasta.records[1].sequence, "MSTNPKPQRKTKRNTNRRPQ");
        assert_eq!(fasta.records[2].id, "Q00003");
        assert_eq!(fasta.records[2].sequence, "MA");
    }

    #[test]
    fn test_read_fasta_file_missing() {
        let res = read_fasta_file("data/no-such-file.fasta");
        assert!(matches!(res, Err(SeqWinError::Io(_))));
    }
}
