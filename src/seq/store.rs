// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use crate::errors::SeqWinError;
use crate::seq::fasta::read_fasta_file;
use crate::seq::file::files_with_extension;
use crate::seq::record::SeqRecord;

pub const FASTA_EXT: &str = "fasta";

/// Identifier -> sequence lookup table. Built once, then only read.
#[derive(Debug, Default, Clone)]
pub struct SequenceStore {
    sequences: HashMap<String, String>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I: IntoIterator<Item = SeqRecord>>(records: I) -> Self {
        let mut store = Self::new();
        store.extend_from_records(records);
        store
    }

    /// Adds records in order; a record whose identifier is already present replaces the earlier
    /// sequence.
    pub fn extend_from_records<I: IntoIterator<Item = SeqRecord>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn insert(&mut self, record: SeqRecord) {
        if let Some(old) = self.sequences.get_mut(&record.id) {
            debug!("duplicate identifier {}, replacing earlier sequence", record.id);
            *old = record.sequence;
        } else {
            self.sequences.insert(record.id, record.sequence);
        }
    }

    /// Reads every `*.fasta` file in `dir`, in file-name order.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, SeqWinError> {
        let mut store = Self::new();
        for path in files_with_extension(&dir, FASTA_EXT)? {
            let parsed = read_fasta_file(&path)?;
            info!(
                "{}: {} record(s), {} skipped",
                path.display(),
                parsed.records.len(),
                parsed.skipped_headers
            );
            store.extend_from_records(parsed.records);
        }
        Ok(store)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
