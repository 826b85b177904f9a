// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fmt,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    ops::AddAssign,
};

use log::{debug, info};

use crate::config::Config;
use crate::errors::SeqWinError;
use crate::seq::file::files_with_extension;
use crate::seq::store::SequenceStore;
use crate::window::Window;

pub const REQUEST_EXT: &str = "txt";

/// One line of a request file: a protein identifier and a 1-based site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRequest {
    pub id: String,
    pub site: i64,
}

impl SiteRequest {
    /// `None` unless the line has exactly two whitespace-separated fields and the second is an
    /// integer.
    pub fn parse(line: &str) -> Option<SiteRequest> {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(site), None) => site.parse().ok().map(|site| SiteRequest {
                id: String::from(id),
                site,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub windows: usize,
    pub malformed: usize,
    pub unknown: usize,
}

impl AddAssign for FileSummary {
    fn add_assign(&mut self, other: Self) {
        self.windows += other.windows;
        self.malformed += other.malformed;
        self.unknown += other.unknown;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub sequences: usize,
    pub files: usize,
    pub totals: FileSummary,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sequence(s) loaded, {} request file(s), {} window(s) written, \
             {} malformed line(s) skipped, {} unknown identifier(s)",
            self.sequences,
            self.files,
            self.totals.windows,
            self.totals.malformed,
            self.totals.unknown
        )
    }
}

/// Resolves every request line read from `reader` and writes `id<TAB>site<TAB>window` lines to
/// `writer`. Blank lines are ignored; malformed lines and unknown identifiers are counted and
/// otherwise dropped.
pub fn process_requests<R: BufRead, W: Write>(
    store: &SequenceStore,
    window: &Window,
    reader: R,
    writer: &mut W,
) -> Result<FileSummary, SeqWinError> {
    let mut summary = FileSummary::default();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let l = match String::from_utf8(raw) {
            Ok(l) => l,
            Err(e) => {
                debug!("line {}: request is not valid UTF-8 ({})", idx + 1, e.utf8_error());
                summary.malformed += 1;
                continue;
            }
        };
        if l.trim().is_empty() {
            continue;
        }
        let Some(request) = SiteRequest::parse(&l) else {
            debug!("line {}: malformed request '{}'", idx + 1, l);
            summary.malformed += 1;
            continue;
        };
        match store.get(&request.id) {
            Some(sequence) => {
                let win = window.extract(sequence, request.site);
                writeln!(writer, "{}\t{}\t{}", request.id, request.site, win)?;
                summary.windows += 1;
            }
            None => {
                debug!("line {}: unknown identifier {}", idx + 1, request.id);
                summary.unknown += 1;
            }
        }
    }

    Ok(summary)
}

/// Loads the sequence store from `config.fasta_dir`, then turns every `*.txt` request file in
/// `config.input_dir` into a file of the same name in `config.output_dir`.
pub fn run(config: &Config) -> Result<BatchSummary, SeqWinError> {
    let window = Window::new(config.window_width)?;
    let store = SequenceStore::load_dir(&config.fasta_dir)?;
    info!(
        "{} sequence(s) loaded from {}, window width {}",
        store.len(),
        config.fasta_dir.display(),
        window.width()
    );

    let inputs = files_with_extension(&config.input_dir, REQUEST_EXT)?;
    if config.input_dir.exists()
        && config.output_dir.exists()
        && fs::canonicalize(&config.input_dir)? == fs::canonicalize(&config.output_dir)?
    {
        return Err(SeqWinError::Config(format!(
            "input and output directory are the same ({}); outputs would overwrite requests",
            config.input_dir.display()
        )));
    }
    fs::create_dir_all(&config.output_dir)?;

    let mut summary = BatchSummary {
        sequences: store.len(),
        ..BatchSummary::default()
    };
    for input_path in inputs {
        // files_with_extension() only returns paths with a file name.
        let Some(fname) = input_path.file_name() else {
            continue;
        };
        let output_path = config.output_dir.join(fname);
        let reader = BufReader::new(File::open(&input_path)?);
        let mut writer = BufWriter::new(File::create(&output_path)?);
        let file_summary = process_requests(&store, &window, reader, &mut writer)?;
        writer.flush()?;
        info!(
            "{} -> {}: {} window(s), {} malformed, {} unknown",
            input_path.display(),
            output_path.display(),
            file_summary.windows,
            file_summary.malformed,
            file_summary.unknown
        );
        summary.files += 1;
        summary.totals += file_summary;
    }

    Ok(summary)
}
