// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fs, path::Path};

use tempfile::TempDir;

use seqwin::config::Config;

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::create_dir_all(dir).expect("creating test dir");
    fs::write(dir.join(name), contents).expect("writing test file");
}

/// A scratch working area with `fasta/`, `input/` and `output/` under a temp dir, and a config
/// pointing at them. Nothing is created on disk until files are written.
#[allow(dead_code)]
pub fn scratch_config(width: usize) -> (TempDir, Config) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = Config {
        fasta_dir: tmp.path().join("fasta"),
        input_dir: tmp.path().join("input"),
        output_dir: tmp.path().join("output"),
        window_width: width,
    };
    (tmp, config)
}

#[allow(dead_code)]
pub fn read_output(config: &Config, name: &str) -> String {
    fs::read_to_string(config.output_dir.join(name)).expect("reading output file")
}
