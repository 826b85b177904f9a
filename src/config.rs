// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::SeqWinError;
use crate::window::DEFAULT_WIDTH;

/// Where to read sequences and requests from, where to write windows to, and how wide the windows
/// are. Every field is optional in a config file; missing ones keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fasta_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub window_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fasta_dir: PathBuf::from("fasta"),
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            window_width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self, SeqWinError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeqWinError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text).map_err(|e| match e {
            SeqWinError::Config(msg) => SeqWinError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn to_json(&self) -> Result<String, SeqWinError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
