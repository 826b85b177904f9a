// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, warn};

// For our purposes, a source directory is just the sorted list of the regular, non-hidden files
// in it that carry a given extension. A missing directory is an empty source, not an error.
//

pub fn files_with_extension<P: AsRef<Path>>(dir: P, ext: &str) -> Result<Vec<PathBuf>, std::io::Error> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("directory {} not found, nothing to read", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(true);
        if !hidden && path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(ext) {
            paths.push(path);
        }
    }
    debug!("{} *.{} file(s) in {}", paths.len(), ext, dir.display());
    Ok(paths.into_iter().sorted().collect())
}
