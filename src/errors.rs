// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum SeqWinError {
    Io(io::Error),
    Config(String),
}

// These allow conversion to SeqWinError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for SeqWinError {
    fn from(e: io::Error) -> Self {
        SeqWinError::Io(e)
    }
}

impl From<serde_json::Error> for SeqWinError {
    fn from(e: serde_json::Error) -> Self {
        SeqWinError::Config(e.to_string())
    }
}

impl fmt::Display for SeqWinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqWinError::Io(e) => write!(f, "I/O error: {}", e),
            SeqWinError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SeqWinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqWinError::Io(e) => Some(e),
            _ => None,
        }
    }
}
