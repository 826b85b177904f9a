// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::iter;

use crate::errors::SeqWinError;

pub const DEFAULT_WIDTH: usize = 51;
pub const PAD_CHAR: char = '_';
/// Widest window accepted; far beyond any protein, and small enough for `i64` site arithmetic.
pub const MAX_WIDTH: usize = 100_001;

/// A fixed-width window centred on a residue: `half` residues on each side of the site, so the
/// width is always odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    width: usize,
    half: usize,
}

impl Default for Window {
    fn default() -> Self {
        Window {
            width: DEFAULT_WIDTH,
            half: (DEFAULT_WIDTH - 1) / 2,
        }
    }
}

impl Window {
    pub fn new(width: usize) -> Result<Self, SeqWinError> {
        if width % 2 == 0 {
            return Err(SeqWinError::Config(format!(
                "window width must be a positive odd number, got {}",
                width
            )));
        }
        if width > MAX_WIDTH {
            return Err(SeqWinError::Config(format!(
                "window width must be at most {}, got {}",
                MAX_WIDTH, width
            )));
        }
        Ok(Window {
            width,
            half: (width - 1) / 2,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the window around `site` (1-based), padded with `PAD_CHAR` wherever it reaches past
    /// either end of `sequence`. The result is always exactly `width` characters long, even for
    /// sites outside `1..=len(sequence)`.
    pub fn extract(&self, sequence: &str, site: i64) -> String {
        let half = self.half as i64;
        let n = sequence.chars().count() as i64;

        // Half-open [start, end) slice of the sequence, 0-based.
        let start = site.saturating_sub(half + 1).clamp(0, n);
        let end = site.saturating_add(half).clamp(start, n);
        let core_len = (end - start) as usize;

        let left_pad = (half + 1).saturating_sub(site).clamp(0, self.width as i64) as usize;
        let right_pad = self.width.saturating_sub(left_pad + core_len);

        let mut window = String::with_capacity(self.width);
        window.extend(iter::repeat(PAD_CHAR).take(left_pad));
        window.extend(sequence.chars().skip(start as usize).take(core_len));
        window.extend(iter::repeat(PAD_CHAR).take(right_pad));
        window
    }
}
