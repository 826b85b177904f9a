// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use seqwin::errors::SeqWinError;

fn main() -> Result<(), SeqWinError> {
    seqwin::run()
}
