// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use log::info;

use clap::Parser;

use crate::batch;
use crate::config::Config;
use crate::errors::SeqWinError;
use crate::seq::store::SequenceStore;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// JSON config file (keys: fasta_dir, input_dir, output_dir, window_width)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of *.fasta files [default: fasta]
    #[arg(short, long = "fasta-dir")]
    fasta_dir: Option<PathBuf>,

    /// Directory of *.txt request files [default: input]
    #[arg(short, long = "input-dir")]
    input_dir: Option<PathBuf>,

    /// Directory receiving one output file per request file [default: output]
    #[arg(short, long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Window width, odd [default: 51]
    #[arg(short, long)]
    width: Option<usize>,

    /// Info mode: load sequences, report, and exit without processing requests
    #[arg(long)]
    info: bool,
}

// Defaults, then the config file (if any), then command-line flags.
fn build_config(cli: &Cli) -> Result<Config, SeqWinError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.fasta_dir {
        config.fasta_dir = dir.clone();
    }
    if let Some(dir) = &cli.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(width) = cli.width {
        config.window_width = width;
    }
    Ok(config)
}

pub fn run() -> Result<(), SeqWinError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if cli.info {
        info!("Running in info mode.");
        let store = SequenceStore::load_dir(&config.fasta_dir)?;
        println!("{}", config.to_json()?);
        println!(
            "{} sequence(s) in {}",
            store.len(),
            config.fasta_dir.display()
        );
        return Ok(());
    }

    let summary = batch::run(&config)?;
    println!("{}", summary);

    Ok(())
}
