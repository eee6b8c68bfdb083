use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
  Csv,
  Json,
}

/// Infers a column schema for one or more CSV or JSON files.
#[derive(Parser, Debug)]
#[command(name = "schemascan", version, about)]
pub struct Cli {
  /// File format to scan with
  #[arg(long, value_enum)]
  pub r#type: Format,

  /// Files or directories to scan
  #[arg(required = true)]
  pub paths: Vec<PathBuf>,

  /// Merge all per-file schemas into one negotiated schema
  #[arg(long)]
  pub negotiate: bool,

  /// Number of worker threads; defaults to the number of available cores
  #[arg(long)]
  pub workers: Option<usize>,
}
