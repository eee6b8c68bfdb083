mod args;

use std::path::PathBuf;
use std::process::ExitCode;

use args::{Cli, Format};
use clap::Parser;
use schemascan_dispatch::{DispatchConfig, FileKind};
use tracing::{info, warn};

fn expand(paths: &[PathBuf]) -> Vec<PathBuf> {
  let mut files = Vec::new();
  for path in paths {
    if path.is_dir() {
      let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
          warn!(path = %path.display(), error = %e, "could not read directory");
          continue;
        }
      };
      for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_file() {
          files.push(entry_path);
        }
      }
    } else {
      files.push(path.clone());
    }
  }
  files.sort();
  files
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .without_time()
    .with_target(false)
    .init();

  let cli = Cli::parse();
  let kind = match cli.r#type {
    Format::Csv => FileKind::Csv,
    Format::Json => FileKind::Json,
  };

  let files = expand(&cli.paths);
  if files.is_empty() {
    warn!("no files to scan");
    return ExitCode::SUCCESS;
  }

  let mut config = DispatchConfig::default().with_negotiate(cli.negotiate);
  if let Some(workers) = cli.workers {
    config = config.with_workers(workers);
  }

  match schemascan_dispatch::run(&files, kind, &config) {
    Ok((outcomes, negotiated)) => {
      for outcome in &outcomes {
        match &outcome.error {
          Some(e) => warn!(path = %outcome.path.display(), error = %e, kind = e.kind(), "file scan failed"),
          None => info!(path = %outcome.path.display(), "scanned"),
        }
        print_schema(&outcome.path.display().to_string(), &outcome.schema);
      }
      if let Some(schema) = negotiated {
        print_schema("<negotiated>", &schema);
      }
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("fatal: {e}");
      ExitCode::FAILURE
    }
  }
}

fn print_schema(label: &str, schema: &schemascan_core::Schema) {
  println!("{label}:");
  for (column, ty) in schema.iter() {
    println!("  {column}: {ty}");
  }
}
