use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use schemascan_core::{negotiate, scan, Schema};
use schemascan_error::{Error, Result};
use schemascan_loader::{CsvLoader, JsonLoader};
use tracing::{debug, error};

use crate::config::{DispatchConfig, FileKind};

/// Per-file result: scanning errors are captured here rather than aborting
/// the whole run, so one malformed file never takes down the batch.
pub struct FileOutcome {
  pub path: PathBuf,
  pub schema: Schema,
  pub error: Option<Error>,
}

fn scan_one(path: &Path, kind: FileKind) -> Result<Schema> {
  match kind {
    FileKind::Csv => scan(CsvLoader::new(path).open()?),
    FileKind::Json => scan(JsonLoader::new(path).open()?),
  }
}

/// Scans every path in `paths` using a pool of `config.workers()` threads,
/// then optionally negotiates the resulting schemas into one.
///
/// Returns `Err(Error::WorkerFault)` only if a worker thread itself
/// panicked; per-file scan failures are captured on the corresponding
/// `FileOutcome` instead.
pub fn run(
  paths: &[PathBuf],
  kind: FileKind,
  config: &DispatchConfig,
) -> Result<(Vec<FileOutcome>, Option<Schema>)> {
  let workers = config.workers().min(paths.len().max(1));
  let (task_tx, task_rx) = mpsc::sync_channel::<PathBuf>(paths.len() + workers);
  let task_rx = std::sync::Arc::new(std::sync::Mutex::new(task_rx));
  let (out_tx, out_rx) = mpsc::channel::<FileOutcome>();

  for path in paths {
    task_tx
      .send(path.clone())
      .expect("channel sized to paths.len() + workers never blocks");
  }
  drop(task_tx);

  let mut handles = Vec::with_capacity(workers);
  for _ in 0..workers {
    let task_rx = task_rx.clone();
    let out_tx = out_tx.clone();
    handles.push(thread::spawn(move || {
      loop {
        let next = {
          let rx = task_rx.lock().expect("task queue mutex poisoned");
          rx.recv()
        };
        let Ok(path) = next else {
          break;
        };
        let outcome = match scan_one(&path, kind) {
          Ok(schema) => FileOutcome { path, schema, error: None },
          Err(e) => {
            debug!(path = %path.display(), error = %e, "file scan failed");
            FileOutcome { path, schema: Schema::new(), error: Some(e) }
          }
        };
        if out_tx.send(outcome).is_err() {
          break;
        }
      }
    }));
  }
  drop(out_tx);

  let mut outcomes = Vec::with_capacity(paths.len());
  while let Ok(outcome) = out_rx.recv() {
    outcomes.push(outcome);
  }

  for (worker, handle) in handles.into_iter().enumerate() {
    if let Err(panic) = handle.join() {
      let reason = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker thread panicked".to_string());
      error!(worker, %reason, "worker faulted");
      return Err(Error::WorkerFault { worker, reason });
    }
  }

  let negotiated = if config.negotiate() {
    Some(negotiate(outcomes.iter().map(|o| o.schema.clone())))
  } else {
    None
  };

  Ok((outcomes, negotiated))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  fn write_fixture(extension: &str, contents: &str) -> tempfile::TempPath {
    let mut f = tempfile::Builder::new()
      .suffix(&format!(".{extension}"))
      .tempfile()
      .unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.into_temp_path()
  }

  #[test]
  fn scans_every_file_and_negotiates() {
    let a = write_fixture("csv", "id\n1\n");
    let b = write_fixture("csv", "id\n2.5\n");
    let paths = vec![a.to_path_buf(), b.to_path_buf()];
    let config = DispatchConfig::default().with_workers(2).with_negotiate(true);
    let (outcomes, negotiated) = run(&paths, FileKind::Csv, &config).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.error.is_none()));
    let negotiated = negotiated.unwrap();
    assert_eq!(negotiated.get("id"), Some(schemascan_core::LogicalType::Float));
  }

  #[test]
  fn per_file_failures_are_captured_not_propagated() {
    let good = write_fixture("csv", "id\n1\n");
    let missing = PathBuf::from("/no/such/file.csv");
    let paths = vec![good.to_path_buf(), missing];
    let config = DispatchConfig::default().with_workers(2);
    let (outcomes, _) = run(&paths, FileKind::Csv, &config).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().any(|o| o.error.is_some()));
    assert!(outcomes.iter().any(|o| o.error.is_none()));
  }

  #[test]
  fn workers_are_capped_to_the_number_of_files() {
    let a = write_fixture("csv", "id\n1\n");
    let paths = vec![a.to_path_buf()];
    let config = DispatchConfig::default().with_workers(8);
    let (outcomes, _) = run(&paths, FileKind::Csv, &config).unwrap();
    assert_eq!(outcomes.len(), 1);
  }
}
