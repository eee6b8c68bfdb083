use std::path::PathBuf;

/// Error taxonomy shared by the loader, scanner and dispatcher.
///
/// Kept flat and `thiserror`-based rather than carrying a severity/category
/// taxonomy of its own: the surface here is small and every variant maps
/// directly onto one of the kinds in the scanning contract.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("path not found: {0}")]
  NotFound(PathBuf),

  #[error("empty file: {0}")]
  EmptyFile(PathBuf),

  #[error("malformed row in {path}: header has {expected} fields, row has {found}")]
  MalformedRow {
    path: PathBuf,
    expected: usize,
    found: usize,
  },

  #[error("malformed json in {path}: {reason}")]
  MalformedJson { path: PathBuf, reason: String },

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("worker {worker} faulted: {reason}")]
  WorkerFault { worker: usize, reason: String },
}

impl Error {
  /// Stable, short tag for logging — matches the taxonomy names in the
  /// scanning contract rather than the Display message.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::NotFound(_) => "NotFound",
      Self::EmptyFile(_) => "EmptyFile",
      Self::MalformedRow { .. } => "MalformedRow",
      Self::MalformedJson { .. } => "MalformedJSON",
      Self::Io(_) => "IOError",
      Self::WorkerFault { .. } => "WorkerFault",
    }
  }
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;
