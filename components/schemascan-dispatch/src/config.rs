/// Which loader a path should be scanned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  Csv,
  Json,
}

/// Tunables for a dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
  workers: usize,
  negotiate: bool,
}

impl DispatchConfig {
  pub fn workers(&self) -> usize {
    self.workers
  }

  pub fn negotiate(&self) -> bool {
    self.negotiate
  }

  pub fn with_workers(mut self, workers: usize) -> Self {
    self.workers = workers.max(1);
    self
  }

  pub fn with_negotiate(mut self, negotiate: bool) -> Self {
    self.negotiate = negotiate;
    self
  }
}

impl Default for DispatchConfig {
  fn default() -> Self {
    let workers = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    Self { workers, negotiate: false }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn with_workers_never_goes_to_zero() {
    let config = DispatchConfig::default().with_workers(0);
    assert_eq!(config.workers(), 1);
  }
}
