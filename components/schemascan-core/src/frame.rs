use schemascan_error::Result;

use crate::value::RawValue;

/// A single source of records, independent of the underlying file format.
///
/// Loaders (CSV, JSON) hand the scanner a `Frame` instead of letting it see
/// any I/O directly, so the scanner stays format-agnostic.
pub trait Frame {
  /// Columns known before the first record is read. CSV frames return the
  /// header; JSON frames return an empty slice, since columns only become
  /// known as records reveal their keys.
  fn known_columns(&self) -> &[String];

  /// Pulls the next record, or `None` once the frame is exhausted.
  fn next_record(&mut self) -> Result<Option<Vec<(String, RawValue)>>>;

  /// Releases any underlying resource early. Idempotent: calling it more
  /// than once, or never, is always safe. The scanner calls it once after
  /// the last record, but frames also release on `Drop` for the case where
  /// scanning aborts partway through.
  fn close(&mut self);
}
