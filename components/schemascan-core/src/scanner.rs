use schemascan_error::Result;
use tracing::debug;

use crate::frame::Frame;
use crate::schema::Schema;
use crate::value::RawValue;

/// Runs one frame to completion, narrowing a `Schema` one record at a time.
///
/// Columns named in `known_columns` are pre-seeded as `Unknown` before the
/// first record, so a column that never appears in any row (possible for a
/// CSV header with no data rows) still shows up in the result. Loaders are
/// responsible for rejecting genuinely empty sources at `open()` time; by
/// the time a `Frame` reaches here it always has at least a header or at
/// least one record to offer.
pub fn scan<F: Frame>(mut frame: F) -> Result<Schema> {
  let mut schema = Schema::new();
  for name in frame.known_columns() {
    schema.refine_column(name, &RawValue::Null);
  }

  let result = run(&mut frame, &mut schema);
  frame.close();
  result?;
  Ok(schema)
}

fn run<F: Frame>(frame: &mut F, schema: &mut Schema) -> Result<usize> {
  let mut count = 0usize;
  while let Some(record) = frame.next_record()? {
    for (name, value) in &record {
      schema.refine_column(name, value);
    }
    count += 1;
  }
  debug!(records = count, "frame scanned");
  Ok(count)
}
