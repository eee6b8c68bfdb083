use std::fs::File;
use std::path::PathBuf;

use schemascan_core::{Frame, RawValue};
use schemascan_error::{Error, Result};

/// Opens CSV files, treating the first record as the header and every
/// subsequent record as data. No whitespace trimming, no type coercion:
/// that is the scanner's job.
pub struct CsvLoader {
  path: PathBuf,
}

impl CsvLoader {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn open(&self) -> Result<CsvFrame> {
    if !self.path.is_file() {
      return Err(Error::NotFound(self.path.clone()));
    }
    let file = File::open(&self.path)?;
    let reader = csv::ReaderBuilder::new()
      .has_headers(false)
      .flexible(true)
      .trim(csv::Trim::None)
      .from_reader(file);
    let mut records = reader.into_records();

    let header = match records.next() {
      Some(Ok(record)) => record.iter().map(String::from).collect::<Vec<_>>(),
      Some(Err(e)) => return Err(csv_error(e)),
      None => return Err(Error::EmptyFile(self.path.clone())),
    };

    Ok(CsvFrame {
      path: self.path.clone(),
      header,
      records: Some(records),
    })
  }
}

pub struct CsvFrame {
  path: PathBuf,
  header: Vec<String>,
  records: Option<csv::StringRecordsIntoIter<File>>,
}

impl Frame for CsvFrame {
  fn known_columns(&self) -> &[String] {
    &self.header
  }

  fn next_record(&mut self) -> Result<Option<Vec<(String, RawValue)>>> {
    let Some(iter) = self.records.as_mut() else {
      return Ok(None);
    };
    match iter.next() {
      None => Ok(None),
      Some(Err(e)) => Err(csv_error(e)),
      Some(Ok(row)) => {
        if row.len() != self.header.len() {
          return Err(Error::MalformedRow {
            path: self.path.clone(),
            expected: self.header.len(),
            found: row.len(),
          });
        }
        let record = self
          .header
          .iter()
          .zip(row.iter())
          .map(|(name, value)| (name.clone(), RawValue::text(value)))
          .collect();
        Ok(Some(record))
      }
    }
  }

  fn close(&mut self) {
    self.records = None;
  }
}

impl Drop for CsvFrame {
  fn drop(&mut self) {
    self.close();
  }
}

fn csv_error(err: csv::Error) -> Error {
  match err.into_kind() {
    csv::ErrorKind::Io(io_err) => Error::Io(io_err),
    other => Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string())),
  }
}
