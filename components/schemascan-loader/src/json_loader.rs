use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::PathBuf;

use schemascan_core::{Frame, RawValue};
use schemascan_error::{Error, Result};

use crate::flatten::flatten_record;
use crate::tokenizer::{self, PeekReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
  List,
  Object,
  EmptyOrMalformed,
}

fn peek_shape(file: &mut File) -> std::io::Result<Shape> {
  let mut buf = [0u8; 4096];
  loop {
    let n = file.read(&mut buf)?;
    if n == 0 {
      return Ok(Shape::EmptyOrMalformed);
    }
    for &b in &buf[..n] {
      if b.is_ascii_whitespace() {
        continue;
      }
      return Ok(match b {
        b'[' => Shape::List,
        b'{' => Shape::Object,
        _ => Shape::EmptyOrMalformed,
      });
    }
  }
}

#[derive(Clone, Copy)]
enum Mode {
  List,
  Object,
}

/// Opens JSON files in either list-of-objects or single-object mode,
/// detected by peeking at the first non-whitespace byte.
pub struct JsonLoader {
  path: PathBuf,
}

impl JsonLoader {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn open(&self) -> Result<JsonFrame> {
    if !self.path.is_file() {
      return Err(Error::NotFound(self.path.clone()));
    }
    let mut file = File::open(&self.path)?;
    let shape = peek_shape(&mut file)?;
    file.seek(SeekFrom::Start(0))?;
    let mut reader = PeekReader::new(BufReader::new(file));

    match shape {
      Shape::EmptyOrMalformed => Err(Error::MalformedJson {
        path: self.path.clone(),
        reason: "file is empty or does not start with '[' or '{'".to_string(),
      }),
      Shape::List => {
        tokenizer::skip_ws(&mut reader)?;
        reader.next()?; // the opening '['
        Ok(JsonFrame {
          path: self.path.clone(),
          reader: Some(reader),
          mode: Mode::List,
          done: false,
        })
      }
      Shape::Object => Ok(JsonFrame {
        path: self.path.clone(),
        reader: Some(reader),
        mode: Mode::Object,
        done: false,
      }),
    }
  }
}

pub struct JsonFrame {
  path: PathBuf,
  reader: Option<PeekReader<BufReader<File>>>,
  mode: Mode,
  done: bool,
}

impl JsonFrame {
  fn parse(&self, bytes: &[u8]) -> Result<serde_json::Value> {
    serde_json::from_slice(bytes).map_err(|e| Error::MalformedJson {
      path: self.path.clone(),
      reason: e.to_string(),
    })
  }
}

impl Frame for JsonFrame {
  fn known_columns(&self) -> &[String] {
    &[]
  }

  fn next_record(&mut self) -> Result<Option<Vec<(String, RawValue)>>> {
    if self.done {
      return Ok(None);
    }
    let Some(reader) = self.reader.as_mut() else {
      return Ok(None);
    };

    let bytes = match self.mode {
      Mode::Object => {
        self.done = true;
        tokenizer::skip_ws(reader)?;
        match reader.peek()? {
          None => return Ok(None),
          _ => tokenizer::read_value(reader)?,
        }
      }
      Mode::List => match tokenizer::read_array_element(reader)? {
        None => {
          self.done = true;
          return Ok(None);
        }
        Some(bytes) => bytes,
      },
    };

    let value = self.parse(&bytes)?;
    if !value.is_object() {
      return Err(Error::MalformedJson {
        path: self.path.clone(),
        reason: "expected a JSON object record".to_string(),
      });
    }
    Ok(Some(flatten_record(value)))
  }

  fn close(&mut self) {
    self.reader = None;
  }
}

impl Drop for JsonFrame {
  fn drop(&mut self) {
    self.close();
  }
}
