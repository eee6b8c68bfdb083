use std::io::{self, Read};

/// A `Read` wrapper with one byte of lookahead, needed to find the end of a
/// bare scalar token (a number, `true`, `false`, or `null`) that has no
/// closing delimiter of its own.
pub struct PeekReader<R> {
  inner: R,
  peeked: Option<u8>,
}

impl<R: Read> PeekReader<R> {
  pub fn new(inner: R) -> Self {
    Self { inner, peeked: None }
  }

  pub fn peek(&mut self) -> io::Result<Option<u8>> {
    if self.peeked.is_none() {
      self.peeked = self.read_byte()?;
    }
    Ok(self.peeked)
  }

  pub fn next(&mut self) -> io::Result<Option<u8>> {
    if let Some(b) = self.peeked.take() {
      return Ok(Some(b));
    }
    self.read_byte()
  }

  fn read_byte(&mut self) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    let n = self.inner.read(&mut buf)?;
    Ok(if n == 0 { None } else { Some(buf[0]) })
  }
}

pub fn skip_ws(r: &mut PeekReader<impl Read>) -> io::Result<()> {
  while let Some(b) = r.peek()? {
    if b.is_ascii_whitespace() {
      r.next()?;
    } else {
      break;
    }
  }
  Ok(())
}

fn skip_ws_and_commas(r: &mut PeekReader<impl Read>) -> io::Result<()> {
  while let Some(b) = r.peek()? {
    if b.is_ascii_whitespace() || b == b',' {
      r.next()?;
    } else {
      break;
    }
  }
  Ok(())
}

/// Reads one JSON value's raw bytes out of a sequence that is terminated by
/// `]`, without ever buffering more than a single value at a time.
///
/// Returns `Ok(None)` once the closing `]` is reached. Malformed input (an
/// unterminated string, unbalanced braces, truncated input) is not rejected
/// here — the caller hands the raw bytes to a real JSON parser, which is the
/// single source of truth for validity.
pub fn read_array_element(r: &mut PeekReader<impl Read>) -> io::Result<Option<Vec<u8>>> {
  skip_ws_and_commas(r)?;
  match r.peek()? {
    None => Ok(None),
    Some(b']') => {
      r.next()?;
      Ok(None)
    }
    _ => read_value(r).map(Some),
  }
}

/// Reads one complete JSON value's raw bytes, starting at the current
/// position (which must not be whitespace).
pub fn read_value(r: &mut PeekReader<impl Read>) -> io::Result<Vec<u8>> {
  let mut buf = Vec::new();
  match r.peek()? {
    Some(b'"') => {
      buf.push(r.next()?.unwrap());
      let mut escape = false;
      while let Some(b) = r.next()? {
        buf.push(b);
        if escape {
          escape = false;
        } else if b == b'\\' {
          escape = true;
        } else if b == b'"' {
          break;
        }
      }
    }
    Some(b'{') | Some(b'[') => {
      let mut depth = 0i32;
      let mut in_string = false;
      let mut escape = false;
      while let Some(b) = r.next()? {
        buf.push(b);
        if in_string {
          if escape {
            escape = false;
          } else if b == b'\\' {
            escape = true;
          } else if b == b'"' {
            in_string = false;
          }
          continue;
        }
        match b {
          b'"' => in_string = true,
          b'{' | b'[' => depth += 1,
          b'}' | b']' => {
            depth -= 1;
            if depth == 0 {
              break;
            }
          }
          _ => {}
        }
      }
    }
    _ => {
      while let Some(b) = r.peek()? {
        if b.is_ascii_whitespace() || b == b',' || b == b']' || b == b'}' {
          break;
        }
        buf.push(r.next()?.unwrap());
      }
    }
  }
  Ok(buf)
}
