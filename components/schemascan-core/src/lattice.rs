use std::fmt;

use crate::classify::{self, DateKind};
use crate::value::RawValue;

/// The eight-member type lattice. `Unknown` is the bottom element, `String`
/// is the top: every join and every refinement step moves up or stays put,
/// never down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalType {
  #[default]
  Unknown,
  Integer,
  Float,
  Boolean,
  Date,
  Timestamp,
  Json,
  String,
}

impl LogicalType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Unknown => "unknown",
      Self::Integer => "integer",
      Self::Float => "float",
      Self::Boolean => "boolean",
      Self::Date => "date",
      Self::Timestamp => "timestamp",
      Self::Json => "json",
      Self::String => "string",
    }
  }
}

impl fmt::Display for LogicalType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One step of the bootstrap/narrowing regime: given the column's current
/// type and the next value observed, what does the column become?
///
/// `Unknown` runs the bootstrap ordering (float/integer, then date, then
/// json, then boolean, then string); every other starting type runs its own
/// narrowing row. `String` is absorbing and short-circuits immediately.
pub fn refine(current: LogicalType, value: &RawValue) -> LogicalType {
  use LogicalType::*;

  if current == String {
    return String;
  }
  if classify::is_null(value) {
    return current;
  }

  match current {
    Unknown => {
      if classify::is_float(value) {
        return if classify::is_integer(value) { Integer } else { Float };
      }
      if let Some(kind) = classify::date_or_timestamp(value) {
        return match kind {
          DateKind::Date => Date,
          DateKind::Timestamp => Timestamp,
        };
      }
      if classify::is_json(value) {
        return Json;
      }
      if classify::is_boolean(value) {
        return Boolean;
      }
      String
    }
    Integer => {
      if classify::is_integer(value) {
        Integer
      } else if classify::is_float(value) {
        Float
      } else if classify::is_boolean(value) {
        Boolean
      } else {
        String
      }
    }
    Float => {
      if classify::is_float(value) {
        Float
      } else if classify::is_boolean(value) {
        Boolean
      } else {
        String
      }
    }
    Date => match classify::date_or_timestamp(value) {
      Some(DateKind::Date) => Date,
      Some(DateKind::Timestamp) => Timestamp,
      None if classify::is_boolean(value) => Boolean,
      None => String,
    },
    Timestamp => match classify::date_or_timestamp(value) {
      Some(_) => Timestamp,
      None if classify::is_boolean(value) => Boolean,
      None => String,
    },
    Json => {
      if classify::is_json(value) {
        Json
      } else if classify::is_boolean(value) {
        Boolean
      } else {
        String
      }
    }
    Boolean => {
      if classify::is_boolean(value) {
        Boolean
      } else {
        String
      }
    }
    String => unreachable!("handled by the early return above"),
  }
}

/// Commutative, associative, idempotent join over the lattice. `Unknown` is
/// the identity; `String` absorbs everything.
pub fn join(a: LogicalType, b: LogicalType) -> LogicalType {
  use LogicalType::*;
  match (a, b) {
    (Unknown, other) | (other, Unknown) => other,
    (String, _) | (_, String) => String,
    (x, y) if x == y => x,
    (Integer, Float) | (Float, Integer) => Float,
    (Date, Timestamp) | (Timestamp, Date) => Timestamp,
    _ => String,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join_is_idempotent() {
    for t in [
      LogicalType::Unknown,
      LogicalType::Integer,
      LogicalType::Float,
      LogicalType::Boolean,
      LogicalType::Date,
      LogicalType::Timestamp,
      LogicalType::Json,
      LogicalType::String,
    ] {
      assert_eq!(join(t, t), t);
    }
  }

  #[test]
  fn join_is_commutative() {
    let types = [
      LogicalType::Unknown,
      LogicalType::Integer,
      LogicalType::Float,
      LogicalType::Boolean,
      LogicalType::Date,
      LogicalType::Timestamp,
      LogicalType::Json,
      LogicalType::String,
    ];
    for &a in &types {
      for &b in &types {
        assert_eq!(join(a, b), join(b, a), "join({a:?}, {b:?}) not commutative");
      }
    }
  }

  #[test]
  fn join_is_associative() {
    let types = [
      LogicalType::Unknown,
      LogicalType::Integer,
      LogicalType::Float,
      LogicalType::Boolean,
      LogicalType::Date,
      LogicalType::Timestamp,
      LogicalType::Json,
      LogicalType::String,
    ];
    for &a in &types {
      for &b in &types {
        for &c in &types {
          assert_eq!(join(join(a, b), c), join(a, join(b, c)));
        }
      }
    }
  }

  #[test]
  fn unknown_is_identity() {
    for t in [
      LogicalType::Integer,
      LogicalType::Float,
      LogicalType::Boolean,
      LogicalType::Date,
      LogicalType::Timestamp,
      LogicalType::Json,
      LogicalType::String,
    ] {
      assert_eq!(join(LogicalType::Unknown, t), t);
      assert_eq!(join(t, LogicalType::Unknown), t);
    }
  }

  #[test]
  fn string_absorbs_everything() {
    for t in [
      LogicalType::Unknown,
      LogicalType::Integer,
      LogicalType::Float,
      LogicalType::Boolean,
      LogicalType::Date,
      LogicalType::Timestamp,
      LogicalType::Json,
    ] {
      assert_eq!(join(LogicalType::String, t), LogicalType::String);
    }
  }

  #[test]
  fn integer_and_float_join_to_float() {
    assert_eq!(join(LogicalType::Integer, LogicalType::Float), LogicalType::Float);
  }

  #[test]
  fn date_and_timestamp_join_to_timestamp() {
    assert_eq!(
      join(LogicalType::Date, LogicalType::Timestamp),
      LogicalType::Timestamp
    );
  }

  #[test]
  fn unrelated_types_join_to_string() {
    assert_eq!(join(LogicalType::Integer, LogicalType::Boolean), LogicalType::String);
    assert_eq!(join(LogicalType::Json, LogicalType::Date), LogicalType::String);
  }

  #[test]
  fn refine_is_monotone_and_null_preserving() {
    let v_int = RawValue::text("3");
    let v_float = RawValue::text("3.5");
    let v_null = RawValue::text("");
    let v_str = RawValue::text("hello");

    assert_eq!(refine(LogicalType::Unknown, &v_int), LogicalType::Integer);
    assert_eq!(refine(LogicalType::Integer, &v_float), LogicalType::Float);
    assert_eq!(refine(LogicalType::Float, &v_null), LogicalType::Float);
    assert_eq!(refine(LogicalType::Float, &v_str), LogicalType::String);
    assert_eq!(refine(LogicalType::String, &v_int), LogicalType::String);
  }

  #[test]
  fn bootstrap_classifies_boolean_literal_strings_as_boolean_not_json() {
    assert_eq!(
      refine(LogicalType::Unknown, &RawValue::text("true")),
      LogicalType::Boolean
    );
    assert_eq!(
      refine(LogicalType::Unknown, &RawValue::text("false")),
      LogicalType::Boolean
    );
  }
}
