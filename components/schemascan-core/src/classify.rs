use std::sync::LazyLock;

use regex::Regex;

use crate::value::RawValue;

const NULL_SET: &[&str] = &["", "NULL", "Null", "null", "None", "none", "NA", "N/A"];
const BOOL_SET: &[&str] = &["True", "False", "true", "false", "t", "f", "T", "F", "1", "0"];

// Deliberately rejects a leading sign (`-3` classifies as `string`, not
// `integer`): preserved for bug-compatibility with the system this was
// distilled from.
static INTEGER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(\d+)(\.0*)?$").expect("valid regex"));

static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[+-]?((\d+\.\d*)|(\.\d+)|(\d+))([eE][+-]?\d+)?$").expect("valid regex")
});

const DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
  Date,
  Timestamp,
}

/// Exact string equality, no trimming, no case folding: the null and
/// boolean sets are fixed literal lists, not case-insensitive patterns.
fn exact_member(s: &str, set: &[&str]) -> bool {
  set.contains(&s)
}

/// Step 1 of the bootstrap/narrowing regimes: is this value the column's
/// null marker?
pub fn is_null(value: &RawValue) -> bool {
  match value {
    RawValue::Null => true,
    RawValue::Text(s) => exact_member(s, NULL_SET),
    _ => false,
  }
}

pub fn is_integer(value: &RawValue) -> bool {
  match value {
    RawValue::Number { is_integral } => *is_integral,
    RawValue::Text(s) => INTEGER_RE.is_match(s),
    _ => false,
  }
}

pub fn is_float(value: &RawValue) -> bool {
  match value {
    RawValue::Number { .. } => true,
    RawValue::Text(s) => FLOAT_RE.is_match(s),
    _ => false,
  }
}

pub fn is_boolean(value: &RawValue) -> bool {
  match value {
    RawValue::Bool(_) => true,
    RawValue::Text(s) => exact_member(s, BOOL_SET),
    _ => false,
  }
}

/// A CSV string counts as `json` only if it looks like an object or array
/// *and* parses; a bare `"true"` or `"42"` is valid JSON too but must not
/// preempt the boolean/numeric classifiers that run before this one.
pub fn is_json(value: &RawValue) -> bool {
  match value {
    RawValue::Composite => true,
    RawValue::Text(s) => {
      let trimmed = s.trim_start();
      (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(s).is_ok()
    }
    _ => false,
  }
}

/// Lenient date/timestamp recognition. A value parses as `Date` when it
/// matches a date-only format, or when it matches a datetime format with a
/// zero time-of-day; any non-zero time-of-day makes it a `Timestamp`.
pub fn date_or_timestamp(value: &RawValue) -> Option<DateKind> {
  let RawValue::Text(s) = value else {
    return None;
  };
  let s = s.trim();

  for fmt in DATETIME_FORMATS {
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
      return Some(classify_time_of_day(dt.time()));
    }
  }
  for fmt in DATE_FORMATS {
    if chrono::NaiveDate::parse_from_str(s, fmt).is_ok() {
      return Some(DateKind::Date);
    }
  }
  if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
    return Some(classify_time_of_day(dt.time()));
  }
  None
}

fn classify_time_of_day(t: chrono::NaiveTime) -> DateKind {
  if t == chrono::NaiveTime::MIN {
    DateKind::Date
  } else {
    DateKind::Timestamp
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text(s: &str) -> RawValue {
    RawValue::text(s)
  }

  #[test]
  fn null_is_exact_string_match_not_case_insensitive() {
    assert!(is_null(&text("")));
    assert!(is_null(&text("NULL")));
    assert!(is_null(&text("N/A")));
    assert!(is_null(&RawValue::Null));
    assert!(!is_null(&text("0")));
    assert!(!is_null(&text("na")), "lowercase 'na' is not in the literal null set");
  }

  #[test]
  fn integer_rejects_a_leading_sign() {
    assert!(is_integer(&text("42")));
    assert!(is_integer(&text("3.00")), "trailing .0* is still an integer");
    assert!(!is_integer(&text("-7")), "leading sign is deliberately rejected");
    assert!(!is_integer(&text("4.2")));
    assert!(is_integer(&RawValue::Number { is_integral: true }));
    assert!(!is_integer(&RawValue::Number { is_integral: false }));
  }

  #[test]
  fn float_accepts_integers_and_decimals() {
    assert!(is_float(&text("42")));
    assert!(is_float(&text("4.2")));
    assert!(is_float(&text("-.5")));
    assert!(is_float(&text("1e10")));
    assert!(!is_float(&text("abc")));
  }

  #[test]
  fn boolean_is_exact_string_match() {
    assert!(is_boolean(&text("true")));
    assert!(is_boolean(&text("T")));
    assert!(is_boolean(&text("1")));
    assert!(is_boolean(&text("0")));
    assert!(is_boolean(&RawValue::Bool(false)));
    assert!(!is_boolean(&text("yes")), "'yes' is not in the literal boolean set");
    assert!(!is_boolean(&text("2")));
  }

  #[test]
  fn json_requires_valid_value() {
    assert!(is_json(&text("{\"a\": 1}")));
    assert!(is_json(&text("[1,2,3]")));
    assert!(!is_json(&text("{not json")));
    assert!(is_json(&RawValue::Composite));
  }

  #[test]
  fn json_rejects_bare_scalars_even_though_they_are_valid_json() {
    assert!(!is_json(&text("true")));
    assert!(!is_json(&text("false")));
    assert!(!is_json(&text("42")));
    assert!(!is_json(&text("\"a string\"")));
    assert!(!is_json(&text("null")));
  }

  #[test]
  fn date_vs_timestamp_depends_on_time_of_day() {
    assert_eq!(date_or_timestamp(&text("2020-01-01")), Some(DateKind::Date));
    assert_eq!(
      date_or_timestamp(&text("2020-01-01T00:00:00")),
      Some(DateKind::Date)
    );
    assert_eq!(
      date_or_timestamp(&text("2020-01-01T12:30:00")),
      Some(DateKind::Timestamp)
    );
    assert_eq!(date_or_timestamp(&text("not a date")), None);
  }
}
