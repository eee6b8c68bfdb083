use schemascan_core::RawValue;
use serde_json::Value;

/// How many levels of nested object to flatten before giving up and keeping
/// the rest as a single `json` value. Matches the default recursion limit a
/// hand-written recursive descent can take before it's more liability than
/// feature.
const MAX_FLATTEN_DEPTH: usize = 64;

/// Flattens a JSON object into column/value pairs, joining nested keys with
/// `_`. Arrays are never flattened — an array value is classified as `json`
/// regardless of what it contains.
pub fn flatten_record(value: Value) -> Vec<(String, RawValue)> {
  let mut out = Vec::new();
  match value {
    Value::Object(map) => flatten_object(map, String::new(), 0, &mut out),
    other => out.push((String::new(), to_raw_value(other))),
  }
  out
}

fn flatten_object(
  map: serde_json::Map<String, Value>,
  prefix: String,
  depth: usize,
  out: &mut Vec<(String, RawValue)>,
) {
  for (key, value) in map {
    let full_key = if prefix.is_empty() { key } else { format!("{prefix}_{key}") };
    match value {
      Value::Object(nested) if depth < MAX_FLATTEN_DEPTH => {
        flatten_object(nested, full_key, depth + 1, out);
      }
      other => out.push((full_key, to_raw_value(other))),
    }
  }
}

fn to_raw_value(value: Value) -> RawValue {
  match value {
    Value::Null => RawValue::Null,
    Value::Bool(b) => RawValue::Bool(b),
    Value::Number(n) => RawValue::Number {
      is_integral: n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0),
    },
    Value::String(s) => RawValue::text(s),
    Value::Array(_) | Value::Object(_) => RawValue::Composite,
  }
}
