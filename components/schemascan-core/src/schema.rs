use crate::lattice::{self, LogicalType};
use crate::value::RawValue;

/// A column schema, ordered by first appearance.
///
/// Backed by a `Vec` rather than a hash map: schemas stay small (column
/// counts, not row counts) and preserving first-seen order matters for
/// display, so a linear scan beats the bookkeeping of an order-preserving
/// map type.
#[derive(Debug, Clone, Default)]
pub struct Schema {
  entries: Vec<(String, LogicalType)>,
}

impl Schema {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn columns(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(name, _)| name.as_str())
  }

  pub fn get(&self, name: &str) -> Option<LogicalType> {
    self.position(name).map(|i| self.entries[i].1)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, LogicalType)> {
    self.entries.iter().map(|(name, ty)| (name.as_str(), *ty))
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.entries.iter().position(|(n, _)| n == name)
  }

  fn ensure_column(&mut self, name: &str) -> usize {
    match self.position(name) {
      Some(i) => i,
      None => {
        self.entries.push((name.to_string(), LogicalType::Unknown));
        self.entries.len() - 1
      }
    }
  }

  /// Applies one value to the named column's running type, adding the
  /// column (as `Unknown`) if this is its first appearance.
  pub fn refine_column(&mut self, name: &str, value: &RawValue) {
    let idx = self.ensure_column(name);
    let current = self.entries[idx].1;
    self.entries[idx].1 = lattice::refine(current, value);
  }

  /// Joins the named column's type against `ty`, adding the column if
  /// necessary. Used by the negotiator to combine schemas pairwise.
  pub fn join_column(&mut self, name: &str, ty: LogicalType) {
    let idx = self.ensure_column(name);
    let current = self.entries[idx].1;
    self.entries[idx].1 = lattice::join(current, ty);
  }
}

impl PartialEq for Schema {
  /// Schemas compare equal when they carry the same columns and types,
  /// independent of discovery order: order is a display property, not part
  /// of the schema's value.
  fn eq(&self, other: &Self) -> bool {
    self.entries.len() == other.entries.len()
      && self.entries.iter().all(|(name, ty)| other.get(name) == Some(*ty))
  }
}

impl Eq for Schema {}

impl FromIterator<(String, LogicalType)> for Schema {
  fn from_iter<T: IntoIterator<Item = (String, LogicalType)>>(iter: T) -> Self {
    let mut schema = Schema::new();
    for (name, ty) in iter {
      schema.join_column(&name, ty);
    }
    schema
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn equality_ignores_discovery_order() {
    let a: Schema = [("a".to_string(), LogicalType::Integer), ("b".to_string(), LogicalType::String)]
      .into_iter()
      .collect();
    let b: Schema = [("b".to_string(), LogicalType::String), ("a".to_string(), LogicalType::Integer)]
      .into_iter()
      .collect();
    assert_eq!(a, b);
  }

  #[test]
  fn refine_column_adds_unknown_column_on_first_sight() {
    let mut schema = Schema::new();
    schema.refine_column("age", &RawValue::text("42"));
    assert_eq!(schema.get("age"), Some(LogicalType::Integer));
    assert_eq!(schema.len(), 1);
  }
}
