use crate::schema::Schema;

/// Combines per-file schemas into one, joining each shared column and
/// carrying over columns unique to any single file.
///
/// Commutative and associative because `LogicalType::join` is: the result
/// does not depend on input order or on how the schemas are grouped before
/// being folded together.
pub fn negotiate<I>(schemas: I) -> Schema
where
  I: IntoIterator<Item = Schema>,
{
  let mut result = Schema::new();
  for schema in schemas {
    for (name, ty) in schema.iter() {
      result.join_column(name, ty);
    }
  }
  result
}
