//! Concrete `Frame`/loader pairs for CSV and JSON, implementing the
//! scanning contract defined in `schemascan-core`.

mod csv_loader;
mod flatten;
mod json_loader;
mod tokenizer;

pub use csv_loader::{CsvFrame, CsvLoader};
pub use json_loader::{JsonFrame, JsonLoader};
