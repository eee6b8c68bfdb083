//! Type lattice, value classifiers, scanner and negotiator: the parts of
//! schema inference that never touch a file directly.

pub mod classify;
mod frame;
mod lattice;
mod negotiator;
mod scanner;
mod schema;
mod value;

pub use frame::Frame;
pub use lattice::{join, refine, LogicalType};
pub use negotiator::negotiate;
pub use scanner::scan;
pub use schema::Schema;
pub use value::RawValue;
