//! Worker-pool fan-out over a set of files, producing one schema per file
//! plus an optional negotiated merge.

mod config;
mod processor;

pub use config::{DispatchConfig, FileKind};
pub use processor::{run, FileOutcome};
