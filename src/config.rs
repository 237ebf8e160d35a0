//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive scanning,
//! metadata lookup, naming and script output, plus helpers to load it from disk.

mod load;
mod schema;

pub use schema::*;
