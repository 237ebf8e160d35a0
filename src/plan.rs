//! Track-to-file matching and rename planning.
//!
//! Planning is pure: it works on in-memory track descriptors and file names
//! and never touches the filesystem.

mod builder;
mod matcher;
mod model;
mod sanitize;

pub use builder::{PlanOptions, build_plan};
pub use model::*;
pub use sanitize::sanitize;

#[cfg(test)]
mod tests;
