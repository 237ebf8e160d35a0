//! MusicBrainz disc lookup: typed response, track extraction and HTTP client.

mod client;
mod error;
mod model;

pub use client::{DiscLookup, MusicBrainzClient, parse_response};
pub use error::MetadataError;
pub use model::*;

#[cfg(test)]
mod tests;
