//! Album folder discovery on disk.

mod error;
mod model;
mod pattern;
mod scan;

pub use error::LibraryError;
pub use model::AlbumFolder;
pub use scan::discover;
