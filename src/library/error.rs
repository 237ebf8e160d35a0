use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("path '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),

    #[error("invalid folder pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read disc id from '{}': {source}", path.display())]
    DiscId {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("disc id file '{}' is empty", .0.display())]
    EmptyDiscId(PathBuf),
}
