use std::path::PathBuf;

/// An album folder found on disk: where it is, which disc it holds, and its audio files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumFolder {
    pub path: PathBuf,
    pub disc_id: String,
    /// File names (not paths), sorted.
    pub audio_files: Vec<String>,
}
