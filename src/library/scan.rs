use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;

use super::error::LibraryError;
use super::model::AlbumFolder;
use super::pattern::FolderPattern;

fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Direct children of `dir`, sorted by name, hidden ones dropped unless configured.
fn children(dir: &Path, settings: &LibrarySettings) -> impl Iterator<Item = DirEntry> {
    let include_hidden = settings.include_hidden;
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
}

/// Audio file names directly inside `dir`, sorted lexicographically.
pub fn list_audio_files(dir: &Path, settings: &LibrarySettings) -> Vec<String> {
    let extensions = settings.normalized_extensions();
    let mut files: Vec<String> = children(dir, settings)
        .filter(|e| e.file_type().is_file() && is_audio_file(e.path(), &extensions))
        .filter_map(|e| match e.file_name().to_str() {
            Some(name) => Some(name.to_string()),
            None => {
                warn!(path = %e.path().display(), "skipping file name that is not valid UTF-8");
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// First line of the disc identifier sidecar, trimmed.
pub fn read_disc_id(path: &Path) -> Result<String, LibraryError> {
    let contents = fs::read_to_string(path).map_err(|source| LibraryError::DiscId {
        path: path.to_path_buf(),
        source,
    })?;
    let disc_id = contents.lines().next().unwrap_or("").trim();
    if disc_id.is_empty() {
        return Err(LibraryError::EmptyDiscId(path.to_path_buf()));
    }
    Ok(disc_id.to_string())
}

/// Turn `dir` into an [`AlbumFolder`] if it has both a disc id and audio files.
pub fn inspect_folder(
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<Option<AlbumFolder>, LibraryError> {
    let discid_path = dir.join(&settings.discid_file);
    if !discid_path.is_file() {
        info!(folder = %dir.display(), "no disc id file, skipping");
        return Ok(None);
    }

    let audio_files = list_audio_files(dir, settings);
    if audio_files.is_empty() {
        info!(folder = %dir.display(), "no audio files, skipping");
        return Ok(None);
    }

    let disc_id = read_disc_id(&discid_path)?;
    debug!(
        folder = %dir.display(),
        files = audio_files.len(),
        disc_id = %disc_id,
        "album folder"
    );

    Ok(Some(AlbumFolder {
        path: dir.to_path_buf(),
        disc_id,
        audio_files,
    }))
}

/// Find album folders under `root`.
///
/// Immediate subfolders (optionally filtered by the `like` glob) are the
/// candidates; when there are none, `root` itself is. A candidate whose disc
/// id cannot be read is logged and left out.
pub fn discover(
    root: &Path,
    like: Option<&str>,
    settings: &LibrarySettings,
) -> Result<Vec<AlbumFolder>, LibraryError> {
    if !root.is_dir() {
        return Err(LibraryError::MissingRoot(root.to_path_buf()));
    }

    let pattern = like.map(FolderPattern::new).transpose()?;

    let mut candidates: Vec<PathBuf> = children(root, settings)
        .filter(|e| e.file_type().is_dir())
        .filter(|e| {
            pattern
                .as_ref()
                .is_none_or(|p| p.matches(&e.file_name().to_string_lossy()))
        })
        .map(DirEntry::into_path)
        .collect();

    if candidates.is_empty() {
        candidates.push(root.to_path_buf());
    }

    let mut folders = Vec::new();
    for dir in candidates {
        debug!(folder = %dir.display(), "checking folder");
        match inspect_folder(&dir, settings) {
            Ok(Some(folder)) => folders.push(folder),
            Ok(None) => {}
            Err(err) => warn!("{err}"),
        }
    }
    Ok(folders)
}
