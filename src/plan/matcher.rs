use super::model::{FilePool, TrackDescriptor};

/// Positional-prefix rule pairing a track number with local file names.
///
/// A file matches track `n` when its name is `"<n padded to width> "`, then at
/// least one character, then `.` and one of the recognized extensions
/// (extension compared case-insensitively).
#[derive(Debug, Clone)]
pub struct TrackMatcher {
    width: usize,
    extensions: Vec<String>,
}

/// A pool entry consumed by a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub name: String,
    /// The file's extension, lower-cased.
    pub extension: String,
}

impl TrackMatcher {
    /// `extensions` are expected lower-case and without dot.
    pub fn new(width: usize, extensions: Vec<String>) -> Self {
        Self { width, extensions }
    }

    pub fn prefix(&self, track: &TrackDescriptor) -> String {
        format!("{} ", track.padded_number(self.width))
    }

    /// Lower-cased extension of `name` when it matches `track`.
    fn match_extension(&self, track: &TrackDescriptor, name: &str) -> Option<String> {
        let rest = name.strip_prefix(&self.prefix(track))?;
        let (stem, ext) = rest.rsplit_once('.')?;
        if stem.is_empty() || !self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    #[cfg(test)]
    pub fn matches(&self, track: &TrackDescriptor, name: &str) -> bool {
        self.match_extension(track, name).is_some()
    }

    /// Consume and return the first available pool entry matching `track`.
    ///
    /// Returns `None` and leaves the pool untouched when nothing matches.
    pub fn take(&self, track: &TrackDescriptor, pool: &mut FilePool) -> Option<MatchedFile> {
        let mut extension = None;
        let name = pool.take_first(|name| match self.match_extension(track, name) {
            Some(ext) => {
                extension = Some(ext);
                true
            }
            None => {
                tracing::trace!(file = name, prefix = %self.prefix(track), "no match");
                false
            }
        })?;
        Some(MatchedFile {
            name,
            extension: extension?,
        })
    }
}

/// Digits needed to print `n` in base 10.
pub fn digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Track number width for a unit: the configured minimum, widened for large discs.
pub fn number_width(tracks: &[TrackDescriptor], min_width: usize) -> usize {
    let widest = tracks.iter().map(|t| digits(t.number)).max().unwrap_or(1);
    widest.max(min_width)
}
