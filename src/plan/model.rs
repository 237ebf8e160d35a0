//! Plan data types: track descriptors, collection units and plan entries.

use std::path::PathBuf;

/// Title used when the metadata carries none.
pub const UNKNOWN_TITLE: &str = "Unknown Track";

/// One track as described by the metadata service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub number: u32,
    pub title: String,
    /// Credited artists, in credit order.
    pub artists: Vec<String>,
}

impl TrackDescriptor {
    pub fn new(number: u32, title: Option<String>, artists: Vec<String>) -> Self {
        Self {
            number,
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artists,
        }
    }

    /// Artists joined for display: `"A, B"`.
    pub fn artist_display(&self) -> String {
        self.artists.join(", ")
    }

    /// Zero-padded track number.
    pub fn padded_number(&self, width: usize) -> String {
        format!("{:0width$}", self.number, width = width)
    }
}

/// One album folder ready for planning: its tracks and its file pool.
#[derive(Debug, Clone)]
pub struct CollectionUnit {
    pub location: PathBuf,
    pub tracks: Vec<TrackDescriptor>,
    pub pool: FilePool,
}

/// A single decision for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    Move { from: String, to: String },
    /// The matched file already carries its target name.
    Skip { path: String },
    Unmatched { track: TrackDescriptor },
}

impl PlanEntry {
    /// Source file name consumed by this entry, if any.
    #[cfg(test)]
    pub fn source(&self) -> Option<&str> {
        match self {
            PlanEntry::Move { from, .. } => Some(from),
            PlanEntry::Skip { path } => Some(path),
            PlanEntry::Unmatched { .. } => None,
        }
    }
}

/// The plan of one collection unit, plus the header facts the emitter prints.
#[derive(Debug, Clone)]
pub struct UnitPlan {
    pub location: PathBuf,
    pub file_count: usize,
    pub track_count: usize,
    /// Zero-padded width used for track numbers in this unit.
    pub number_width: usize,
    pub entries: Vec<PlanEntry>,
    /// Pool entries no track consumed, in pool order.
    pub residual: Vec<String>,
}

impl UnitPlan {
    pub fn count_mismatch(&self) -> bool {
        self.file_count != self.track_count
    }

    pub fn moves(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, PlanEntry::Move { .. }))
            .count()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &TrackDescriptor> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Unmatched { track } => Some(track),
            _ => None,
        })
    }
}

/// Candidate files of one unit, with an explicit available/consumed partition.
///
/// Entries are kept in a stable lexicographic snapshot; consuming one only
/// flips its flag, so scans never observe a sequence shrinking under them.
#[derive(Debug, Clone, Default)]
pub struct FilePool {
    entries: Vec<String>,
    consumed: Vec<bool>,
}

impl FilePool {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = files.into_iter().map(Into::into).collect();
        entries.sort();
        entries.dedup();
        let consumed = vec![false; entries.len()];
        Self { entries, consumed }
    }

    /// Number of entries the pool was populated with.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn available(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .zip(&self.consumed)
            .filter(|(_, used)| !**used)
            .map(|(name, _)| name.as_str())
    }

    pub fn contains_available(&self, name: &str) -> bool {
        self.available().any(|n| n == name)
    }

    /// Consume the first available entry accepted by `pred`.
    pub fn take_first<F>(&mut self, mut pred: F) -> Option<String>
    where
        F: FnMut(&str) -> bool,
    {
        let idx = self
            .entries
            .iter()
            .zip(&self.consumed)
            .position(|(name, used)| !*used && pred(name.as_str()))?;
        self.consumed[idx] = true;
        Some(self.entries[idx].clone())
    }

    /// Entries still available, in pool order.
    pub fn into_remaining(self) -> Vec<String> {
        self.entries
            .into_iter()
            .zip(self.consumed)
            .filter(|(_, used)| !*used)
            .map(|(name, _)| name)
            .collect()
    }
}
