use tracing::{debug, info, trace, warn};

use crate::config::Settings;

use super::matcher::{TrackMatcher, number_width};
use super::model::{CollectionUnit, PlanEntry, TrackDescriptor, UnitPlan};
use super::sanitize::sanitize;

/// Knobs of the plan builder, resolved from [`Settings`].
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub min_number_width: usize,
    /// Recognized audio extensions, lower-case, without dot.
    pub extensions: Vec<String>,
}

impl PlanOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            min_number_width: settings.naming.min_number_width,
            extensions: settings.library.normalized_extensions(),
        }
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Canonical file name of `track`: `"<nn> <title> [<artists>].<ext>"`, sanitized.
pub fn target_name(track: &TrackDescriptor, width: usize, extension: &str) -> String {
    sanitize(&format!(
        "{} {} [{}].{}",
        track.padded_number(width),
        track.title,
        track.artist_display(),
        extension
    ))
}

/// Pair every track of `unit` with at most one file and decide its fate.
///
/// Entries follow the track order. Each pool entry is consumed by at most one
/// track; what is left over ends up in [`UnitPlan::residual`].
pub fn build_plan(unit: CollectionUnit, options: &PlanOptions) -> UnitPlan {
    let CollectionUnit {
        location,
        tracks,
        mut pool,
    } = unit;

    let width = number_width(&tracks, options.min_number_width);
    let matcher = TrackMatcher::new(width, options.extensions.clone());
    let file_count = pool.len();
    let track_count = tracks.len();

    info!(
        location = %location.display(),
        files = file_count,
        tracks = track_count,
        "planning unit"
    );
    if pool.is_empty() {
        debug!(location = %location.display(), "file pool is empty");
    }
    if file_count != track_count {
        warn!(
            location = %location.display(),
            files = file_count,
            tracks = track_count,
            "file count does not match track count"
        );
    }

    let mut entries = Vec::with_capacity(track_count);
    for track in tracks {
        let entry = match matcher.take(&track, &mut pool) {
            None => {
                debug!(
                    number = track.number,
                    title = %track.title,
                    prefix = %matcher.prefix(&track),
                    "no file for track"
                );
                PlanEntry::Unmatched { track }
            }
            Some(matched) => {
                let target = target_name(&track, width, &matched.extension);
                trace!(from = %matched.name, to = %target, "matched");
                if target == matched.name {
                    PlanEntry::Skip { path: matched.name }
                } else {
                    if pool.contains_available(&target) {
                        warn!(
                            location = %location.display(),
                            from = %matched.name,
                            to = %target,
                            "rename target already exists and would be overwritten"
                        );
                    }
                    PlanEntry::Move {
                        from: matched.name,
                        to: target,
                    }
                }
            }
        };
        entries.push(entry);
    }

    let residual = pool.into_remaining();
    if !residual.is_empty() {
        debug!(
            location = %location.display(),
            ?residual,
            "files left unconsumed"
        );
    }

    UnitPlan {
        location,
        file_count,
        track_count,
        number_width: width,
        entries,
        residual,
    }
}
