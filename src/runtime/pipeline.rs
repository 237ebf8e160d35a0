use tracing::{info, warn};

use crate::library::AlbumFolder;
use crate::musicbrainz::{DiscLookup, MetadataError, tracks_for_disc};
use crate::plan::{CollectionUnit, FilePool, PlanOptions, UnitPlan, build_plan};

/// Fetch the tracks of `folder` and pair them with its file pool.
pub fn collection_unit(
    folder: &AlbumFolder,
    lookup: &dyn DiscLookup,
) -> Result<CollectionUnit, MetadataError> {
    let response = lookup.lookup(&folder.disc_id)?;
    let tracks = tracks_for_disc(&response, &folder.disc_id)?;
    Ok(CollectionUnit {
        location: folder.path.clone(),
        tracks,
        pool: FilePool::new(folder.audio_files.iter().cloned()),
    })
}

/// Plan every folder in order. A folder whose metadata cannot be obtained is
/// logged and left out; the others are unaffected.
pub fn collect_plans(
    folders: &[AlbumFolder],
    lookup: &dyn DiscLookup,
    options: &PlanOptions,
) -> Vec<UnitPlan> {
    folders
        .iter()
        .filter_map(|folder| {
            info!(
                folder = %folder.path.display(),
                files = folder.audio_files.len(),
                disc_id = %folder.disc_id,
                "looking up disc"
            );
            match collection_unit(folder, lookup) {
                Ok(unit) => {
                    let plan = build_plan(unit, options);
                    let unmatched = plan.unmatched().count();
                    if unmatched > 0 {
                        info!(folder = %folder.path.display(), unmatched, "tracks without a file");
                    }
                    Some(plan)
                }
                Err(err) => {
                    warn!(folder = %folder.path.display(), "{err}");
                    None
                }
            }
        })
        .collect()
}
