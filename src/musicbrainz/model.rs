//! Typed shape of the `/discid/<id>?inc=recordings+artist-credits` response.
//!
//! Only the fields needed to list a disc's tracks are modeled. Structural
//! fields are optional here so that their absence turns into a
//! [`MetadataError::Malformed`] instead of a generic parse error.

use serde::Deserialize;

use crate::plan::TrackDescriptor;

use super::error::MetadataError;

#[derive(Debug, Clone, Deserialize)]
pub struct DiscIdResponse {
    pub releases: Option<Vec<Release>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub media: Option<Vec<Medium>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Medium {
    pub discs: Option<Vec<Disc>>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Disc {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub position: Option<u32>,
    pub title: Option<String>,
    pub recording: Option<Recording>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistCredit {
    pub name: String,
}

impl Track {
    fn to_descriptor(&self) -> TrackDescriptor {
        let artists = self
            .recording
            .as_ref()
            .map(|rec| rec.artist_credit.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default();
        TrackDescriptor::new(self.position.unwrap_or(0), self.title.clone(), artists)
    }
}

/// Track list of the first medium that carries `disc_id`.
///
/// Releases and media are visited in response order.
pub fn tracks_for_disc(
    response: &DiscIdResponse,
    disc_id: &str,
) -> Result<Vec<TrackDescriptor>, MetadataError> {
    let releases = response
        .releases
        .as_ref()
        .ok_or(MetadataError::Malformed("releases"))?;

    for (i, release) in releases.iter().enumerate() {
        let media = release
            .media
            .as_ref()
            .ok_or(MetadataError::Malformed("media"))?;
        for (j, medium) in media.iter().enumerate() {
            let discs = medium
                .discs
                .as_ref()
                .ok_or(MetadataError::Malformed("discs"))?;
            if let Some(k) = discs.iter().position(|d| d.id == disc_id) {
                tracing::debug!(release = i, medium = j, disc = k, disc_id, "disc found");
                let tracks: Vec<TrackDescriptor> =
                    medium.tracks.iter().map(Track::to_descriptor).collect();
                for track in &tracks {
                    tracing::trace!(
                        number = track.number,
                        title = %track.title,
                        artists = %track.artist_display(),
                        "track"
                    );
                }
                tracing::debug!(count = tracks.len(), "tracks found");
                return Ok(tracks);
            }
        }
    }

    Err(MetadataError::DiscNotFound(disc_id.to_string()))
}
