use thiserror::Error;

/// Why a disc's track list could not be obtained.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("musicbrainz request failed (transport) url={url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// `detail` is empty or `": <start of response body>"`.
    #[error("musicbrainz request failed (status {code}) url={url}{detail}")]
    Status {
        code: u16,
        url: String,
        detail: String,
    },

    #[error("musicbrainz response read failed: {0}")]
    Read(#[source] Box<ureq::Error>),

    #[error("musicbrainz response parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed musicbrainz response: missing `{0}`")]
    Malformed(&'static str),

    #[error("disc id {0} not found in musicbrainz response")]
    DiscNotFound(String),
}
