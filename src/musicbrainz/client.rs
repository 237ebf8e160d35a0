use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::MusicBrainzSettings;

use super::error::MetadataError;
use super::model::DiscIdResponse;

const INCLUDES: &str = "recordings artist-credits";
const MAX_BODY_BYTES: u64 = 5_000_000;
const SNIPPET_CHARS: usize = 300;

/// Source of disc metadata keyed by disc identifier.
pub trait DiscLookup {
    fn lookup(&self, disc_id: &str) -> Result<DiscIdResponse, MetadataError>;
}

/// Blocking MusicBrainz web service client with a simple request spacing.
pub struct MusicBrainzClient {
    base_url: String,
    rate_limit: Duration,
    last_request: Mutex<Option<Instant>>,
    agent: ureq::Agent,
}

impl MusicBrainzClient {
    pub fn new(settings: &MusicBrainzSettings) -> Self {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        let config = ureq::Agent::config_builder()
            .user_agent(settings.user_agent.as_str())
            .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
            .http_status_as_error(false)
            .build();
        let agent = ureq::Agent::new_with_config(config);

        Self {
            base_url,
            rate_limit: Duration::from_millis(settings.rate_limit_ms),
            last_request: Mutex::new(None),
            agent,
        }
    }

    pub fn disc_url(&self, disc_id: &str) -> String {
        format!("{}/discid/{}", self.base_url, disc_id)
    }

    fn wait_rate_limit(&self) {
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.rate_limit {
                std::thread::sleep(self.rate_limit - elapsed);
            }
        }
        *last = Some(Instant::now());
    }
}

impl DiscLookup for MusicBrainzClient {
    fn lookup(&self, disc_id: &str) -> Result<DiscIdResponse, MetadataError> {
        self.wait_rate_limit();

        let url = self.disc_url(disc_id);
        tracing::debug!(%url, disc_id, "calling musicbrainz");

        let resp = self
            .agent
            .get(&url)
            .query("fmt", "json")
            .query("inc", INCLUDES)
            .call()
            .map_err(|err| MetadataError::Transport {
                url: url.clone(),
                source: Box::new(err),
            })?;

        let code = resp.status().as_u16();
        let body = resp
            .into_body()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_string()
            .map_err(|err| MetadataError::Read(Box::new(err)))?;

        if code >= 400 {
            return Err(MetadataError::Status {
                code,
                url,
                detail: status_detail(&body),
            });
        }

        parse_response(&body)
    }
}

pub fn parse_response(body: &str) -> Result<DiscIdResponse, MetadataError> {
    Ok(serde_json::from_str(body)?)
}

/// `": <first chars of body>"`, or empty when the body is blank.
fn status_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let snippet: String = trimmed.chars().take(SNIPPET_CHARS).collect();
    let suffix = if trimmed.chars().count() > SNIPPET_CHARS {
        "..."
    } else {
        ""
    };
    format!(": {snippet}{suffix}")
}
