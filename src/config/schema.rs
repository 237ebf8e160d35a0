use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mbrename/config.toml` or `~/.config/mbrename/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `MBRENAME__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub musicbrainz: MusicBrainzSettings,
    pub naming: NamingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Name of the sidecar file holding the disc identifier of an album folder.
    pub discid_file: String,
    /// Whether to include hidden files (dotfiles) in the file pool.
    pub include_hidden: bool,
    /// Whether to follow symlinks while scanning.
    pub follow_links: bool,
}

impl LibrarySettings {
    /// Configured extensions, normalized to lower case without a leading dot.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["wav".into()],
            discid_file: "discid".to_string(),
            include_hidden: true,
            follow_links: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MusicBrainzSettings {
    /// Web service root, without trailing slash.
    pub base_url: String,
    /// User-Agent sent with every request. MusicBrainz rejects anonymous clients.
    pub user_agent: String,
    /// Minimum delay between two requests (milliseconds).
    pub rate_limit_ms: u64,
    /// Overall timeout of a single request (seconds).
    pub timeout_secs: u64,
}

impl Default for MusicBrainzSettings {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            user_agent: format!("mbrename/{}", env!("CARGO_PKG_VERSION")),
            rate_limit_ms: 1000,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Minimum zero-padded width of the leading track number.
    ///
    /// Discs with more tracks than this width can express are widened to the
    /// number of digits of their largest track number.
    pub min_number_width: usize,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            min_number_width: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Tag embedded in the script name: `rename_<tag>_<timestamp>.sh`.
    pub tag: String,
    /// First line of the generated script.
    pub interpreter: String,
    /// `chrono` format string for the timestamp in the script name.
    pub timestamp_format: String,
    /// Emit a comment for every track that matched no file.
    pub list_unmatched: bool,
    /// Emit a comment for every file left over after matching.
    pub list_residual: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            tag: "albums".to_string(),
            interpreter: "#!/bin/bash".to_string(),
            timestamp_format: "%Y%m%d%H%M%S".to_string(),
            list_unmatched: false,
            list_residual: false,
        }
    }
}
