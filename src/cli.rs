use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Generate a script that renames ripped disc tracks, adding title and artist
/// names from MusicBrainz.
#[derive(Parser, Debug)]
#[command(name = "mbrename", version)]
pub struct Args {
    /// Directory containing the `discid` file and audio files, or their parent directory
    #[arg(long, required_unless_present = "print_config")]
    pub path: Option<PathBuf>,

    /// Log verbosity (0-3). Used alone it means 1
    #[arg(long, value_name = "LEVEL", num_args = 0..=1, default_missing_value = "1")]
    pub debug: Option<u8>,

    /// Only keep subfolders whose name matches this pattern (e.g. 'techno*CD2')
    #[arg(long, value_name = "GLOB")]
    pub like: Option<String>,

    /// Name tag for the output script (rename_<TAG>_<timestamp>.sh)
    #[arg(long, value_name = "TAG")]
    pub output: Option<String>,

    /// Print the script to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn verbosity(&self) -> u8 {
        self.debug.unwrap_or(0)
    }

    /// Command line flags win over config file and environment.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(tag) = &self.output {
            settings.output.tag = tag.clone();
        }
    }
}
