use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::cli::Args;
use crate::emit;
use crate::library;
use crate::musicbrainz::MusicBrainzClient;
use crate::plan::PlanOptions;

mod logging;
mod pipeline;
mod settings;


pub fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbosity());

    let mut settings = settings::load_settings();
    args.apply_overrides(&mut settings);

    if args.print_config {
        print!("{}", settings.to_toml().context("failed to render settings")?);
        return Ok(());
    }

    let Some(root) = args.path.as_deref() else {
        bail!("--path is required");
    };

    let folders = library::discover(root, args.like.as_deref(), &settings.library)?;
    if folders.is_empty() {
        tracing::warn!(path = %root.display(), "no album folders with a disc id and audio files found");
    }

    let client = MusicBrainzClient::new(&settings.musicbrainz);
    let options = PlanOptions::from_settings(&settings);
    let plans = pipeline::collect_plans(&folders, &client, &options);

    let moves: usize = plans.iter().map(|p| p.moves()).sum();
    tracing::info!(units = plans.len(), moves, "plan ready");

    let script = emit::render_script(&plans, &settings.output);
    if args.stdout {
        print!("{script}");
        return Ok(());
    }

    let name = emit::script_file_name(
        &settings.output.tag,
        &emit::timestamp(&settings.output.timestamp_format),
    );
    let path = emit::write_script(root, &name, &script)
        .with_context(|| format!("failed to write {name} to '{}'", root.display()))?;
    println!("Script file created: {}", path.display());
    Ok(())
}
