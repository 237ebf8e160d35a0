mod cli;
mod config;
mod emit;
mod library;
mod musicbrainz;
mod plan;
mod runtime;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
