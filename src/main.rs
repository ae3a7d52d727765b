mod args;
mod audio;
mod error;
mod runner;
mod tts;
mod utils;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::tts::IndexTts;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Generating recap audio from {}", args.text_file.display());

    let mut stdout = std::io::stdout().lock();
    runner::run(&args, |cfg| Ok(IndexTts::new(cfg)), &mut stdout)
}
