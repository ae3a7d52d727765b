use std::io::Write;
use tracing::{debug, info};

use crate::args::Args;
use crate::audio::wav_summary;
use crate::tts::{EngineConfig, Synthesizer};
use crate::utils::{ensure_parent_dir, load_recap_text};

/// Runs the whole pipeline once.
///
/// `acquire` is only called after the text has been read and validated, so input
/// problems are reported without the engine being present. The confirmation line
/// is written to `stdout`.
pub fn run<S, F, W>(args: &Args, acquire: F, stdout: &mut W) -> anyhow::Result<()>
where
    S: Synthesizer,
    F: FnOnce(&EngineConfig) -> anyhow::Result<S>,
    W: Write,
{
    ensure_parent_dir(&args.out)?;

    let text = load_recap_text(&args.text_file)?;
    info!(
        "Loaded recap text from {} ({} chars)",
        args.text_file.display(),
        text.chars().count()
    );

    let engine = acquire(&args.engine_config())?;
    info!("Synthesizing with voice {}", args.voice.display());
    engine.infer(&args.voice, &text, &args.out)?;

    match wav_summary(&args.out) {
        Ok(summary) => debug!(
            "Recap audio: {:.2} seconds, {} Hz, {} channel(s)",
            summary.duration_seconds, summary.sample_rate, summary.channels
        ),
        Err(e) => debug!("Could not inspect {} as WAV: {}", args.out.display(), e),
    }

    writeln!(stdout, "Generated: {}", args.out.display())?;
    Ok(())
}
