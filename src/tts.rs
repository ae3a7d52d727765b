use anyhow::Context;
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// Interpreter used to host the IndexTTS package.
pub const PYTHON: &str = "python3";

/// Reads one JSON request from stdin and runs a single IndexTTS inference.
/// The import stays inside the driver so the binary never needs the package
/// until text has been validated.
const INDEXTTS_DRIVER: &str = r#"
import json
import sys

req = json.load(sys.stdin)

from indextts.infer import IndexTTS

tts = IndexTTS(model_dir=req["model_dir"], cfg_path=req["cfg_path"])
tts.infer(voice=req["voice"], text=req["text"], output_path=req["output_path"])
"#;

/// What the external engine is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub model_dir: PathBuf,
    pub cfg_path: PathBuf,
}

/// A text-to-speech engine that writes a playable audio file to `output`.
pub trait Synthesizer {
    fn infer(&self, voice: &Path, text: &str, output: &Path) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct InferRequest<'a> {
    model_dir: &'a Path,
    cfg_path: &'a Path,
    voice: &'a Path,
    text: &'a str,
    output_path: &'a Path,
}

/// IndexTTS / IndexTTS2 running in a local Python environment.
#[derive(Debug)]
pub struct IndexTts {
    python: String,
    config: EngineConfig,
}

impl IndexTts {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            python: PYTHON.to_string(),
            config: config.clone(),
        }
    }

    fn request_json(&self, voice: &Path, text: &str, output: &Path) -> anyhow::Result<Vec<u8>> {
        let request = InferRequest {
            model_dir: &self.config.model_dir,
            cfg_path: &self.config.cfg_path,
            voice,
            text,
            output_path: output,
        };
        serde_json::to_vec(&request).context("Failed to encode IndexTTS request")
    }
}

impl Synthesizer for IndexTts {
    fn infer(&self, voice: &Path, text: &str, output: &Path) -> anyhow::Result<()> {
        let payload = self.request_json(voice, text, output)?;
        info!(
            "Calling IndexTTS for output file {} (model dir {})",
            output.display(),
            self.config.model_dir.display()
        );
        debug!("IndexTTS request: {} bytes", payload.len());

        // stdout is reserved for the confirmation line; engine chatter goes to stderr.
        let mut child = Command::new(&self.python)
            .args(["-c", INDEXTTS_DRIVER])
            .stdin(Stdio::piped())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to spawn {} for IndexTTS", self.python))?;

        let written = {
            let mut stdin = child
                .stdin
                .take()
                .context("Failed to open IndexTTS stdin")?;
            stdin.write_all(&payload)
        };
        match written {
            Ok(()) => {}
            // the engine stopped reading; its exit status says why
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("IndexTTS closed stdin early: {}", e);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e).with_context(|| {
                    format!("Failed to send IndexTTS request for {}", output.display())
                });
            }
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for IndexTTS on {}", output.display()))?;
        if !status.success() {
            error!("IndexTTS inference failed for {}", output.display());
            anyhow::bail!(
                "IndexTTS failed to generate {} ({})",
                output.display(),
                status
            );
        }

        info!("IndexTTS finished: {}", output.display());
        Ok(())
    }
}
