use clap::Parser;
use std::path::PathBuf;

use crate::tts::EngineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recap-tts",
    version,
    about = "Generate the recap audio file with a local IndexTTS install"
)]
pub struct Args {
    /// Path to the recap text file
    #[clap(long, default_value = "src/data/recapText.zh-CN.txt")]
    pub text_file: PathBuf,

    /// Output wav path to be served by the app
    #[clap(long, default_value = "public/recap.wav")]
    pub out: PathBuf,

    /// Reference voice wav file path (speaker prompt)
    #[clap(long)]
    pub voice: PathBuf,

    /// IndexTTS checkpoints directory
    #[clap(long)]
    pub model_dir: PathBuf,

    /// IndexTTS config yaml path
    #[clap(long)]
    pub cfg_path: PathBuf,
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            model_dir: self.model_dir.clone(),
            cfg_path: self.cfg_path.clone(),
        }
    }
}
