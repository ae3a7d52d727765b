use hound::WavReader;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavSummary {
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
}

pub fn wav_summary(path: &Path) -> anyhow::Result<WavSummary> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let samples = reader.len();
    let frames = samples as f64 / spec.channels as f64;
    Ok(WavSummary {
        duration_seconds: frames / spec.sample_rate as f64,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}
