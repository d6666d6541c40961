//! Audio asset generator for the Halloween shooter
//!
//! Renders the background loop and every sound effect, writing each as a
//! 16-bit mono 44.1kHz WAV file.
//!
//! ## Audio Naming Convention
//!
//! Each asset is saved as `{id}.wav` (e.g., `bgm_halloween.wav`, `sfx_shoot.wav`)
//!
//! ## Usage
//!
//! ```bash
//! # Write into ./audio
//! cargo run -p gen-halloween-audio
//!
//! # Write somewhere else
//! cargo run -p gen-halloween-audio -- --output-dir client/public/audio
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use proc_audio::{Asset, SAMPLE_RATE, Synth};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gen-halloween-audio")]
#[command(about = "Generate the Halloween shooter's BGM loop and sound effects")]
#[command(version)]
struct Cli {
    /// Output directory for generated audio
    #[arg(short, long, default_value = "audio")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    generate_all(&cli.output_dir)
}

/// Generate every asset into `output_dir`
fn generate_all(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create audio output directory {}", output_dir.display()))?;

    tracing::info!("Generating {} audio assets -> {}", Asset::ALL.len(), output_dir.display());

    let synth = Synth::new(SAMPLE_RATE);

    for asset in Asset::ALL {
        let buffer = asset
            .generate(&synth)
            .with_context(|| format!("Failed to synthesize {}", asset.id()))?;
        let path = output_dir.join(asset.file_name());

        buffer
            .write_wav(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(
            "  -> {} ({} samples, {:.2}s) - {}",
            asset.file_name(),
            buffer.len(),
            buffer.duration(),
            asset.description()
        );
    }

    tracing::info!("Done! Generated {} audio assets", Asset::ALL.len());
    Ok(())
}
