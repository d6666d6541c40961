//! Procedural audio for the Halloween shooter
//!
//! Synthesizes the game's looping background track and its short sound
//! effects from oscillators, envelopes and a small mixer. Every asset is a
//! pure function of hard-coded parameters (the explosion's noise layer being
//! the one random ingredient).
//!
//! # Example
//! ```no_run
//! use proc_audio::*;
//!
//! let synth = Synth::new(SAMPLE_RATE);
//!
//! // Render one named asset
//! let shoot = Asset::Shoot.generate(&synth)?;
//! assert_eq!(shoot.len(), sample_count(0.15, SAMPLE_RATE));
//!
//! // Or build something custom from the primitives
//! let tone = synth.tone(Waveform::Sine, 440.0, 0.5, Envelope::default())?;
//! let pcm = to_pcm_i16(&tone);
//!
//! // Export to WAV (requires wav-export feature)
//! #[cfg(feature = "wav-export")]
//! write_wav(&pcm, SAMPLE_RATE, std::path::Path::new("tone.wav"))?;
//! # Ok::<(), proc_audio::SynthError>(())
//! ```

mod assets;
mod envelope;
mod error;
mod export;
mod oscillators;
mod recipes;
mod synth;

/// Output sample rate for every generated asset (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

// Errors
pub use error::{Result, SynthError};

// Oscillators
pub use oscillators::{Pitch, Waveform, noise, oscillator, sample_count, sweep};

// Envelopes
pub use envelope::{Envelope, apply_exp_decay, exp_decay};

// Mixing, normalization and export
pub use export::{Mixdown, PCM_SCALE, mix, normalize_to, peak, to_pcm_i16};

#[cfg(feature = "wav-export")]
pub use export::{write_wav, write_wav_f32};

// Synth API
pub use synth::{Note, Synth};

// Recipe ceilings and the asset registry
pub use assets::Asset;
pub use recipes::{
    BGM_CEILING, DAMAGE_CEILING, EXPLOSION_CEILING, GAMEOVER_CEILING, POWERUP_CEILING, SHOOT_CEILING,
};

/// Audio sample buffer (f32 samples, -1.0 to 1.0 range)
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Audio samples in -1.0 to 1.0 range
    pub samples: Vec<f32>,
}

impl AudioBuffer {
    /// Create a buffer from samples
    pub fn from_samples(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self { sample_rate, samples }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Peak absolute amplitude
    pub fn peak(&self) -> f32 {
        peak(&self.samples)
    }

    /// Quantize to 16-bit PCM
    pub fn to_pcm_i16(&self) -> Vec<i16> {
        to_pcm_i16(&self.samples)
    }

    /// Write the buffer as a 16-bit mono WAV file
    #[cfg(feature = "wav-export")]
    pub fn write_wav(&self, path: &std::path::Path) -> Result<()> {
        write_wav_f32(&self.samples, self.sample_rate, path)
    }
}
