//! High-level synthesizer API
//!
//! Wraps the oscillator, envelope and mixing primitives behind a sample-rate
//! aware `Synth`. The asset recipes are built on top of it.

use crate::envelope::Envelope;
use crate::error::{Result, check_duration, check_sample_rate};
use crate::export::Mixdown;
use crate::oscillators::{Pitch, Waveform, noise, sweep};
use rand::Rng;

/// A single note: frequency in Hz held for a duration in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Frequency in Hz
    pub frequency: f32,
    /// Duration in seconds
    pub duration: f32,
}

impl Note {
    pub const fn new(frequency: f32, duration: f32) -> Self {
        Self { frequency, duration }
    }
}

/// High-level synthesizer for generating music and sound effects
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let synth = Synth::new(SAMPLE_RATE);
///
/// // A plucked sine note
/// let tone = synth.tone(Waveform::Sine, 440.0, 0.2, Envelope::new(0.01, 0.05, 0.5, 0.05))?;
///
/// // A rising laser zap
/// let zap = synth.sweep(Waveform::Saw, Pitch::Linear { from: 300.0, to: 900.0 }, 0.1)?;
/// # Ok::<(), SynthError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Synth {
    sample_rate: u32,
}

impl Synth {
    /// Create a new synthesizer with the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Generate a simple tone with envelope
    ///
    /// # Arguments
    /// * `waveform` - Type of oscillator
    /// * `frequency` - Frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `envelope` - ADSR envelope to apply
    pub fn tone(&self, waveform: Waveform, frequency: f32, duration: f32, envelope: Envelope) -> Result<Vec<f32>> {
        let mut samples = self.sweep(waveform, Pitch::Fixed(frequency), duration)?;
        envelope.apply(&mut samples, self.sample_rate);
        Ok(samples)
    }

    /// Generate an unshaped oscillator following a pitch trajectory
    pub fn sweep(&self, waveform: Waveform, pitch: Pitch, duration: f32) -> Result<Vec<f32>> {
        sweep(waveform, pitch, duration, self.sample_rate)
    }

    /// Generate unshaped white noise
    pub fn noise_burst<R: Rng + ?Sized>(&self, duration: f32, rng: &mut R) -> Result<Vec<f32>> {
        noise(duration, self.sample_rate, rng)
    }

    /// Create a silent mix bus lasting `duration` seconds
    pub fn mixdown(&self, duration: f32) -> Result<Mixdown> {
        check_duration(duration)?;
        check_sample_rate(self.sample_rate)?;
        Ok(Mixdown::new(duration, self.sample_rate))
    }

    /// Render notes back to back onto a mix bus
    ///
    /// Each note is rendered by `render` and placed at the running offset,
    /// which advances by the rendered length. Notes that would overrun the
    /// bus are dropped. Returns how many notes were placed.
    pub fn sequence<'a, I, F>(&self, bus: &mut Mixdown, notes: I, weight: f32, mut render: F) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Note>,
        F: FnMut(&Note) -> Result<Vec<f32>>,
    {
        let mut offset = 0usize;
        let mut placed = 0;

        for note in notes {
            let samples = render(note)?;
            if bus.place_at(&samples, weight, offset)? {
                placed += 1;
            }
            offset += samples.len();
        }

        Ok(placed)
    }
}
