//! Mixing, normalization and export
//!
//! Provides the fixed-length mix bus used by the recipes, peak
//! normalization, PCM conversion and WAV export.

use crate::error::{Result, SynthError};
use crate::oscillators::sample_count;

#[cfg(feature = "wav-export")]
use std::path::Path;

/// Scale applied when quantizing to 16-bit PCM
pub const PCM_SCALE: f32 = i16::MAX as f32;

/// Fixed-length mix bus
///
/// Components are summed at sample offsets. A component that would run past
/// the end of the bus is dropped whole rather than truncated.
#[derive(Debug, Clone)]
pub struct Mixdown {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl Mixdown {
    /// Create a silent bus lasting `duration` seconds
    pub fn new(duration: f32, sample_rate: u32) -> Self {
        Self::with_len(sample_count(duration, sample_rate), sample_rate)
    }

    /// Create a silent bus of exactly `len` samples
    pub fn with_len(len: usize, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples: vec![0.0; len],
        }
    }

    /// Number of samples on the bus
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the bus has zero length
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Current contents of the bus
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sum `component * weight` starting `offset` seconds into the bus
    ///
    /// Returns `Ok(false)` when the component was dropped for overrunning
    /// the end of the bus.
    pub fn place(&mut self, component: &[f32], weight: f32, offset: f32) -> Result<bool> {
        if !offset.is_finite() || offset < 0.0 {
            return Err(SynthError::InvalidDuration(offset));
        }
        self.place_at(component, weight, sample_count(offset, self.sample_rate))
    }

    /// Sum `component * weight` starting at sample `offset`
    pub fn place_at(&mut self, component: &[f32], weight: f32, offset: usize) -> Result<bool> {
        if !weight.is_finite() {
            return Err(SynthError::InvalidWeight(weight));
        }

        let end = match offset.checked_add(component.len()) {
            Some(end) if end <= self.samples.len() => end,
            _ => {
                tracing::debug!(
                    offset,
                    len = component.len(),
                    bus_len = self.samples.len(),
                    "component overruns mix bus, dropped"
                );
                return Ok(false);
            }
        };

        for (out, &sample) in self.samples[offset..end].iter_mut().zip(component) {
            *out += sample * weight;
        }
        Ok(true)
    }

    /// Sum `component * weight` from the start of the bus
    pub fn add(&mut self, component: &[f32], weight: f32) -> Result<bool> {
        self.place_at(component, weight, 0)
    }

    /// Multiply every sample by `gain(t)`, with `t` in seconds
    pub fn modulate(&mut self, gain: impl Fn(f64) -> f64) {
        let sr = self.sample_rate as f64;
        for (i, sample) in self.samples.iter_mut().enumerate() {
            *sample = (*sample as f64 * gain(i as f64 / sr)) as f32;
        }
    }

    /// Normalize the bus to `ceiling` and hand back the samples
    pub fn finish(mut self, ceiling: f32) -> Vec<f32> {
        normalize_to(&mut self.samples, ceiling);
        self.samples
    }
}

/// Mix multiple audio signals together
///
/// Each signal is multiplied by its volume before mixing; all signals start
/// at sample 0 and the result is as long as the longest one.
/// The result is NOT normalized - use `normalize_to()` if needed.
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let a = vec![1.0f32, 1.0, 1.0];
/// let b = vec![0.5f32, 0.5];
/// let mixed = mix(&[(&a, 0.5), (&b, 0.5)]);
/// assert_eq!(mixed, vec![0.75, 0.75, 0.5]);
/// ```
pub fn mix(signals: &[(&[f32], f32)]) -> Vec<f32> {
    let max_len = signals.iter().map(|(s, _)| s.len()).max().unwrap_or(0);

    let mut result = vec![0.0f32; max_len];

    for (samples, volume) in signals {
        for (out, &sample) in result.iter_mut().zip(samples.iter()) {
            *out += sample * volume;
        }
    }

    result
}

/// Peak absolute amplitude (0.0 for an empty buffer)
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
}

/// Normalize audio to a target peak amplitude
///
/// Divides by the current peak and scales by `ceiling`, so the loudest
/// sample lands exactly on `ceiling`. A silent buffer is left untouched.
///
/// # Arguments
/// * `samples` - Audio samples to normalize (modified in-place)
/// * `ceiling` - Target peak amplitude (e.g., 0.7 for headroom)
pub fn normalize_to(samples: &mut [f32], ceiling: f32) {
    let max_amplitude = peak(samples);

    if max_amplitude == 0.0 {
        if !samples.is_empty() {
            tracing::warn!(len = samples.len(), "normalizing silent buffer, left unchanged");
        }
        return;
    }

    for sample in samples.iter_mut() {
        *sample = *sample / max_amplitude * ceiling;
    }
}

/// Convert f32 samples (-1.0 to 1.0) to PCM i16
///
/// Each sample maps to `round(sample * 32767)`; out-of-range input is
/// clamped first.
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * PCM_SCALE).round() as i16)
        .collect()
}

/// Write PCM i16 samples to a mono 16-bit WAV file
///
/// Requires the `wav-export` feature.
///
/// # Arguments
/// * `samples` - PCM i16 samples
/// * `sample_rate` - Sample rate in Hz
/// * `path` - Output file path
#[cfg(feature = "wav-export")]
pub fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> Result<()> {
    use hound::{SampleFormat, WavSpec, WavWriter};

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}

/// Write f32 samples directly to WAV (convenience function)
///
/// Converts to i16 PCM and writes to file.
///
/// Requires the `wav-export` feature.
#[cfg(feature = "wav-export")]
pub fn write_wav_f32(samples: &[f32], sample_rate: u32, path: &Path) -> Result<()> {
    let pcm = to_pcm_i16(samples);
    write_wav(&pcm, sample_rate, path)
}
