//! Audio oscillators and waveform generators
//!
//! Every oscillator is evaluated in closed form at `t = i / sample_rate`.
//! Phases are tracked in cycles as `f64` so a 16 second loop stays in tune;
//! the stored samples are `f32`.

use crate::error::{Result, check_duration, check_frequency, check_sample_rate};
use rand::Rng;
use std::f64::consts::TAU;

/// Waveform types for audio synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine wave - smooth, fundamental tone
    Sine,
    /// Square wave - hollow, retro sound (odd harmonics)
    Square,
    /// Sawtooth wave - bright, buzzy sound (all harmonics)
    Saw,
}

impl Waveform {
    /// Evaluate the waveform at `phase`, measured in cycles
    ///
    /// The square wave is the sign of the sine, so an exact zero crossing
    /// (phase 0) yields 0 rather than ±1.
    pub fn sample(self, phase: f64) -> f32 {
        let value = match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Square => {
                let s = (TAU * phase).sin();
                if s > 0.0 {
                    1.0
                } else if s < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Waveform::Saw => 2.0 * (phase - (0.5 + phase).floor()),
        };
        value as f32
    }
}

/// Pitch trajectory of a tone over its duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pitch {
    /// Constant frequency in Hz
    Fixed(f32),
    /// Frequency glides linearly from `from` to `to` over the duration
    Linear { from: f32, to: f32 },
    /// Frequency decays as `from * exp(-rate * t / duration)`
    Exponential { from: f32, rate: f32 },
}

impl Pitch {
    /// Same trajectory with every frequency multiplied by `n`
    ///
    /// Used for overtone layers that track a moving fundamental.
    pub fn harmonic(self, n: f32) -> Self {
        match self {
            Pitch::Fixed(f) => Pitch::Fixed(f * n),
            Pitch::Linear { from, to } => Pitch::Linear {
                from: from * n,
                to: to * n,
            },
            Pitch::Exponential { from, rate } => Pitch::Exponential { from: from * n, rate },
        }
    }

    /// Frequency in Hz at time `t` of a tone lasting `duration` seconds
    pub fn frequency_at(&self, t: f64, duration: f64) -> f64 {
        match *self {
            Pitch::Fixed(f) => f as f64,
            Pitch::Linear { from, to } => from as f64 + (to as f64 - from as f64) * t / duration,
            Pitch::Exponential { from, rate } => from as f64 * (-(rate as f64) * t / duration).exp(),
        }
    }

    /// Accumulated phase in cycles at time `t`
    ///
    /// This is the exact integral of [`Pitch::frequency_at`] from 0 to `t`.
    pub fn phase_at(&self, t: f64, duration: f64) -> f64 {
        match *self {
            Pitch::Fixed(f) => f as f64 * t,
            Pitch::Linear { from, to } => {
                let from = from as f64;
                from * t + (to as f64 - from) * t * t / (2.0 * duration)
            }
            Pitch::Exponential { from, rate } => {
                let rate = rate as f64;
                if rate == 0.0 {
                    from as f64 * t
                } else {
                    from as f64 * duration / rate * (1.0 - (-rate * t / duration).exp())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Pitch::Fixed(f) => check_frequency(f),
            Pitch::Linear { from, to } => {
                check_frequency(from)?;
                check_frequency(to)
            }
            Pitch::Exponential { from, rate } => {
                check_frequency(from)?;
                // A non-finite rate would turn the phase into NaN
                if rate.is_finite() {
                    Ok(())
                } else {
                    Err(crate::SynthError::InvalidFrequency(rate))
                }
            }
        }
    }
}

/// Number of samples in `duration` seconds: `floor(sample_rate * duration)`
pub fn sample_count(duration: f32, sample_rate: u32) -> usize {
    (duration * sample_rate as f32) as usize
}

/// Render `count` samples of `waveform` following `pitch`
///
/// Parameters are assumed valid; `duration` is the span the pitch
/// trajectory is defined over.
fn render(
    waveform: Waveform,
    pitch: Pitch,
    duration: f64,
    count: usize,
    sample_rate: u32,
) -> Vec<f32> {
    let sr = sample_rate as f64;
    (0..count)
        .map(|i| waveform.sample(pitch.phase_at(i as f64 / sr, duration)))
        .collect()
}

/// Generate oscillator samples for a given waveform
///
/// # Arguments
/// * `waveform` - The type of waveform to generate
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// `floor(sample_rate * duration)` samples in -1.0 to 1.0 range
pub fn oscillator(waveform: Waveform, frequency: f32, duration: f32, sample_rate: u32) -> Result<Vec<f32>> {
    sweep(waveform, Pitch::Fixed(frequency), duration, sample_rate)
}

/// Generate an oscillator whose frequency follows `pitch`
///
/// Great for laser shots, falling booms and other gliding effects.
pub fn sweep(waveform: Waveform, pitch: Pitch, duration: f32, sample_rate: u32) -> Result<Vec<f32>> {
    pitch.validate()?;
    check_duration(duration)?;
    check_sample_rate(sample_rate)?;

    let count = sample_count(duration, sample_rate);
    Ok(render(waveform, pitch, duration as f64, count, sample_rate))
}

/// Generate white noise samples
///
/// Uniformly distributed in -1.0 to 1.0. Pass `rand::rng()` for fresh noise
/// on every call, or a seeded generator for reproducible output.
pub fn noise<R: Rng + ?Sized>(duration: f32, sample_rate: u32, rng: &mut R) -> Result<Vec<f32>> {
    check_duration(duration)?;
    check_sample_rate(sample_rate)?;

    let count = sample_count(duration, sample_rate);
    Ok((0..count).map(|_| rng.random_range(-1.0f32..=1.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynthError;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const TEST_SAMPLE_RATE: u32 = 44100;

    #[test]
    fn test_sine_wave() {
        let samples = oscillator(Waveform::Sine, 440.0, 0.01, TEST_SAMPLE_RATE).unwrap();
        assert!(!samples.is_empty());
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_square_wave() {
        let samples = oscillator(Waveform::Square, 440.0, 0.01, TEST_SAMPLE_RATE).unwrap();
        assert!(!samples.is_empty());
        // Exact zero crossing at t = 0
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|&s| s == -1.0 || s == 0.0 || s == 1.0));
        assert!(samples.iter().any(|&s| s == 1.0));
        assert!(samples.iter().any(|&s| s == -1.0));
    }

    #[test]
    fn test_saw_wave() {
        let samples = oscillator(Waveform::Saw, 440.0, 0.01, TEST_SAMPLE_RATE).unwrap();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_saw_ramp_shape() {
        // 100 samples per period: rises by 0.02 per sample, wraps at half period
        let samples = oscillator(Waveform::Saw, 441.0, 0.01, TEST_SAMPLE_RATE).unwrap();
        assert!((samples[0] - 0.0).abs() < 1e-6);
        assert!((samples[25] - 0.5).abs() < 1e-5);
        assert!((samples[49] - 0.98).abs() < 1e-5);
        assert!((samples[51] + 0.98).abs() < 1e-5);
    }

    #[test]
    fn test_sample_count() {
        for &duration in &[0.15f32, 0.2, 0.3, 0.4, 0.5, 1.5, 2.0] {
            let samples = oscillator(Waveform::Sine, 440.0, duration, TEST_SAMPLE_RATE).unwrap();
            let expected = (duration * TEST_SAMPLE_RATE as f32) as usize;
            assert_eq!(samples.len(), expected);
            assert_eq!(samples.len(), sample_count(duration, TEST_SAMPLE_RATE));
        }
        assert_eq!(sample_count(0.3, TEST_SAMPLE_RATE), 13230);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            oscillator(Waveform::Sine, 0.0, 0.1, TEST_SAMPLE_RATE),
            Err(SynthError::InvalidFrequency(_))
        ));
        assert!(matches!(
            oscillator(Waveform::Saw, 440.0, -0.1, TEST_SAMPLE_RATE),
            Err(SynthError::InvalidDuration(_))
        ));
        assert!(matches!(
            oscillator(Waveform::Square, 440.0, 0.1, 0),
            Err(SynthError::InvalidSampleRate(0))
        ));
        assert!(sweep(Waveform::Sine, Pitch::Linear { from: 600.0, to: -1.0 }, 0.1, TEST_SAMPLE_RATE).is_err());
    }

    #[test]
    fn test_linear_pitch_phase() {
        let pitch = Pitch::Linear { from: 600.0, to: 1400.0 };
        let d = 0.15;
        assert!((pitch.frequency_at(0.0, d) - 600.0).abs() < 1e-9);
        assert!((pitch.frequency_at(d, d) - 1400.0).abs() < 1e-9);
        // Average frequency over the sweep is 1000 Hz
        assert!((pitch.phase_at(d, d) - 1000.0 * d).abs() < 1e-9);
    }

    #[test]
    fn test_exponential_pitch_phase() {
        let pitch = Pitch::Exponential { from: 200.0, rate: 5.0 };
        let d = 0.3;
        assert!((pitch.frequency_at(0.0, d) - 200.0).abs() < 1e-9);
        assert!(pitch.frequency_at(d, d) < 200.0 * 0.01);

        // Numerically integrate the frequency and compare with the closed form
        let steps = 100_000;
        let dt = d / steps as f64;
        let integral: f64 = (0..steps)
            .map(|i| pitch.frequency_at((i as f64 + 0.5) * dt, d) * dt)
            .sum();
        assert!((pitch.phase_at(d, d) - integral).abs() < 1e-6);
    }

    #[test]
    fn test_harmonic_scales_frequencies() {
        let pitch = Pitch::Linear { from: 600.0, to: 1400.0 }.harmonic(2.0);
        assert_eq!(pitch, Pitch::Linear { from: 1200.0, to: 2800.0 });
        assert_eq!(Pitch::Fixed(100.0).harmonic(0.5), Pitch::Fixed(50.0));
    }

    #[test]
    fn test_sweep_bounded() {
        let samples = sweep(
            Waveform::Sine,
            Pitch::Exponential { from: 200.0, rate: 5.0 },
            0.3,
            TEST_SAMPLE_RATE,
        )
        .unwrap();
        assert_eq!(samples.len(), 13230);
        assert!(samples.iter().all(|&s| s.is_finite() && (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_white_noise() {
        let mut rng = Pcg64::seed_from_u64(12345);
        let samples = noise(0.1, TEST_SAMPLE_RATE, &mut rng).unwrap();
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_noise_reproducibility() {
        let samples1 = noise(0.01, TEST_SAMPLE_RATE, &mut Pcg64::seed_from_u64(42)).unwrap();
        let samples2 = noise(0.01, TEST_SAMPLE_RATE, &mut Pcg64::seed_from_u64(42)).unwrap();
        assert_eq!(samples1, samples2);
    }
}
