//! Amplitude envelopes
//!
//! Provides Attack-Decay-Sustain-Release envelope shaping for melodic notes
//! and the exponential decay used by the one-shot sound effects.

/// ADSR Envelope parameters
///
/// Controls the amplitude shape of a sound over time:
/// - Attack: Time to ramp from silence to peak amplitude
/// - Decay: Time to fall from peak to sustain level
/// - Sustain: Amplitude level held during the sustain phase (0.0 to 1.0)
/// - Release: Time to fade from sustain to silence, ending on the last sample
///
/// All times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Attack time in seconds
    pub attack: f32,
    /// Decay time in seconds
    pub decay: f32,
    /// Sustain level (0.0 to 1.0)
    pub sustain: f32,
    /// Release time in seconds
    pub release: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.1,
        }
    }
}

/// Stage lengths in samples; always sum to the buffer length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stages {
    attack: usize,
    decay: usize,
    sustain: usize,
    release: usize,
}

impl Envelope {
    /// Create a new envelope with custom parameters
    ///
    /// Negative or non-finite stage times are treated as zero.
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack,
            decay,
            sustain: sustain.clamp(0.0, 1.0),
            release,
        }
    }

    /// Split `total` samples into the four stages
    ///
    /// When the stages do not fit, sustain shrinks first, then release,
    /// then decay, then attack, so the stages always partition the buffer.
    fn stages(&self, total: usize, sample_rate: u32) -> Stages {
        let to_samples = |secs: f32| {
            if secs.is_finite() && secs > 0.0 {
                (secs * sample_rate as f32) as usize
            } else {
                0
            }
        };

        let attack = to_samples(self.attack).min(total);
        let decay = to_samples(self.decay).min(total - attack);
        let release = to_samples(self.release).min(total - attack - decay);
        let sustain = total - attack - decay - release;

        Stages {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Generate the multiplier curve for a buffer of `len` samples
    ///
    /// The first sample is 0 whenever the attack spans at least one sample,
    /// and the last sample is 0 whenever the release does.
    pub fn curve(&self, len: usize, sample_rate: u32) -> Vec<f32> {
        let Stages {
            attack,
            decay,
            sustain,
            release,
        } = self.stages(len, sample_rate);
        let level = self.sustain.clamp(0.0, 1.0);

        let mut curve = Vec::with_capacity(len);

        // Attack: ramp up from 0 to 1
        curve.extend((0..attack).map(|i| i as f32 / attack as f32));
        // Decay: ramp down from 1 to sustain
        curve.extend((0..decay).map(|i| 1.0 - (1.0 - level) * i as f32 / decay as f32));
        // Sustain: hold
        curve.extend(std::iter::repeat(level).take(sustain));
        // Release: ramp down from sustain, landing on 0
        curve.extend((0..release).map(|i| level * (1.0 - (i + 1) as f32 / release as f32)));

        curve
    }

    /// Apply envelope to samples in place
    ///
    /// # Arguments
    /// * `samples` - Audio samples to shape
    /// * `sample_rate` - Sample rate in Hz
    pub fn apply(&self, samples: &mut [f32], sample_rate: u32) {
        let curve = self.curve(samples.len(), sample_rate);
        for (sample, gain) in samples.iter_mut().zip(curve) {
            *sample *= gain;
        }
    }
}

/// Exponential decay curve `exp(-rate * i / len)`
///
/// Equivalent to `exp(-rate * t / d)` for a sound of duration `d`
/// sampled at `t = i / sample_rate`.
pub fn exp_decay(len: usize, rate: f32) -> Vec<f32> {
    let rate = rate as f64;
    (0..len)
        .map(|i| (-rate * i as f64 / len as f64).exp() as f32)
        .collect()
}

/// Multiply samples in place by [`exp_decay`]
pub fn apply_exp_decay(samples: &mut [f32], rate: f32) {
    let curve = exp_decay(samples.len(), rate);
    for (sample, gain) in samples.iter_mut().zip(curve) {
        *sample *= gain;
    }
}
