//! The Halloween shooter's music and sound effects
//!
//! Each recipe is a fixed arrangement of oscillators, envelopes and the mix
//! bus, normalized to its own ceiling so nothing clips at 16 bits.

use crate::envelope::{Envelope, apply_exp_decay};
use crate::error::Result;
use crate::export::{mix, normalize_to};
use crate::oscillators::{Pitch, Waveform};
use crate::synth::{Note, Synth};
use rand::Rng;
use std::f64::consts::TAU;

/// Peak amplitude of the background loop
pub const BGM_CEILING: f32 = 0.7;
/// Peak amplitude of the shoot effect
pub const SHOOT_CEILING: f32 = 0.6;
/// Peak amplitude of the explosion effect
pub const EXPLOSION_CEILING: f32 = 0.7;
/// Peak amplitude of the damage effect
pub const DAMAGE_CEILING: f32 = 0.6;
/// Peak amplitude of the powerup effect
pub const POWERUP_CEILING: f32 = 0.6;
/// Peak amplitude of the game-over effect
pub const GAMEOVER_CEILING: f32 = 0.6;

pub(crate) const BGM_DURATION: f32 = 16.0;
pub(crate) const SHOOT_DURATION: f32 = 0.15;
pub(crate) const EXPLOSION_DURATION: f32 = 0.3;
pub(crate) const DAMAGE_DURATION: f32 = 0.2;
pub(crate) const POWERUP_DURATION: f32 = 0.4;
pub(crate) const GAMEOVER_DURATION: f32 = 1.5;

/// Minor-key melody (A minor / D minor feel)
const MELODY: [Note; 16] = [
    // A3, G3, F3, E3
    Note::new(220.0, 0.5),
    Note::new(196.0, 0.5),
    Note::new(175.0, 0.5),
    Note::new(165.0, 0.5),
    // A3, C4, B3, A3
    Note::new(220.0, 0.5),
    Note::new(262.0, 0.5),
    Note::new(247.0, 0.5),
    Note::new(220.0, 0.5),
    // F3, E3, D3, E3
    Note::new(175.0, 0.5),
    Note::new(165.0, 0.5),
    Note::new(147.0, 0.5),
    Note::new(165.0, 0.5),
    // F3, G3, A3, G3
    Note::new(175.0, 0.5),
    Note::new(196.0, 0.5),
    Note::new(220.0, 0.5),
    Note::new(196.0, 0.5),
];

/// Bass line: A1, F1, G1, A1 twice
const BASS: [Note; 8] = [
    Note::new(55.0, 2.0),
    Note::new(44.0, 2.0),
    Note::new(49.0, 2.0),
    Note::new(55.0, 2.0),
    Note::new(55.0, 2.0),
    Note::new(44.0, 2.0),
    Note::new(49.0, 2.0),
    Note::new(55.0, 2.0),
];

const MELODY_ENVELOPE: Envelope = Envelope {
    attack: 0.02,
    decay: 0.1,
    sustain: 0.5,
    release: 0.1,
};

const BASS_ENVELOPE: Envelope = Envelope {
    attack: 0.05,
    decay: 0.2,
    sustain: 0.6,
    release: 0.2,
};

/// Low drone: A2 root and E3 fifth with their mix weights
const DRONE: [(f32, f32); 2] = [(110.0, 0.1), (165.0, 0.05)];

const TREMOLO_HZ: f64 = 4.0;
const TREMOLO_DEPTH: f64 = 0.2;

/// Powerup arpeggio: C5, E5, G5, C6
const POWERUP_NOTES: [f32; 4] = [523.0, 659.0, 784.0, 1047.0];
const POWERUP_DECAY: f64 = 2.0;

/// Descending game-over phrase: G4, F4, E4, D4
const GAMEOVER_NOTES: [Note; 4] = [
    Note::new(392.0, 0.3),
    Note::new(349.0, 0.3),
    Note::new(330.0, 0.3),
    Note::new(294.0, 0.6),
];

impl Synth {
    /// Spooky 16 second background loop
    ///
    /// Sine melody over a sawtooth bass and a two-tone drone, with a 4 Hz
    /// tremolo over the whole mix.
    pub fn halloween_bgm(&self) -> Result<Vec<f32>> {
        let mut bus = self.mixdown(BGM_DURATION)?;

        let melody = self.sequence(&mut bus, MELODY.iter().chain(MELODY.iter()), 0.3, |note| {
            self.tone(Waveform::Sine, note.frequency, note.duration, MELODY_ENVELOPE)
        })?;

        // The second pass of the bass runs past the loop and is dropped
        let bass = self.sequence(&mut bus, BASS.iter().chain(BASS.iter()), 0.15, |note| {
            self.tone(Waveform::Saw, note.frequency, note.duration, BASS_ENVELOPE)
        })?;
        tracing::debug!(melody, bass, "placed background loop notes");

        for (frequency, weight) in DRONE {
            let drone = self.sweep(Waveform::Sine, Pitch::Fixed(frequency), BGM_DURATION)?;
            bus.add(&drone, weight)?;
        }

        bus.modulate(|t| 1.0 + TREMOLO_DEPTH * (TAU * TREMOLO_HZ * t).sin());

        Ok(bus.finish(BGM_CEILING))
    }

    /// Magic shot: rising chirp with sparkle harmonics
    pub fn shoot(&self) -> Result<Vec<f32>> {
        let pitch = Pitch::Linear {
            from: 600.0,
            to: 1400.0,
        };

        let fundamental = self.sweep(Waveform::Sine, pitch, SHOOT_DURATION)?;
        let second = self.sweep(Waveform::Sine, pitch.harmonic(2.0), SHOOT_DURATION)?;
        let third = self.sweep(Waveform::Sine, pitch.harmonic(3.0), SHOOT_DURATION)?;

        let mut result = mix(&[(&fundamental, 0.5), (&second, 0.2), (&third, 0.1)]);
        apply_exp_decay(&mut result, 3.0);

        normalize_to(&mut result, SHOOT_CEILING);
        Ok(result)
    }

    /// Explosion: noise burst over a falling boom
    ///
    /// Draws fresh noise on every call.
    pub fn explosion(&self) -> Result<Vec<f32>> {
        self.explosion_with_rng(&mut rand::rng())
    }

    /// Explosion with the noise layer drawn from `rng`
    pub fn explosion_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f32>> {
        let crackle = self.noise_burst(EXPLOSION_DURATION, rng)?;
        let boom = self.sweep(
            Waveform::Sine,
            Pitch::Exponential {
                from: 200.0,
                rate: 5.0,
            },
            EXPLOSION_DURATION,
        )?;

        let mut result = mix(&[(&crackle, 0.5), (&boom, 0.5)]);
        apply_exp_decay(&mut result, 4.0);

        normalize_to(&mut result, EXPLOSION_CEILING);
        Ok(result)
    }

    /// Hurt sound: buzzy square under a falling tone
    pub fn damage(&self) -> Result<Vec<f32>> {
        let buzz = self.sweep(Waveform::Square, Pitch::Fixed(200.0), DAMAGE_DURATION)?;
        let fall = self.sweep(
            Waveform::Sine,
            Pitch::Linear {
                from: 400.0,
                to: 200.0,
            },
            DAMAGE_DURATION,
        )?;

        let mut result = mix(&[(&buzz, 0.3), (&fall, 0.4)]);
        apply_exp_decay(&mut result, 3.0);

        normalize_to(&mut result, DAMAGE_CEILING);
        Ok(result)
    }

    /// Powerup / heal: ascending C major arpeggio
    ///
    /// The duration is split into equal slices, one note per slice. The tones
    /// run on the buffer's time axis; only the decay restarts per slice and
    /// reaches `exp(-2)` on the slice's last sample.
    pub fn powerup(&self) -> Result<Vec<f32>> {
        let mut bus = self.mixdown(POWERUP_DURATION)?;
        let len = bus.len();
        let sr = self.sample_rate() as f64;

        for (i, &frequency) in POWERUP_NOTES.iter().enumerate() {
            let start = len * i / POWERUP_NOTES.len();
            let end = len * (i + 1) / POWERUP_NOTES.len();
            let last = (end - start).saturating_sub(1).max(1) as f64;

            let note = Pitch::Fixed(frequency);
            let overtone = note.harmonic(2.0);
            let slice: Vec<f32> = (start..end)
                .map(|n| {
                    let t = n as f64 / sr;
                    let tone = 0.4 * Waveform::Sine.sample(note.phase_at(t, POWERUP_DURATION as f64))
                        + 0.2 * Waveform::Sine.sample(overtone.phase_at(t, POWERUP_DURATION as f64));
                    let decay = (-POWERUP_DECAY * (n - start) as f64 / last).exp();
                    (tone as f64 * decay) as f32
                })
                .collect();
            bus.place_at(&slice, 1.0, start)?;
        }

        Ok(bus.finish(POWERUP_CEILING))
    }

    /// Game over: slow descending phrase with a sub-octave sawtooth
    pub fn gameover(&self) -> Result<Vec<f32>> {
        let mut bus = self.mixdown(GAMEOVER_DURATION)?;

        self.sequence(&mut bus, &GAMEOVER_NOTES, 1.0, |note| {
            let voice = self.sweep(Waveform::Sine, Pitch::Fixed(note.frequency), note.duration)?;
            let sub = self.sweep(Waveform::Saw, Pitch::Fixed(note.frequency / 2.0), note.duration)?;

            let mut samples = mix(&[(&voice, 0.4), (&sub, 0.2)]);
            apply_exp_decay(&mut samples, 2.0);
            Ok(samples)
        })?;

        Ok(bus.finish(GAMEOVER_CEILING))
    }
}
