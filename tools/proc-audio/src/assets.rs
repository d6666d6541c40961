//! Named asset registry
//!
//! Single source of truth for what the game ships: one background loop and
//! five sound effects, each saved as `{id}.wav`.

use crate::error::Result;
use crate::recipes::*;
use crate::synth::Synth;
use crate::AudioBuffer;

/// Every generated audio asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    HalloweenBgm,
    Shoot,
    Explosion,
    Damage,
    Powerup,
    GameOver,
}

impl Asset {
    /// All assets, in generation order
    pub const ALL: [Asset; 6] = [
        Asset::HalloweenBgm,
        Asset::Shoot,
        Asset::Explosion,
        Asset::Damage,
        Asset::Powerup,
        Asset::GameOver,
    ];

    /// File stem the game loads the asset by
    pub fn id(self) -> &'static str {
        match self {
            Asset::HalloweenBgm => "bgm_halloween",
            Asset::Shoot => "sfx_shoot",
            Asset::Explosion => "sfx_explosion",
            Asset::Damage => "sfx_damage",
            Asset::Powerup => "sfx_powerup",
            Asset::GameOver => "sfx_gameover",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Asset::HalloweenBgm => "Spooky background loop",
            Asset::Shoot => "Magic shot",
            Asset::Explosion => "Explosion / hit",
            Asset::Damage => "Player damage",
            Asset::Powerup => "Powerup / heal",
            Asset::GameOver => "Game over",
        }
    }

    /// Output file name (`{id}.wav`)
    pub fn file_name(self) -> String {
        format!("{}.wav", self.id())
    }

    /// Length in seconds
    pub fn duration(self) -> f32 {
        match self {
            Asset::HalloweenBgm => BGM_DURATION,
            Asset::Shoot => SHOOT_DURATION,
            Asset::Explosion => EXPLOSION_DURATION,
            Asset::Damage => DAMAGE_DURATION,
            Asset::Powerup => POWERUP_DURATION,
            Asset::GameOver => GAMEOVER_DURATION,
        }
    }

    /// Peak amplitude after normalization
    pub fn ceiling(self) -> f32 {
        match self {
            Asset::HalloweenBgm => BGM_CEILING,
            Asset::Shoot => SHOOT_CEILING,
            Asset::Explosion => EXPLOSION_CEILING,
            Asset::Damage => DAMAGE_CEILING,
            Asset::Powerup => POWERUP_CEILING,
            Asset::GameOver => GAMEOVER_CEILING,
        }
    }

    /// Look an asset up by its file stem
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|asset| asset.id() == id)
    }

    /// Synthesize the finished, normalized asset
    pub fn generate(self, synth: &Synth) -> Result<AudioBuffer> {
        let samples = match self {
            Asset::HalloweenBgm => synth.halloween_bgm()?,
            Asset::Shoot => synth.shoot()?,
            Asset::Explosion => synth.explosion()?,
            Asset::Damage => synth.damage()?,
            Asset::Powerup => synth.powerup()?,
            Asset::GameOver => synth.gameover()?,
        };

        let buffer = AudioBuffer::from_samples(synth.sample_rate(), samples);
        tracing::debug!(
            id = self.id(),
            samples = buffer.len(),
            peak = buffer.peak(),
            "generated asset"
        );
        Ok(buffer)
    }
}
