//! Tunable game constants. `Default` reproduces the classroom build; the
//! `serde_json` feature lets a host page override any subset from JSON.

use std::str::FromStr;

use crate::error::{GameError, Result};
use crate::lexicon::MAX_SPELLABLE;
use crate::round::ROUND_SIZE;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound (inclusive) of the numbers drawn for a round.
    pub max_value: u8,
    /// Draw ceiling for the rejection sampler before giving up.
    pub max_draws: u32,
    pub correct_points: i64,
    pub wrong_penalty: i64,
    /// Reward images are `{image_dir}/1.{image_ext}` .. `{image_dir}/{image_count}.{image_ext}`.
    pub image_count: usize,
    pub image_dir: String,
    pub image_ext: String,
    pub match_sound_url: String,
    pub miss_sound_url: String,
    pub confetti_count: usize,
    pub confetti_palette: Vec<String>,
    /// How long the victory flourish stays on screen.
    pub victory_ms: i32,
    pub score_label: String,
    /// `tracing` level name for the console logger.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_value: MAX_SPELLABLE,
            max_draws: 10_000,
            correct_points: 10,
            wrong_penalty: 5,
            image_count: 10,
            image_dir: "images".to_string(),
            image_ext: "jpg".to_string(),
            match_sound_url: "https://actions.google.com/sounds/v1/cartoon/wood_plank_flicks.ogg"
                .to_string(),
            miss_sound_url: "https://actions.google.com/sounds/v1/cartoon/clang_and_wobble.ogg"
                .to_string(),
            confetti_count: 20,
            confetti_palette: ["#ff6f61", "#ffd54f", "#81c784", "#4fc3f7", "#b39ddb"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            victory_ms: 2500,
            score_label: "Pontuação: ".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_value > MAX_SPELLABLE {
            return Err(invalid(format!(
                "max_value {} exceeds {MAX_SPELLABLE}",
                self.max_value
            )));
        }
        // 0..=max_value must hold ROUND_SIZE distinct numbers.
        if (self.max_value as usize) + 1 < ROUND_SIZE {
            return Err(invalid(format!(
                "max_value {} leaves fewer than {ROUND_SIZE} distinct numbers",
                self.max_value
            )));
        }
        if self.max_draws < ROUND_SIZE as u32 {
            return Err(invalid(format!(
                "max_draws {} is below the round size",
                self.max_draws
            )));
        }
        if self.image_count == 0 {
            return Err(invalid("image_count must be at least 1".to_string()));
        }
        if self.confetti_palette.is_empty() {
            return Err(invalid("confetti_palette is empty".to_string()));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| invalid(format!("unknown log_level '{}'", self.log_level)))
    }

    /// URL of the reward image with zero-based index `index`.
    pub fn image_url(&self, index: usize) -> String {
        format!("{}/{}.{}", self.image_dir, index + 1, self.image_ext)
    }
}

fn invalid(message: String) -> GameError {
    GameError::InvalidConfig(message)
}
