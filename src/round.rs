//! Round generation: nine distinct numbers with their word forms, plus the
//! shuffled order in which their numeral tiles appear in the tray.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::lexicon::{MAX_SPELLABLE, words_for};

/// Board side length; the board is `BOARD_SIDE` x `BOARD_SIDE`.
pub const BOARD_SIDE: usize = 3;
/// Cells (and tray pieces) per round.
pub const ROUND_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// A number together with its spelled-out form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberWordPair {
    value: u8,
    words: String,
}

impl NumberWordPair {
    pub fn new(value: u8) -> Result<Self> {
        Ok(Self {
            value,
            words: words_for(value)?,
        })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn words(&self) -> &str {
        &self.words
    }
}

/// The nine pairs of one round, in board order. Values are pairwise distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Round {
    pairs: Vec<NumberWordPair>,
}

impl Round {
    pub fn pairs(&self) -> &[NumberWordPair] {
        &self.pairs
    }

    pub fn get(&self, index: usize) -> Option<&NumberWordPair> {
        self.pairs.get(index)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NumberWordPair> {
        self.pairs.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.pairs.iter().map(NumberWordPair::value)
    }
}

/// Tray order: `order[tray_slot]` is the board index whose numeral sits in
/// that slot. Always a permutation of `0..ROUND_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlacementAssignment {
    order: Vec<usize>,
}

impl PlacementAssignment {
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn board_index_at(&self, tray_slot: usize) -> Option<usize> {
        self.order.get(tray_slot).copied()
    }

    /// `(tray_slot, board_index)` pairs in tray order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.iter().copied().enumerate()
    }
}

/// Rejection-sampling generator over `0..=max_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundGenerator {
    max_value: u8,
    max_draws: u32,
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self {
            max_value: MAX_SPELLABLE,
            max_draws: 10_000,
        }
    }
}

impl RoundGenerator {
    pub fn new(max_value: u8, max_draws: u32) -> Self {
        Self {
            max_value,
            max_draws,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_value, config.max_draws)
    }

    /// Draw uniformly from `0..=max_value`, keeping a draw only if it is new,
    /// until `ROUND_SIZE` numbers are accepted.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Round> {
        let mut pairs: Vec<NumberWordPair> = Vec::with_capacity(ROUND_SIZE);
        let mut draws: u32 = 0;
        while pairs.len() < ROUND_SIZE {
            if draws >= self.max_draws {
                return Err(GameError::ExhaustedRetries {
                    draws,
                    accepted: pairs.len(),
                });
            }
            draws += 1;
            let n = rng.gen_range(0..=self.max_value);
            if !pairs.iter().any(|p| p.value == n) {
                pairs.push(NumberWordPair::new(n)?);
            }
        }
        debug!(draws, "generated round");
        Ok(Round { pairs })
    }

    /// Uniform Fisher-Yates shuffle of the round's board indices.
    pub fn assign_placements<R: Rng + ?Sized>(
        &self,
        round: &Round,
        rng: &mut R,
    ) -> PlacementAssignment {
        let mut order: Vec<usize> = (0..round.len()).collect();
        order.shuffle(rng);
        PlacementAssignment { order }
    }
}

/// Generate a round over the full 0..=100 range.
pub fn generate_round<R: Rng + ?Sized>(rng: &mut R) -> Result<Round> {
    RoundGenerator::default().generate(rng)
}

pub fn assign_placements<R: Rng + ?Sized>(round: &Round, rng: &mut R) -> PlacementAssignment {
    RoundGenerator::default().assign_placements(round, rng)
}
