//! Per-round game state and the drop handler.
//!
//! A `GameSession` is owned by whoever drives the UI. Handlers take the drop
//! payload and return the list of visible consequences as [`Effect`]s; the
//! caller (the DOM adapter in `board`) performs them.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::round::{BOARD_SIDE, PlacementAssignment, ROUND_SIZE, Round, RoundGenerator};

/// Which of the two fixed audio cues to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Match,
    Miss,
}

/// One cell of the 3x3 crop of the reward image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCrop {
    pub row: usize,
    pub col: usize,
}

impl TileCrop {
    pub fn for_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        }
    }

    /// CSS `background-size` that scales the image to the whole board.
    pub fn background_size(&self) -> &'static str {
        "300% 300%"
    }

    /// CSS `background-position` selecting this crop.
    pub fn background_position(&self) -> String {
        let step = 100 / (BOARD_SIDE - 1);
        format!("{}% {}%", self.col * step, self.row * step)
    }
}

/// A tile dropped on a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropEvent {
    /// Board index of the target cell.
    pub cell: usize,
    /// Numeral carried by the tile; `None` when the payload was unreadable.
    pub dragged_value: Option<u8>,
    /// Board index the dragged tile belongs to, when the drag carried one.
    /// A matching tile always belongs to the target cell, so a match without
    /// it falls back to `cell`.
    pub piece: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    PlayCue(Cue),
    ScoreChanged(i64),
    RevealCell { cell: usize, crop: TileCrop },
    RemovePiece { piece: usize },
    Victory,
}

pub struct GameSession {
    config: GameConfig,
    round: Round,
    placements: PlacementAssignment,
    image_index: usize,
    score: i64,
    solved: [bool; ROUND_SIZE],
}

impl GameSession {
    pub fn start<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let generator = RoundGenerator::from_config(config);
        let round = generator.generate(rng)?;
        let placements = generator.assign_placements(&round, rng);
        let image_index = rng.gen_range(0..config.image_count);
        info!(image = image_index + 1, "new round");
        Ok(Self {
            config: config.clone(),
            round,
            placements,
            image_index,
            score: 0,
            solved: [false; ROUND_SIZE],
        })
    }

    /// Fresh session with the same configuration.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self> {
        Self::start(&self.config, rng)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn placements(&self) -> &PlacementAssignment {
        &self.placements
    }

    pub fn image_url(&self) -> String {
        self.config.image_url(self.image_index)
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn score_text(&self) -> String {
        format!("{}{}", self.config.score_label, self.score)
    }

    pub fn is_solved(&self, cell: usize) -> bool {
        self.solved.get(cell).copied().unwrap_or(false)
    }

    pub fn correct_count(&self) -> usize {
        self.solved.iter().filter(|s| **s).count()
    }

    pub fn is_complete(&self) -> bool {
        self.correct_count() == ROUND_SIZE
    }

    /// Score a drop. A match needs the right numeral on a cell that is not
    /// already solved; anything else, including an unreadable payload, costs
    /// the penalty.
    pub fn handle_drop(&mut self, drop: DropEvent) -> Result<Vec<Effect>> {
        let expected = self
            .round
            .get(drop.cell)
            .ok_or(GameError::UnknownCell(drop.cell))?
            .value();
        let matched = drop.dragged_value == Some(expected) && !self.solved[drop.cell];
        debug!(cell = drop.cell, dragged = ?drop.dragged_value, matched, "drop");

        if !matched {
            self.score -= self.config.wrong_penalty;
            return Ok(vec![
                Effect::ScoreChanged(self.score),
                Effect::PlayCue(Cue::Miss),
            ]);
        }
        let piece = drop.piece.unwrap_or(drop.cell);
        if piece >= ROUND_SIZE {
            return Err(GameError::UnknownPiece(piece));
        }

        self.solved[drop.cell] = true;
        self.score += self.config.correct_points;
        let mut effects = vec![
            Effect::RevealCell {
                cell: drop.cell,
                crop: TileCrop::for_index(piece),
            },
            Effect::ScoreChanged(self.score),
            Effect::PlayCue(Cue::Match),
            Effect::RemovePiece { piece },
        ];
        if self.is_complete() {
            info!(score = self.score, "board complete");
            effects.push(Effect::Victory);
        }
        Ok(effects)
    }
}
