//! Tap-to-pop mini-game: hearts rise up the screen, the player pops
//! them, and the game is won after WIN_SCORE pops.

use crate::{
    error::{SurpriseError, SurpriseResult},
    rng::RandomSource,
    types::Millis,
};
use serde::{Deserialize, Serialize};

pub const BUBBLE_COUNT: usize = 15;
pub const WIN_SCORE: u32 = 10;
pub const BUBBLE_SIZE: f64 = 60.0;

/// A rise takes 3–5 seconds.
pub const RISE_BASE_MS: f64 = 3000.0;
pub const RISE_SPREAD_MS: f64 = 2000.0;
pub const POP_ANIMATION_MS: Millis = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopOutcome {
    Scored { score: u32 },
    /// Emitted exactly once, by the pop that reaches the win score.
    Won { score: u32 },
    AlreadyPopped,
    AlreadyWon,
}

#[derive(Debug, Clone)]
pub struct PopGame {
    popped:    Vec<bool>,
    score:     u32,
    win_score: u32,
    won:       bool,
}

impl PopGame {
    pub fn new(bubble_count: usize, win_score: u32) -> SurpriseResult<Self> {
        if bubble_count == 0 || win_score == 0 || win_score as usize > bubble_count {
            return Err(SurpriseError::InvalidGameRules { bubble_count, win_score });
        }
        Ok(Self {
            popped: vec![false; bubble_count],
            score: 0,
            win_score,
            won: false,
        })
    }

    pub fn standard() -> Self {
        Self {
            popped: vec![false; BUBBLE_COUNT],
            score: 0,
            win_score: WIN_SCORE,
            won: false,
        }
    }

    pub fn pop(&mut self, id: usize) -> SurpriseResult<PopOutcome> {
        let slot = self
            .popped
            .get_mut(id)
            .ok_or(SurpriseError::UnknownBubble { id })?;

        if self.won {
            return Ok(PopOutcome::AlreadyWon);
        }
        if *slot {
            return Ok(PopOutcome::AlreadyPopped);
        }

        *slot = true;
        self.score += 1;
        if self.score >= self.win_score {
            self.won = true;
            log::info!("Pop game won with score {}", self.score);
            Ok(PopOutcome::Won { score: self.score })
        } else {
            Ok(PopOutcome::Scored { score: self.score })
        }
    }

    pub fn reset(&mut self) {
        self.popped.iter_mut().for_each(|p| *p = false);
        self.score = 0;
        self.won = false;
    }

    pub fn score(&self) -> u32 { self.score }
    pub fn win_score(&self) -> u32 { self.win_score }
    pub fn is_won(&self) -> bool { self.won }
    pub fn bubble_count(&self) -> usize { self.popped.len() }

    pub fn is_popped(&self, id: usize) -> bool {
        self.popped.get(id).copied().unwrap_or(false)
    }

    /// Bubbles still floating.
    pub fn live_bubbles(&self) -> impl Iterator<Item = usize> + '_ {
        self.popped
            .iter()
            .enumerate()
            .filter(|(_, popped)| !**popped)
            .map(|(i, _)| i)
    }

    pub fn header_text(&self) -> String {
        format!("Pop {} Hearts!", self.win_score)
    }
}

/// Horizontal position of bubble `index`'s lane.
pub fn bubble_lane_x(index: usize, count: usize, width: f64) -> f64 {
    width / (count as f64 + 1.0) * (index as f64 + 0.5)
}

/// Duration of one rise from the bottom of the screen to the top.
pub fn rise_duration_ms(rng: &mut impl RandomSource) -> Millis {
    rng.range(RISE_BASE_MS, RISE_SPREAD_MS) as Millis
}
