use crate::{
    countdown::{DEFAULT_CELEBRATION_MESSAGE, DEFAULT_COUNTDOWN_LABEL},
    error::{SurpriseError, SurpriseResult},
    formation::FORMATION_PARTICLES,
    pop_game::{BUBBLE_COUNT, WIN_SCORE},
    target::TargetDate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that varies between one surprise and the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub target:              TargetDate,
    pub celebration_message: String,
    pub countdown_label:     String,
    pub recipient_name:      String,
    pub formation_particles: usize,
    pub pop_bubbles:         usize,
    pub pop_win_score:       u32,
    pub seed:                u64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            target:              TargetDate::default(),
            celebration_message: DEFAULT_CELEBRATION_MESSAGE.to_string(),
            countdown_label:     DEFAULT_COUNTDOWN_LABEL.to_string(),
            recipient_name:      String::from("You"),
            formation_particles: FORMATION_PARTICLES,
            pop_bubbles:         BUBBLE_COUNT,
            pop_win_score:       WIN_SCORE,
            seed:                42,
        }
    }
}

impl EventConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> SurpriseResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded event config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(content: &str) -> SurpriseResult<Self> {
        let config: EventConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Target dates validate themselves on deserialization; this checks
    /// the counts that scenes rely on.
    pub fn validate(&self) -> SurpriseResult<()> {
        if self.formation_particles == 0 {
            return Err(SurpriseError::EmptyLayout);
        }
        if self.pop_bubbles == 0
            || self.pop_win_score == 0
            || self.pop_win_score as usize > self.pop_bubbles
        {
            return Err(SurpriseError::InvalidGameRules {
                bubble_count: self.pop_bubbles,
                win_score:    self.pop_win_score,
            });
        }
        Ok(())
    }
}
