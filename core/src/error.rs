use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurpriseError {
    #[error("Invalid target date: month {month}, day {day}, {hour:02}:{minute:02}")]
    InvalidTargetDate { month: u32, day: u32, hour: u32, minute: u32 },

    #[error("Heart layout needs at least one particle")]
    EmptyLayout,

    #[error("Particle {index} out of range for {count} particles")]
    ParticleOutOfRange { index: usize, count: usize },

    #[error("Bubble {id} not found")]
    UnknownBubble { id: usize },

    #[error("Invalid game rules: win score {win_score} with {bubble_count} bubbles")]
    InvalidGameRules { bubble_count: usize, win_score: u32 },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SurpriseResult<T> = Result<T, SurpriseError>;
