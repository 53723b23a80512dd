//! Pure logic behind a one-day birthday surprise: the countdown, the
//! heart layout, and the plans for each scene. Rendering, input and
//! timers belong to the host.

pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod formation;
pub mod heart;
pub mod home_scene;
pub mod memories;
pub mod pop_game;
pub mod rng;
pub mod scene;
pub mod target;
pub mod types;

pub use countdown::{compute_countdown, CountdownState};
pub use error::{SurpriseError, SurpriseResult};
pub use heart::{heart_layout, heart_point};
pub use target::TargetDate;
pub use types::HeartPoint;
