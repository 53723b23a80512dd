//! Finale: particles fly from random spots into a heart, then the name
//! and the "Play Again" button fade in.
//!
//! This module only plans. Interpolation and scheduling stay with the
//! host's animation layer.

use crate::{
    error::SurpriseResult,
    heart::heart_layout,
    rng::RandomSource,
    types::{HeartPoint, Millis, Viewport},
};
use serde::{Deserialize, Serialize};

pub const FORMATION_PARTICLES: usize = 40;
pub const FLIGHT_DELAY_MS: Millis = 500;
pub const FLIGHT_DURATION_MS: Millis = 2500;
pub const NAME_FADE_MS: Millis = 1500;
pub const BUTTON_FADE_MS: Millis = 1000;
pub const CONFETTI_DELAY_MS: Millis = 3000;
pub const HEART_RADIUS_FRACTION: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleFlight {
    pub start:       HeartPoint,
    pub target:      HeartPoint,
    pub delay_ms:    Millis,
    pub duration_ms: Millis,
}

/// Cumulative marks, in ms from scene start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTimeline {
    pub heart_formed: Millis,
    pub name_shown:   Millis,
    pub button_shown: Millis,
    pub confetti_at:  Millis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationPlan {
    pub flights: Vec<ParticleFlight>,
}

impl FormationPlan {
    /// Name and button fade in sequence after the last particle lands.
    pub fn reveal_timeline(&self) -> RevealTimeline {
        let heart_formed = self
            .flights
            .iter()
            .map(|f| f.delay_ms + f.duration_ms)
            .max()
            .unwrap_or(0);
        let name_shown = heart_formed + NAME_FADE_MS;
        RevealTimeline {
            heart_formed,
            name_shown,
            button_shown: name_shown + BUTTON_FADE_MS,
            confetti_at: CONFETTI_DELAY_MS,
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = HeartPoint> + '_ {
        self.flights.iter().map(|f| f.target)
    }
}

/// Curve half-width is 16 * radius.
const CURVE_HALF_WIDTH: f64 = 16.0;

/// Radius that makes the heart's half-width `fraction` of the screen
/// width. The host may pass any radius it likes instead.
pub fn default_radius(viewport: &Viewport, fraction: f64) -> f64 {
    viewport.width * fraction / CURVE_HALF_WIDTH
}

pub fn plan_formation(
    count: usize,
    viewport: &Viewport,
    radius: f64,
    rng: &mut impl RandomSource,
) -> SurpriseResult<FormationPlan> {
    let targets = heart_layout(count, radius, viewport.heart_center())?;
    let flights = targets
        .into_iter()
        .map(|target| ParticleFlight {
            start: HeartPoint::new(
                rng.next_f64() * viewport.width,
                rng.next_f64() * viewport.height,
            ),
            target,
            delay_ms: FLIGHT_DELAY_MS,
            duration_ms: FLIGHT_DURATION_MS,
        })
        .collect();
    Ok(FormationPlan { flights })
}
