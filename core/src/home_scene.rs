//! Background decoration for the home screen: hearts drifting upward,
//! and firecrackers once the celebration is on.

use crate::{
    rng::RandomSource,
    types::{Millis, Viewport},
};
use serde::{Deserialize, Serialize};

pub const FLOATING_HEARTS: usize = 15;
pub const FIRECRACKERS: usize = 10;

const HEART_SWAY: f64 = 50.0;
const HEART_RISE: f64 = 800.0;
/// Hearts start this far below the bottom edge.
const HEART_START_BELOW: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatingHeart {
    pub x:           f64,
    pub start_y:     f64,
    pub end_y:       f64,
    /// Peak horizontal offset mid-rise; alternates left and right.
    pub sway:        f64,
    pub rise_ms:     Millis,
    pub fall_ms:     Millis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Firecracker {
    pub x:        f64,
    pub y:        f64,
    pub burst_ms: Millis,
    pub fade_ms:  Millis,
}

pub fn plan_floating_hearts(count: usize, viewport: &Viewport, rng: &mut impl RandomSource) -> Vec<FloatingHeart> {
    let start_y = viewport.height + HEART_START_BELOW;
    (0..count)
        .map(|i| FloatingHeart {
            x: rng.next_f64() * viewport.width,
            start_y,
            end_y: start_y - HEART_RISE,
            sway: if i % 2 == 0 { HEART_SWAY } else { -HEART_SWAY },
            rise_ms: rng.range(2000.0, 3000.0) as Millis,
            fall_ms: rng.range(2000.0, 3000.0) as Millis,
        })
        .collect()
}

pub fn plan_firecrackers(count: usize, viewport: &Viewport, rng: &mut impl RandomSource) -> Vec<Firecracker> {
    (0..count)
        .map(|_| Firecracker {
            x: rng.next_f64() * viewport.width,
            y: rng.next_f64() * viewport.height,
            burst_ms: rng.range(1000.0, 1000.0) as Millis,
            fade_ms: rng.range(500.0, 500.0) as Millis,
        })
        .collect()
}
