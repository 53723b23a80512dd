//! Shared primitive types used across the scenes.

use serde::{Deserialize, Serialize};

/// An angle on the heart curve, in radians.
pub type Radians = f64;

/// Milliseconds, as handed to the host's animation layer.
pub type Millis = u64;

/// A 2D point in the host's coordinate space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeartPoint {
    pub x: f64,
    pub y: f64,
}

impl HeartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &HeartPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Screen dimensions supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width:  f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Where the finale heart is centred: horizontally centred, slightly
    /// above the vertical middle.
    pub fn heart_center(&self) -> HeartPoint {
        HeartPoint::new(self.width / 2.0, self.height / 2.5)
    }

    pub fn contains(&self, p: &HeartPoint) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}
