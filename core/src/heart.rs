//! Cardioid layout for the finale heart.

use crate::{
    error::{SurpriseError, SurpriseResult},
    types::{HeartPoint, Radians},
};
use std::f64::consts::TAU;

/// Point on the heart curve at angle `t`, scaled by `radius` and
/// translated by `center`. Defined for every real `t`, period 2π.
pub fn heart_point(t: Radians, radius: f64, center: HeartPoint) -> HeartPoint {
    let x = radius * 16.0 * t.sin().powi(3);
    let y = -radius
        * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    HeartPoint::new(x + center.x, y + center.y)
}

/// Angle for particle `index` of `count`, evenly spaced around the curve.
pub fn particle_angle(index: usize, count: usize) -> SurpriseResult<Radians> {
    if count == 0 {
        return Err(SurpriseError::EmptyLayout);
    }
    if index >= count {
        return Err(SurpriseError::ParticleOutOfRange { index, count });
    }
    Ok(index as f64 / count as f64 * TAU)
}

/// Target positions for `count` particles around the heart.
pub fn heart_layout(count: usize, radius: f64, center: HeartPoint) -> SurpriseResult<Vec<HeartPoint>> {
    if count == 0 {
        return Err(SurpriseError::EmptyLayout);
    }
    (0..count)
        .map(|i| particle_angle(i, count).map(|t| heart_point(t, radius, center)))
        .collect()
}
