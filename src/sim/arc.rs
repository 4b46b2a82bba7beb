//! Arc segment geometry for deflectors and stroked arcs
//!
//! In polar coordinates around the boundary center, an arc segment is:
//! - radius: distance from center
//! - thickness: radial extent (inner = radius - thickness/2, outer = radius + thickness/2)
//! - theta_start, theta_end: angular extent, `theta_start <= theta_end`
//!
//! Angles are NOT normalized. A deflector window may extend below -π/2 or
//! beyond 3π/2.

use serde::{Deserialize, Serialize};

/// A thickened arc segment in polar space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    /// Centerline radius from the boundary center
    pub radius: f64,
    /// Radial thickness (extends radius ± thickness/2)
    pub thickness: f64,
    /// Start angle (radians)
    pub theta_start: f64,
    /// End angle (radians)
    pub theta_end: f64,
}

impl ArcSegment {
    pub fn new(radius: f64, thickness: f64, theta_start: f64, theta_end: f64) -> Self {
        Self {
            radius,
            thickness,
            theta_start,
            theta_end,
        }
    }

    /// Inner radius of the arc band
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        (self.radius - self.thickness / 2.0).max(0.0)
    }

    /// Outer radius of the arc band
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.thickness / 2.0
    }

    /// Angular span of the arc
    #[inline]
    pub fn angular_span(&self) -> f64 {
        self.theta_end - self.theta_start
    }
}
