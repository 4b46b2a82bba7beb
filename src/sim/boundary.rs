//! The containment ring

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BOUNDARY_DIVISOR, BOUNDARY_RING_OFFSET};
use crate::error::{SimError, SimResult};
use crate::renderer::Canvas;
use crate::sim::Tint;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Circle every particle moves within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub center: DVec2,
    pub radius: f64,
}

impl Boundary {
    /// Boundary fitted to a viewport
    pub fn for_viewport(width: f64, height: f64) -> SimResult<Self> {
        let mut boundary = Self {
            center: DVec2::ZERO,
            radius: 1.0,
        };
        boundary.resize(width, height)?;
        Ok(boundary)
    }

    /// Recenter on the viewport midpoint and fit the radius to the smaller
    /// dimension. Rejected viewports leave the boundary untouched.
    pub fn resize(&mut self, width: f64, height: f64) -> SimResult<()> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidViewport { width, height });
        }
        self.center = DVec2::new(width / 2.0, height / 2.0);
        self.radius = if height > width {
            width / BOUNDARY_DIVISOR
        } else {
            height / BOUNDARY_DIVISOR
        };
        Ok(())
    }

    /// Angle of `point` around the center (atan2, in (-π, π])
    #[inline]
    pub fn angle_of(&self, point: DVec2) -> f64 {
        cartesian_to_polar(self.center, point).1
    }

    /// Distance of `point` from the center
    #[inline]
    pub fn distance_to(&self, point: DVec2) -> f64 {
        (point - self.center).length()
    }

    /// Point at `angle`, `fraction` of the radius away from the center
    #[inline]
    pub fn point_at(&self, angle: f64, fraction: f64) -> DVec2 {
        polar_to_cartesian(self.center, fraction * self.radius, angle)
    }

    /// Convert a point to (angle, fraction of radius)
    pub fn relative(&self, point: DVec2) -> (f64, f64) {
        let (r, theta) = cartesian_to_polar(self.center, point);
        (theta, r / self.radius)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        use std::f64::consts::TAU;

        canvas.set_stroke_color(Tint::White);
        canvas.stroke_arc(self.center, self.radius + BOUNDARY_RING_OFFSET, 0.0, TAU);
        canvas.stroke_arc(self.center, self.radius - BOUNDARY_RING_OFFSET, 0.0, TAU);
    }
}
