//! Orbiting nucleons

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::boundary::Boundary;
use super::tint::Tint;
use crate::consts::NUCLEON_ORBIT_STEP;
use crate::renderer::Canvas;

/// Orbit direction of a shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spin {
    /// Increasing angle (clockwise on a y-down screen)
    #[default]
    Clockwise,
    CounterClockwise,
    /// Static ring
    Still,
}

impl Spin {
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Spin::Clockwise => 1.0,
            Spin::CounterClockwise => -1.0,
            Spin::Still => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nucleon {
    /// Orbit angle (radians)
    pub angle: f64,
    /// Orbit distance as a fraction of the boundary radius
    pub distance: f64,
    pub spin: Spin,
    /// Cleared for good on the first electron strike
    pub active: bool,
    /// Cartesian position, derived from angle/distance and the boundary
    pub pos: DVec2,
}

impl Nucleon {
    pub fn new(boundary: &Boundary, angle: f64, distance: f64, spin: Spin) -> Self {
        let mut nucleon = Self {
            angle,
            distance,
            spin,
            active: true,
            pos: DVec2::ZERO,
        };
        nucleon.place(boundary);
        nucleon
    }

    /// `count` nucleons evenly spaced around one orbit
    pub fn shell(boundary: &Boundary, count: usize, distance: f64, spin: Spin) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let angle = i as f64 / count as f64 * TAU;
                Self::new(boundary, angle, distance, spin)
            })
            .collect()
    }

    /// Advance one orbit step. Inactive nucleons are frozen.
    pub fn update(&mut self, boundary: &Boundary) {
        if !self.active {
            return;
        }
        self.angle += NUCLEON_ORBIT_STEP * self.spin.sign();
        self.place(boundary);
    }

    /// Recompute the position without advancing the orbit
    pub fn place(&mut self, boundary: &Boundary) {
        self.pos = boundary.point_at(self.angle, self.distance);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn draw(&self, canvas: &mut impl Canvas, radius: f64) {
        if !self.active {
            return;
        }
        canvas.set_fill_color(Tint::Yellow);
        canvas.fill_arc(self.pos, radius, 0.0, TAU);
    }
}
