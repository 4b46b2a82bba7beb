//! Rotating deflector arcs
//!
//! A deflector rides the boundary. Its `position` is a fraction
//! of a full turn with 0 at the top of the screen; the hit window is
//! recomputed from it on every update.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::arc::ArcSegment;
use super::boundary::Boundary;
use super::tint::Tint;
use crate::consts::{DEFLECTOR_LINE_WIDTH, DEFLECTOR_SIZE, DEFLECTOR_SPIN};
use crate::renderer::Canvas;
use crate::{NORTH, wrap_turn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deflector {
    /// Center of the arc as a fraction of a turn, in [0, 1)
    pub position: f64,
    /// Arc length as a fraction of a turn
    pub size: f64,
    /// Rotation per step (fraction of a turn)
    pub spin: f64,
    pub color: Tint,
    /// Window start (radians), derived on update
    pub theta_start: f64,
    /// Window end (radians), derived on update
    pub theta_end: f64,
}

impl Deflector {
    pub fn new(position: f64, color: Tint) -> Self {
        Self::with_shape(position, DEFLECTOR_SIZE, DEFLECTOR_SPIN, color)
    }

    pub fn with_shape(position: f64, size: f64, spin: f64, color: Tint) -> Self {
        let mut deflector = Self {
            position: wrap_turn(position),
            size,
            spin,
            color,
            theta_start: 0.0,
            theta_end: 0.0,
        };
        deflector.refresh_window();
        deflector
    }

    /// Rotate by `spin` and recompute the window
    pub fn update(&mut self) {
        self.rotate_by(self.spin);
    }

    /// Rotate by an arbitrary fraction of a turn (negative = counter-clockwise
    /// on screen). The position wraps into [0, 1).
    pub fn rotate_by(&mut self, amount: f64) {
        self.position = wrap_turn(self.position + amount);
        self.refresh_window();
    }

    fn refresh_window(&mut self) {
        let half = self.size / 2.0;
        self.theta_start = (self.position - half) * TAU + NORTH;
        self.theta_end = (self.position + half) * TAU + NORTH;
    }

    /// Strict `theta_start < angle < theta_end`
    #[inline]
    pub fn contains_angle(&self, angle: f64) -> bool {
        angle > self.theta_start && angle < self.theta_end
    }

    /// The window as a stroked arc on a circle of `radius`
    pub fn window(&self, radius: f64) -> ArcSegment {
        ArcSegment::new(radius, DEFLECTOR_LINE_WIDTH, self.theta_start, self.theta_end)
    }

    pub fn draw(&self, canvas: &mut impl Canvas, boundary: &Boundary) {
        let arc = self.window(boundary.radius);
        canvas.set_stroke_color(self.color);
        canvas.set_line_width(arc.thickness);
        canvas.stroke_arc(boundary.center, arc.radius, arc.theta_start, arc.theta_end);
        canvas.set_line_width(1.0);
        canvas.set_stroke_color(Tint::White);
    }
}
