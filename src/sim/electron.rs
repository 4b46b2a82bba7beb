//! Bouncing electrons

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::boundary::Boundary;
use super::collision::{deflector_hit_angle, reflect_velocity, touches_boundary};
use super::deflector::Deflector;
use super::tint::Tint;
use crate::consts::ELECTRON_SPAWN_DISTANCE;
use crate::renderer::Canvas;

/// A free-moving electron
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Electron {
    pub pos: DVec2,
    /// Displacement per step
    pub vel: DVec2,
    /// Speed restored when a deflector redirects the electron
    pub speed: f64,
    /// Collision radius, fixed for the electron's lifetime
    pub size: f64,
    /// Draw radius, follows the boundary scale
    #[serde(default)]
    pub radius: f64,
    /// `White` until a deflector colors it
    pub color: Tint,
    /// Cleared on every bounce; nothing reads it
    #[serde(default)]
    pub annihilate: bool,
}

impl Electron {
    /// Electron at an explicit position and velocity
    pub fn at(pos: DVec2, vel: DVec2, speed: f64, size: f64) -> Self {
        Self {
            pos,
            vel,
            speed,
            size,
            radius: size,
            color: Tint::White,
            annihilate: false,
        }
    }

    /// Spawn just inside the boundary at `fraction` of a turn (0 = east),
    /// heading straight for the center.
    pub fn spawn(boundary: &Boundary, fraction: f64, speed: f64, size: f64) -> Self {
        let pos = boundary.point_at(TAU * fraction, ELECTRON_SPAWN_DISTANCE);
        let vel = (boundary.center - pos).try_normalize().unwrap_or(DVec2::X) * speed;
        Self::at(pos, vel, speed, size)
    }

    /// One explicit Euler step
    #[inline]
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the boundary.
    ///
    /// On contact the electron is stepped back by one velocity increment and
    /// its velocity is reflected across the unit normal at that point. Returns
    /// whether a bounce happened.
    pub fn check_boundary_collision(&mut self, boundary: &Boundary) -> bool {
        if !touches_boundary(self.pos, self.size, boundary) {
            return false;
        }
        self.annihilate = false;

        self.pos -= self.vel;

        match (self.pos - boundary.center).try_normalize() {
            Some(normal) => self.vel = reflect_velocity(self.vel, normal),
            None => log::warn!("Electron at boundary center, skipping reflection"),
        }
        true
    }

    /// Recolor and redirect after a bounce.
    ///
    /// Every deflector whose window contains the bounce angle sends the
    /// electron straight at the center with its nominal speed and paints it;
    /// with overlapping windows the last one wins. Returns the color applied.
    pub fn check_deflector_collision(
        &mut self,
        boundary: &Boundary,
        deflectors: &[Deflector],
    ) -> Option<Tint> {
        let angle = deflector_hit_angle(boundary, self.pos);
        let mut applied = None;

        for d in deflectors.iter().filter(|d| d.contains_angle(angle)) {
            match (boundary.center - self.pos).try_normalize() {
                Some(to_center) => self.vel = to_center * self.speed,
                None => log::warn!("Electron at boundary center, keeping velocity"),
            }
            self.color = d.color;
            applied = Some(d.color);
        }

        applied
    }

    /// Send the electron radially away from `point`, keeping its speed
    pub fn deflect_from(&mut self, point: DVec2) {
        let speed = self.vel.length();
        let away = self.pos - point;
        let angle = away.y.atan2(away.x);
        self.vel = DVec2::new(angle.cos(), angle.sin()) * speed;
    }

    /// Rescale the position from one boundary to another, keeping the
    /// (angle, fraction of radius) coordinates
    pub fn remap(&mut self, from: &Boundary, to: &Boundary) {
        let (angle, fraction) = from.relative(self.pos);
        self.pos = to.point_at(angle, fraction);
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.set_fill_color(self.color);
        canvas.fill_arc(self.pos, self.radius, 0.0, TAU);
        canvas.set_stroke_color(Tint::White);
        canvas.stroke_arc(self.pos, self.radius, 0.0, TAU);
    }
}
