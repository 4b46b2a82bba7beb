//! Collision detection and response
//!
//! Everything here is plain geometry on `DVec2`. The functions take entities by
//! reference and report what happened; scoring is applied by the caller's
//! `ScoreBoard`, passed in explicitly.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

use super::boundary::Boundary;
use super::electron::Electron;
use super::nucleon::Nucleon;
use super::score::ScoreBoard;
use super::tint::Tint;

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, `normal` must be unit length.
#[inline]
pub fn reflect_velocity(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Whether a particle of radius `size` touches or crosses the boundary
#[inline]
pub fn touches_boundary(pos: DVec2, size: f64, boundary: &Boundary) -> bool {
    boundary.distance_to(pos) + size >= boundary.radius
}

/// Angle used to test a bounce against deflector windows.
///
/// Deflector windows start at north (-π/2) and run clockwise, so atan2 results
/// below -π/2 are shifted up by a full turn. Angles just counter-clockwise of
/// north land near 3π/2 and miss a window straddling north on that side.
pub fn deflector_hit_angle(boundary: &Boundary, pos: DVec2) -> f64 {
    let angle = boundary.angle_of(pos);
    if angle < -FRAC_PI_2 { angle + TAU } else { angle }
}

/// Whether two circles overlap (strict)
#[inline]
pub fn circles_overlap(a: DVec2, ra: f64, b: DVec2, rb: f64) -> bool {
    (a - b).length() < ra + rb
}

/// A single nucleon strike from the nucleon/electron pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NucleonHit {
    pub nucleon: usize,
    pub electron: usize,
    pub color: Tint,
    /// Points credited to `color` (0 for uncolored electrons)
    pub points: u64,
}

/// Nucleon/electron pass.
///
/// Every active nucleon is tested against every electron. On overlap the
/// electron is deflected away from the nucleon at its current speed, the
/// nucleon is deactivated, and a colored electron credits its color on
/// `scores`. A nucleon is struck at most once and an electron strikes at most
/// one nucleon per pass; a second nucleon under the same electron has to wait
/// for the next pass.
pub fn resolve_nucleon_hits(
    nucleons: &mut [Nucleon],
    electrons: &mut [Electron],
    nucleon_radius: f64,
    scores: &mut ScoreBoard,
) -> Vec<NucleonHit> {
    let mut hits = Vec::new();
    let mut struck = vec![false; electrons.len()];

    for (ni, nucleon) in nucleons.iter_mut().enumerate() {
        if !nucleon.active {
            continue;
        }
        for (ei, electron) in electrons.iter_mut().enumerate() {
            if struck[ei] || !circles_overlap(nucleon.pos, nucleon_radius, electron.pos, electron.size) {
                continue;
            }

            electron.deflect_from(nucleon.pos);
            nucleon.deactivate();
            struck[ei] = true;

            let points = scores.award(electron.color).unwrap_or(0);
            log::debug!(
                "Nucleon {} struck by electron {} ({}, +{})",
                ni,
                ei,
                electron.color.as_str(),
                points
            );
            hits.push(NucleonHit {
                nucleon: ni,
                electron: ei,
                color: electron.color,
                points,
            });
            break;
        }
    }

    hits
}
