//! Property-based tests for the atom simulation using proptest.
//!
//! Covers: velocity reflection, boundary bounces, deflector windows,
//! turn wrapping, scoring.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use atom_deflector::sim::{
    Boundary, Deflector, Electron, ScoreBoard, Tint, deflector_hit_angle, reflect_velocity,
};
use atom_deflector::wrap_turn;
use glam::DVec2;
use proptest::prelude::*;

fn any_tint() -> impl Strategy<Value = Tint> {
    prop_oneof![
        Just(Tint::White),
        Just(Tint::Yellow),
        Just(Tint::Blue),
        Just(Tint::Lime),
        Just(Tint::Red),
        Just(Tint::Cyan),
        Just(Tint::Green),
    ]
}

// ── Reflection ───────────────────────────────────────────────────────

proptest! {
    /// Reflecting across a unit normal keeps the speed.
    #[test]
    fn reflection_conserves_speed(vx in -10.0f64..10.0, vy in -10.0f64..10.0, theta in 0.0f64..TAU) {
        let v = DVec2::new(vx, vy);
        let n = DVec2::from_angle(theta);
        let r = reflect_velocity(v, n);
        prop_assert!((r.length() - v.length()).abs() < 1e-9,
            "|v| = {}, |r| = {}", v.length(), r.length());
    }

    /// Reflecting twice across the same normal is the identity.
    #[test]
    fn reflection_is_involution(vx in -10.0f64..10.0, vy in -10.0f64..10.0, theta in 0.0f64..TAU) {
        let v = DVec2::new(vx, vy);
        let n = DVec2::from_angle(theta);
        let back = reflect_velocity(reflect_velocity(v, n), n);
        prop_assert!((back - v).length() < 1e-9, "v = {:?}, back = {:?}", v, back);
    }
}

// ── Boundary ─────────────────────────────────────────────────────────

proptest! {
    /// A bounce never changes the electron's speed.
    #[test]
    fn boundary_bounce_conserves_speed(
        angle in 0.0f64..TAU,
        heading in 0.0f64..TAU,
        fraction in 0.90f64..0.999,
        speed in 0.5f64..8.0,
    ) {
        let boundary = Boundary::for_viewport(840.0, 840.0).unwrap();
        let pos = boundary.point_at(angle, fraction);
        let mut e = Electron::at(pos, DVec2::from_angle(heading) * speed, speed, 4.0);

        e.update();
        let bounced = e.check_boundary_collision(&boundary);
        prop_assert!((e.vel.length() - speed).abs() < 1e-9,
            "bounced = {}, |v| = {}, speed = {}", bounced, e.vel.length(), speed);
    }

    /// The hit angle always lands in [-π/2, 3π/2).
    #[test]
    fn hit_angle_range(angle in -PI..PI, fraction in 0.1f64..1.0) {
        let boundary = Boundary::for_viewport(1000.0, 800.0).unwrap();
        let a = deflector_hit_angle(&boundary, boundary.point_at(angle, fraction));
        prop_assert!(a >= -FRAC_PI_2 - 1e-12 && a < 1.5 * PI + 1e-12, "angle = {}", a);
    }
}

// ── Deflectors ───────────────────────────────────────────────────────

proptest! {
    /// Window width is size·2π at every phase, including across the wrap.
    #[test]
    fn deflector_window_width_invariant(
        position in -3.0f64..3.0,
        size in 0.01f64..0.5,
        turns in prop::collection::vec(-1.0f64..1.0, 1..20),
    ) {
        let mut d = Deflector::with_shape(position, size, 0.001, Tint::Blue);
        for amount in turns {
            d.rotate_by(amount);
            prop_assert!((d.theta_end - d.theta_start - size * TAU).abs() < 1e-9);
            prop_assert!(d.position >= 0.0 && d.position < 1.0, "position = {}", d.position);
        }
    }

    /// Wrapped turns stay in [0, 1) and differ from the input by whole turns.
    #[test]
    fn wrap_turn_range(f in -100.0f64..100.0) {
        let w = wrap_turn(f);
        prop_assert!((0.0..1.0).contains(&w), "wrap_turn({}) = {}", f, w);
        let k = f - w;
        prop_assert!((k - k.round()).abs() < 1e-9);
    }
}

// ── Scoring ──────────────────────────────────────────────────────────

proptest! {
    /// Every colored strike is worth exactly 10, uncolored ones nothing.
    #[test]
    fn score_counts_colored_strikes(strikes in prop::collection::vec(any_tint(), 0..64)) {
        let mut scores = ScoreBoard::default();
        let colored = strikes.iter().filter(|t| t.scores()).count() as u64;
        for &t in &strikes {
            let awarded = scores.award(t);
            prop_assert_eq!(awarded.is_some(), t.scores());
        }
        prop_assert_eq!(scores.total(), colored * 10);
        prop_assert_eq!(scores.get(Tint::White), 0);
    }
}
