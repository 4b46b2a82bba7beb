//! Atom Deflector - a circular atom toy
//!
//! Core modules:
//! - `sim`: Simulation (boundary, deflectors, nucleons, electrons, scoring)
//! - `renderer`: Backend-agnostic drawing through the `Canvas` trait
//! - `platform`: Viewport and browser host glue
//! - `input`: Keyboard state
//! - `settings`: Data-driven atom configurations

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use input::InputState;
pub use settings::AtomConfig;
pub use sim::{Atom, ScoreBoard, Tint};

use glam::DVec2;

/// Simulation constants
pub mod consts {
    /// Source frame rate; one simulation step is one frame at this rate
    pub const REFERENCE_FPS: f64 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / REFERENCE_FPS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Boundary radius is the smaller viewport dimension divided by this
    pub const BOUNDARY_DIVISOR: f64 = 2.1;
    /// Offset of the two drawn boundary rings from the radius
    pub const BOUNDARY_RING_OFFSET: f64 = 5.0;

    /// Deflector arc length as a fraction of the circumference
    pub const DEFLECTOR_SIZE: f64 = 0.05;
    /// Deflector rotation per step (fraction of a turn)
    pub const DEFLECTOR_SPIN: f64 = 0.001;
    /// Manual steering per step (fraction of a turn)
    pub const DEFLECTOR_STEER: f64 = 0.005;
    /// Stroke width of a deflector
    pub const DEFLECTOR_LINE_WIDTH: f64 = 10.0;

    /// Electron speed in pixels per step
    pub const ELECTRON_SPEED: f64 = 4.0;
    /// Electrons spawn at this fraction of the boundary radius
    pub const ELECTRON_SPAWN_DISTANCE: f64 = 0.95;

    /// Particle radius before the first resize
    pub const PARTICLE_SIZE: f64 = 8.0;
    /// Particle radius is the boundary radius divided by this
    pub const PARTICLE_SCALE_DIVISOR: f64 = 100.0;

    /// Nucleon orbit step in radians per step
    pub const NUCLEON_ORBIT_STEP: f64 = 0.01;
    /// Points awarded for a colored electron striking a nucleon
    pub const NUCLEON_POINTS: u64 = 10;

    /// HUD font and line spacing
    pub const HUD_FONT: &str = "48px arial";
    pub const HUD_LINE_HEIGHT: f64 = 40.0;
}

/// Angle of the north (top) of the screen, where deflector position 0 sits
pub const NORTH: f64 = -std::f64::consts::FRAC_PI_2;

/// Convert polar (r, theta) around `center` to cartesian
#[inline]
pub fn polar_to_cartesian(center: DVec2, r: f64, theta: f64) -> DVec2 {
    center + DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert a point to polar (r, theta) around `center`
#[inline]
pub fn cartesian_to_polar(center: DVec2, pos: DVec2) -> (f64, f64) {
    let d = pos - center;
    (d.length(), d.y.atan2(d.x))
}

/// Wrap a turn fraction into [0, 1)
#[inline]
pub fn wrap_turn(fraction: f64) -> f64 {
    let wrapped = fraction.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negatives
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
