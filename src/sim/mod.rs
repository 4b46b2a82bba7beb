//! Simulation module
//!
//! All atom logic lives here:
//! - Fixed steps only (one step = one 60 Hz frame of motion)
//! - Stable iteration order (storage order, entities are never removed)
//! - No platform dependencies; drawing goes through `renderer::Canvas`

pub mod arc;
pub mod boundary;
pub mod collision;
pub mod deflector;
pub mod electron;
pub mod nucleon;
pub mod score;
pub mod state;
pub mod tick;
pub mod tint;

pub use arc::ArcSegment;
pub use boundary::Boundary;
pub use collision::{NucleonHit, deflector_hit_angle, reflect_velocity, resolve_nucleon_hits};
pub use deflector::Deflector;
pub use electron::Electron;
pub use nucleon::{Nucleon, Spin};
pub use score::ScoreBoard;
pub use state::{Atom, Steer};
pub use tick::{FixedStep, StepReport};
pub use tint::Tint;
