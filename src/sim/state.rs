//! Atom state and construction
//!
//! The `Atom` exclusively owns every entity. Entities never point back at the
//! boundary; it is handed to them by reference when they need it.

use serde::{Deserialize, Serialize};

use super::boundary::Boundary;
use super::deflector::Deflector;
use super::electron::Electron;
use super::nucleon::Nucleon;
use super::score::ScoreBoard;
use super::tick::FixedStep;
use crate::consts::{DEFLECTOR_STEER, PARTICLE_SCALE_DIVISOR, PARTICLE_SIZE};
use crate::error::SimResult;
use crate::renderer::Canvas;
use crate::settings::AtomConfig;

/// Direction for manual deflector steering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// Decreasing position (counter-clockwise on screen)
    Left,
    /// Increasing position (clockwise on screen)
    Right,
}

/// The whole simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    pub(crate) boundary: Boundary,
    pub(crate) nucleons: Vec<Nucleon>,
    pub(crate) electrons: Vec<Electron>,
    pub(crate) deflectors: Vec<Deflector>,
    pub(crate) scores: ScoreBoard,
    /// Nucleon draw and collision radius
    pub(crate) nucleon_radius: f64,
    pub(crate) steerable: Option<usize>,
    /// Simulation steps run so far
    pub(crate) steps: u64,
    #[serde(skip)]
    pub(crate) clock: FixedStep,
}

impl Atom {
    /// Build an atom from `config` fitted to a `width` x `height` viewport
    pub fn new(config: &AtomConfig, width: f64, height: f64) -> SimResult<Self> {
        config.validate()?;
        let boundary = Boundary::for_viewport(width, height)?;

        let nucleons = config
            .shells
            .iter()
            .flat_map(|s| Nucleon::shell(&boundary, s.count, s.distance, s.spin))
            .collect();

        let electrons = config
            .electrons
            .iter()
            .map(|&fraction| Electron::spawn(&boundary, fraction, config.electron_speed, PARTICLE_SIZE))
            .collect();

        let deflectors: Vec<Deflector> = config
            .deflectors
            .iter()
            .map(|d| Deflector::with_shape(d.position, d.size, d.spin, d.color))
            .collect();

        let scores = ScoreBoard::with_colors(deflectors.iter().map(|d| d.color));

        let mut atom = Self {
            boundary,
            nucleons,
            electrons,
            deflectors,
            scores,
            nucleon_radius: PARTICLE_SIZE,
            steerable: config.steerable_deflector,
            steps: 0,
            clock: FixedStep::default(),
        };
        atom.rescale();

        log::info!(
            "Atom created: {} nucleons, {} electrons, {} deflectors, radius {:.1}",
            atom.nucleons.len(),
            atom.electrons.len(),
            atom.deflectors.len(),
            atom.boundary.radius
        );
        Ok(atom)
    }

    /// Refit to a new viewport.
    ///
    /// Particle radii follow the boundary radius, nucleons are re-placed on
    /// their orbits and electrons keep their (angle, fraction of radius)
    /// coordinates. A rejected viewport leaves the atom untouched.
    pub fn resize(&mut self, width: f64, height: f64) -> SimResult<()> {
        let old = self.boundary;
        if let Err(e) = self.boundary.resize(width, height) {
            log::warn!("Ignoring resize: {}", e);
            return Err(e);
        }

        for electron in &mut self.electrons {
            electron.remap(&old, &self.boundary);
        }
        for nucleon in &mut self.nucleons {
            nucleon.place(&self.boundary);
        }
        self.rescale();

        log::info!(
            "Resized to {}x{} (radius {:.1})",
            width,
            height,
            self.boundary.radius
        );
        Ok(())
    }

    /// Nucleon radius and electron draw radius follow the boundary. The
    /// electron collision size stays at its spawn value.
    fn rescale(&mut self) {
        let radius = self.boundary.radius / PARTICLE_SCALE_DIVISOR;
        self.nucleon_radius = radius;
        for electron in &mut self.electrons {
            electron.radius = radius;
        }
    }

    /// Rotate the steerable deflector, if one is configured
    pub fn steer(&mut self, direction: Steer) -> bool {
        let Some(deflector) = self.steerable.and_then(|i| self.deflectors.get_mut(i)) else {
            return false;
        };
        let amount = match direction {
            Steer::Left => -DEFLECTOR_STEER,
            Steer::Right => DEFLECTOR_STEER,
        };
        deflector.rotate_by(amount);
        true
    }

    /// Draw boundary, nucleons, electrons and deflectors, in that order
    pub fn draw(&self, canvas: &mut impl Canvas) {
        self.boundary.draw(canvas);
        for n in &self.nucleons {
            n.draw(canvas, self.nucleon_radius);
        }
        for e in &self.electrons {
            e.draw(canvas);
        }
        for d in &self.deflectors {
            d.draw(canvas, &self.boundary);
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    pub fn deflectors(&self) -> &[Deflector] {
        &self.deflectors
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn nucleon_radius(&self) -> f64 {
        self.nucleon_radius
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn active_nucleons(&self) -> usize {
        self.nucleons.iter().filter(|n| n.active).count()
    }

    /// Every nucleon has been struck
    pub fn is_cleared(&self) -> bool {
        self.nucleons.iter().all(|n| !n.active)
    }

    /// Mutable access for hosts and tests that stage scenarios
    pub fn electrons_mut(&mut self) -> &mut Vec<Electron> {
        &mut self.electrons
    }

    pub fn nucleons_mut(&mut self) -> &mut Vec<Nucleon> {
        &mut self.nucleons
    }
}
