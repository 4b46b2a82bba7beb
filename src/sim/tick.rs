//! Fixed timestep simulation tick
//!
//! One `step` is one 60 Hz frame of motion: positions move by whole
//! velocity increments. `tick(dt)` converts elapsed wall time into a number of
//! steps so the simulation runs at the same pace on any display refresh rate.

use super::collision::resolve_nucleon_hits;
use super::state::Atom;
use super::tint::Tint;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::renderer::Canvas;

/// Accumulates elapsed time and hands out whole fixed steps
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f64,
    step: f64,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add `dt` seconds and return how many steps are due.
    ///
    /// Long stalls are clamped to 0.1 s and at most `max_substeps` steps run
    /// per call; the backlog beyond that is dropped.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt.min(0.1);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= self.step;
        }
        steps
    }
}

/// What happened during one or more steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub steps: u32,
    pub boundary_bounces: u32,
    /// Colors applied by deflectors, in order
    pub deflections: Vec<Tint>,
    pub nucleon_strikes: u32,
    pub points: u64,
}

impl StepReport {
    fn merge(&mut self, other: StepReport) {
        self.steps += other.steps;
        self.boundary_bounces += other.boundary_bounces;
        self.deflections.extend(other.deflections);
        self.nucleon_strikes += other.nucleon_strikes;
        self.points += other.points;
    }
}

impl Atom {
    /// Advance one fixed step.
    ///
    /// Order is fixed: update every entity, then the nucleon/electron pass,
    /// then the boundary pass with deflector checks after each bounce.
    pub fn step(&mut self) -> StepReport {
        let was_cleared = self.is_cleared();
        let mut report = StepReport {
            steps: 1,
            ..Default::default()
        };

        for n in &mut self.nucleons {
            n.update(&self.boundary);
        }
        for e in &mut self.electrons {
            e.update();
        }
        for d in &mut self.deflectors {
            d.update();
        }

        let hits = resolve_nucleon_hits(
            &mut self.nucleons,
            &mut self.electrons,
            self.nucleon_radius,
            &mut self.scores,
        );
        report.nucleon_strikes = hits.len() as u32;
        report.points = hits.iter().map(|h| h.points).sum();

        for e in &mut self.electrons {
            if e.check_boundary_collision(&self.boundary) {
                report.boundary_bounces += 1;
                if let Some(color) = e.check_deflector_collision(&self.boundary, &self.deflectors) {
                    log::debug!("Electron deflected, now {}", color.as_str());
                    report.deflections.push(color);
                }
            }
        }

        self.steps += 1;
        if !was_cleared && self.is_cleared() {
            log::info!(
                "All nucleons struck after {} steps, total score {}",
                self.steps,
                self.scores.total()
            );
        }

        report
    }

    /// Run the steps due after `dt` seconds of wall time
    pub fn tick(&mut self, dt: f64) -> StepReport {
        let due = self.clock.advance(dt);
        let mut report = StepReport::default();
        for _ in 0..due {
            report.merge(self.step());
        }
        report
    }

    /// One display frame: `tick(dt)` then draw the atom
    pub fn frame(&mut self, dt: f64, canvas: &mut impl Canvas) -> StepReport {
        let report = self.tick(dt);
        self.draw(canvas);
        report
    }
}
