//! Atom configurations
//!
//! An `AtomConfig` describes one variant of the toy: the nucleon shells, where
//! electrons spawn and which deflectors ride the boundary. Two presets mirror
//! the variants the toy shipped with; anything else can be loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::{DEFLECTOR_SIZE, DEFLECTOR_SPIN, ELECTRON_SPEED};
use crate::error::{SimError, SimResult};
use crate::sim::{Spin, Tint};

/// One ring of evenly spaced nucleons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Number of nucleons on the ring
    pub count: usize,
    /// Orbit distance as a fraction of the boundary radius
    pub distance: f64,
    #[serde(default)]
    pub spin: Spin,
}

/// A deflector riding the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectorConfig {
    /// Start position, fraction of a turn from the top
    pub position: f64,
    pub color: Tint,
    /// Arc length, fraction of a turn
    #[serde(default = "default_deflector_size")]
    pub size: f64,
    /// Rotation per step, fraction of a turn
    #[serde(default = "default_deflector_spin")]
    pub spin: f64,
}

fn default_deflector_size() -> f64 {
    DEFLECTOR_SIZE
}

fn default_deflector_spin() -> f64 {
    DEFLECTOR_SPIN
}

fn default_speed() -> f64 {
    ELECTRON_SPEED
}

/// Complete description of an atom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomConfig {
    #[serde(default)]
    pub shells: Vec<ShellConfig>,
    /// Electron spawn angles, fraction of a turn from the right (east)
    #[serde(default)]
    pub electrons: Vec<f64>,
    #[serde(default)]
    pub deflectors: Vec<DeflectorConfig>,
    /// Electron speed, pixels per step
    #[serde(default = "default_speed")]
    pub electron_speed: f64,
    /// Index of a deflector the host may steer from the keyboard
    #[serde(default)]
    pub steerable_deflector: Option<usize>,
}

impl Default for AtomConfig {
    fn default() -> Self {
        Self::shells()
    }
}

impl AtomConfig {
    /// Five counter-rotating shells, four electrons, four deflectors
    pub fn shells() -> Self {
        let shell = |count, distance, spin| ShellConfig {
            count,
            distance,
            spin,
        };
        Self {
            shells: vec![
                shell(100, 0.5, Spin::Clockwise),
                shell(80, 0.4, Spin::CounterClockwise),
                shell(60, 0.3, Spin::Clockwise),
                shell(40, 0.2, Spin::CounterClockwise),
                shell(20, 0.1, Spin::Clockwise),
            ],
            electrons: vec![0.0, 0.25, 0.5, 0.75],
            deflectors: vec![
                DeflectorConfig::new(0.0, Tint::Blue),
                DeflectorConfig::new(0.5, Tint::Lime),
                DeflectorConfig::new(0.25, Tint::Red),
                DeflectorConfig::new(0.75, Tint::Cyan),
            ],
            electron_speed: ELECTRON_SPEED,
            steerable_deflector: None,
        }
    }

    /// Static outer, middle and inner rings with three deflectors
    pub fn rings() -> Self {
        let ring = |count, distance| ShellConfig {
            count,
            distance,
            spin: Spin::Still,
        };
        Self {
            shells: vec![ring(90, 0.6), ring(60, 0.4), ring(30, 0.2)],
            electrons: vec![0.0, 1.0 / 3.0, 2.0 / 3.0],
            deflectors: vec![
                DeflectorConfig::new(0.0, Tint::Blue),
                DeflectorConfig::new(1.0 / 3.0, Tint::Red),
                DeflectorConfig::new(2.0 / 3.0, Tint::Green),
            ],
            electron_speed: ELECTRON_SPEED,
            steerable_deflector: None,
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "shells" | "default" => Some(Self::shells()),
            "rings" => Some(Self::rings()),
            _ => None,
        }
    }

    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded atom config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total nucleons across all shells
    pub fn nucleon_count(&self) -> usize {
        self.shells.iter().map(|s| s.count).sum()
    }

    /// Check ranges; every problem found is reported in one message
    pub fn validate(&self) -> SimResult<()> {
        let mut problems = Vec::new();

        for (i, shell) in self.shells.iter().enumerate() {
            if !(shell.distance > 0.0 && shell.distance < 1.0) {
                problems.push(format!("shell {} distance {} outside (0, 1)", i, shell.distance));
            }
        }
        for (i, e) in self.electrons.iter().enumerate() {
            if !e.is_finite() {
                problems.push(format!("electron {} position is not finite", i));
            }
        }
        for (i, d) in self.deflectors.iter().enumerate() {
            if !d.position.is_finite() || !d.spin.is_finite() {
                problems.push(format!("deflector {} position/spin is not finite", i));
            }
            if !(d.size > 0.0 && d.size < 1.0) {
                problems.push(format!("deflector {} size {} outside (0, 1)", i, d.size));
            }
            if !d.color.scores() {
                problems.push(format!("deflector {} color {} cannot score", i, d.color.as_str()));
            }
        }
        if !(self.electron_speed.is_finite() && self.electron_speed > 0.0) {
            problems.push(format!("electron speed {} must be positive", self.electron_speed));
        }
        if let Some(idx) = self.steerable_deflector {
            if idx >= self.deflectors.len() {
                problems.push(format!("steerable deflector {} does not exist", idx));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(SimError::InvalidConfig(problems.join("; ")))
        }
    }
}

impl DeflectorConfig {
    pub fn new(position: f64, color: Tint) -> Self {
        Self {
            position,
            color,
            size: DEFLECTOR_SIZE,
            spin: DEFLECTOR_SPIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(AtomConfig::shells().validate().is_ok());
        assert!(AtomConfig::rings().validate().is_ok());
        assert_eq!(AtomConfig::shells().nucleon_count(), 300);
        assert_eq!(AtomConfig::rings().nucleon_count(), 180);
        assert_eq!(AtomConfig::default(), AtomConfig::shells());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(AtomConfig::preset("RINGS"), Some(AtomConfig::rings()));
        assert!(AtomConfig::preset("default").is_some());
        assert!(AtomConfig::preset("plum-pudding").is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "shells": [{ "count": 12, "distance": 0.5 }],
            "electrons": [0.5],
            "deflectors": [{ "position": 0.25, "color": "lime" }]
        }"#;
        let config = AtomConfig::from_json_str(json).unwrap();
        assert_eq!(config.shells[0].spin, Spin::Clockwise);
        assert_eq!(config.deflectors[0].size, DEFLECTOR_SIZE);
        assert_eq!(config.deflectors[0].spin, DEFLECTOR_SPIN);
        assert_eq!(config.electron_speed, ELECTRON_SPEED);
        assert_eq!(config.steerable_deflector, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AtomConfig::rings();
        let json = config.to_json().unwrap();
        assert_eq!(AtomConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let mut config = AtomConfig::shells();
        config.shells[0].distance = 1.5;
        config.deflectors[1].color = Tint::White;
        config.electron_speed = 0.0;
        config.steerable_deflector = Some(9);

        let err = config.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("shell 0 distance"));
        assert!(msg.contains("deflector 1 color white"));
        assert!(msg.contains("electron speed"));
        assert!(msg.contains("steerable deflector 9"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            AtomConfig::from_json_str("{ shells: nope"),
            Err(SimError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            AtomConfig::from_json_file("/nonexistent/atom.json"),
            Err(SimError::Io(_))
        ));
    }
}
