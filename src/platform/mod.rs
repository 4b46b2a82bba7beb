//! Platform abstraction layer
//!
//! Viewport sizing shared by both hosts, plus the browser glue (wasm32 only):
//! the 2D-context `Canvas` and window measurements.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::{SimError, SimResult};

/// Drawable area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::HEADLESS
    }
}

impl Viewport {
    /// Size used when there is no window to measure
    pub const HEADLESS: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    pub fn new(width: f64, height: f64) -> SimResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_viewport() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, f64::NAN).is_err());
        let vp = Viewport::new(1920.0, 1080.0).unwrap();
        assert_eq!((vp.width, vp.height), (1920.0, 1080.0));
        assert_eq!(Viewport::default(), Viewport::HEADLESS);
    }
}
