//! Browser glue: `Canvas` over a `CanvasRenderingContext2d`

use glam::DVec2;
use web_sys::{CanvasRenderingContext2d, Window};

use super::Viewport;
use crate::renderer::Canvas;
use crate::sim::Tint;

/// Canvas 2D default font, restored by `reset_font`
const DEFAULT_FONT: &str = "10px sans-serif";

pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn path_arc(&self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64) -> bool {
        self.ctx.begin_path();
        match self.ctx.arc(center.x, center.y, radius, theta_start, theta_end) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("arc rejected (radius {radius}): {e:?}");
                false
            }
        }
    }
}

impl Canvas for WebCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn stroke_arc(&mut self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64) {
        if self.path_arc(center, radius, theta_start, theta_end) {
            self.ctx.stroke();
        }
    }

    fn fill_arc(&mut self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64) {
        if self.path_arc(center, radius, theta_start, theta_end) {
            self.ctx.fill();
        }
    }

    fn set_stroke_color(&mut self, color: Tint) {
        self.ctx.set_stroke_style_str(color.as_str());
    }

    fn set_fill_color(&mut self, color: Tint) {
        self.ctx.set_fill_style_str(color.as_str());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn reset_font(&mut self) {
        self.ctx.set_font(DEFAULT_FONT);
    }

    fn fill_text(&mut self, text: &str, position: DVec2) {
        if let Err(e) = self.ctx.fill_text(text, position.x, position.y) {
            log::warn!("fill_text failed: {e:?}");
        }
    }
}

/// Current inner size of the browser window
pub fn window_viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Viewport::new(width, height).ok()
}
