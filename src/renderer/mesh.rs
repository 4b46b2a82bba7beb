//! Tessellating canvas
//!
//! `MeshCanvas` turns draw intents into a triangle list of [`Vertex`] that
//! can be uploaded as-is (`bytemuck::cast_slice`). Text has no geometry here;
//! it is kept as labels for the host to place.

use glam::DVec2;

use super::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::sim::{ArcSegment, Tint};

/// Segments per radian for tessellated curves
const SEGMENTS_PER_RADIAN: f64 = 16.0;

/// A text draw intent
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: DVec2,
    pub color: Tint,
    pub font: String,
}

#[derive(Debug)]
pub struct MeshCanvas {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
    stroke: Tint,
    fill: Tint,
    line_width: f64,
    font: String,
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCanvas {
    /// Font restored by `reset_font`, the canvas 2D default
    pub const DEFAULT_FONT: &'static str = "10px sans-serif";

    /// Empty frame with white stroke and fill and 1px lines
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            labels: Vec::new(),
            stroke: Tint::White,
            fill: Tint::White,
            line_width: 1.0,
            font: Self::DEFAULT_FONT.to_string(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for MeshCanvas {
    /// Any clear starts a new frame
    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn stroke_arc(&mut self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64) {
        let arc = ArcSegment::new(radius, self.line_width, theta_start, theta_end);
        self.vertices.extend(shapes::arc_band(
            center,
            &arc,
            self.stroke.rgba(),
            SEGMENTS_PER_RADIAN,
        ));
    }

    fn fill_arc(&mut self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64) {
        self.vertices.extend(shapes::sector(
            center,
            radius,
            theta_start,
            theta_end,
            self.fill.rgba(),
            SEGMENTS_PER_RADIAN,
        ));
    }

    fn set_stroke_color(&mut self, color: Tint) {
        self.stroke = color;
    }

    fn set_fill_color(&mut self, color: Tint) {
        self.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn reset_font(&mut self) {
        self.font = Self::DEFAULT_FONT.to_string();
    }

    fn fill_text(&mut self, text: &str, position: DVec2) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            position,
            color: self.fill,
            font: self.font.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_scoreboard;
    use crate::settings::AtomConfig;
    use crate::sim::Atom;
    use std::f64::consts::TAU;

    #[test]
    fn test_stroke_uses_line_width_and_color() {
        let mut canvas = MeshCanvas::new();
        canvas.set_stroke_color(Tint::Lime);
        canvas.set_line_width(10.0);
        canvas.stroke_arc(DVec2::ZERO, 100.0, 0.0, 1.0);

        assert!(!canvas.vertices().is_empty());
        for v in canvas.vertices() {
            assert_eq!(v.color, Tint::Lime.rgba());
            let r = (v.position[0].powi(2) + v.position[1].powi(2)).sqrt();
            assert!(r > 94.99 && r < 105.01);
        }
    }

    #[test]
    fn test_clear_starts_new_frame() {
        let mut canvas = MeshCanvas::new();
        canvas.fill_arc(DVec2::ZERO, 5.0, 0.0, TAU);
        canvas.fill_text("0", DVec2::ZERO);
        canvas.clear_rect(0.0, 0.0, 800.0, 600.0);
        assert!(canvas.vertices().is_empty());
        assert!(canvas.labels().is_empty());
    }

    #[test]
    fn test_frame_of_atom_and_hud() {
        let atom = Atom::new(&AtomConfig::shells(), 800.0, 600.0).unwrap();
        let mut canvas = MeshCanvas::new();
        canvas.clear_rect(0.0, 0.0, 800.0, 600.0);
        draw_scoreboard(&mut canvas, atom.scores());
        atom.draw(&mut canvas);

        assert!(canvas.triangle_count() > 300);
        assert_eq!(canvas.as_bytes().len(), canvas.vertices().len() * Vertex::STRIDE);

        let labels = canvas.labels();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0].color, Tint::Blue);
        assert_eq!(labels[0].font, "48px arial");
        assert_eq!(labels[3].position, DVec2::new(0.0, 160.0));
    }
}
