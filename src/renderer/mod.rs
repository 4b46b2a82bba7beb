//! Drawing layer
//!
//! The simulation never touches pixels. Entities issue declarative draw
//! intents to a [`Canvas`], which the host implements for its surface: the
//! browser 2D context on the web, [`MeshCanvas`] for tessellated output.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshCanvas, TextLabel};
pub use vertex::Vertex;

use glam::DVec2;

use crate::consts::{HUD_FONT, HUD_LINE_HEIGHT};
use crate::sim::{ScoreBoard, Tint};

/// A render surface accepting canvas-2D style draw intents.
///
/// Angles are radians, clockwise on a y-down screen, as in the HTML canvas.
pub trait Canvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Stroke the arc with the current stroke color and line width
    fn stroke_arc(&mut self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64);
    /// Fill the sector with the current fill color
    fn fill_arc(&mut self, center: DVec2, radius: f64, theta_start: f64, theta_end: f64);
    fn set_stroke_color(&mut self, color: Tint);
    fn set_fill_color(&mut self, color: Tint);
    fn set_line_width(&mut self, width: f64);
    /// CSS font shorthand, e.g. `"48px arial"`
    fn set_font(&mut self, font: &str);
    fn reset_font(&mut self);
    /// Fill text with the current fill color, `position` is the baseline start
    fn fill_text(&mut self, text: &str, position: DVec2);
}

/// Score HUD: one line per color, drawn in that color, top-left aligned
pub fn draw_scoreboard(canvas: &mut impl Canvas, scores: &ScoreBoard) {
    canvas.set_font(HUD_FONT);
    let mut line = HUD_LINE_HEIGHT;
    for (color, points) in scores.iter() {
        canvas.set_fill_color(color);
        canvas.fill_text(&points.to_string(), DVec2::new(0.0, line));
        line += HUD_LINE_HEIGHT;
    }
    canvas.reset_font();
}


#[cfg(test)]
mod tests {
    use super::testing::{DrawCommand, RecordingCanvas};
    use super::*;
    use crate::settings::AtomConfig;
    use crate::sim::Atom;

    #[test]
    fn test_scoreboard_lines() {
        let mut scores = ScoreBoard::with_colors([Tint::Blue, Tint::Red]);
        scores.award(Tint::Red);

        let mut canvas = RecordingCanvas::default();
        draw_scoreboard(&mut canvas, &scores);

        assert_eq!(canvas.commands[0], DrawCommand::Font("48px arial".to_string()));
        assert_eq!(canvas.texts(), vec!["0", "10"]);
        assert!(canvas.commands.contains(&DrawCommand::Text {
            text: "10".to_string(),
            position: DVec2::new(0.0, 80.0),
        }));
        assert_eq!(canvas.commands.last(), Some(&DrawCommand::ResetFont));
    }

    #[test]
    fn test_atom_draw_order() {
        let atom = Atom::new(&AtomConfig::rings(), 800.0, 600.0).unwrap();
        let mut canvas = RecordingCanvas::default();
        atom.draw(&mut canvas);

        // Boundary rings come first, at radius ± 5
        let r = atom.boundary().radius;
        match (&canvas.commands[1], &canvas.commands[2]) {
            (
                DrawCommand::StrokeArc { radius: outer, .. },
                DrawCommand::StrokeArc { radius: inner, .. },
            ) => {
                assert!((outer - (r + 5.0)).abs() < 1e-9);
                assert!((inner - (r - 5.0)).abs() < 1e-9);
            }
            other => panic!("unexpected boundary commands {:?}", other),
        }
        // One fill per nucleon and per electron
        assert_eq!(canvas.fills(), 180 + 3);
        // Deflectors are drawn last, with the wide line
        assert!(canvas.commands.contains(&DrawCommand::LineWidth(10.0)));
        assert_eq!(canvas.commands.last(), Some(&DrawCommand::Stroke(Tint::White)));
    }

    #[test]
    fn test_inactive_nucleons_are_not_drawn() {
        let mut atom = Atom::new(&AtomConfig::rings(), 800.0, 600.0).unwrap();
        for n in atom.nucleons_mut().iter_mut().take(30) {
            n.deactivate();
        }
        let mut canvas = RecordingCanvas::default();
        atom.draw(&mut canvas);
        assert_eq!(canvas.fills(), 150 + 3);
    }
}
