//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen coordinates.

use glam::DVec2;

use super::vertex::Vertex;
use crate::sim::ArcSegment;

#[inline]
fn vertex(p: DVec2, color: [f32; 4]) -> Vertex {
    Vertex::new(p.x as f32, p.y as f32, color)
}

/// Number of segments for a span, never fewer than 4
#[inline]
fn segment_count(span: f64, segments_per_radian: f64) -> u32 {
    ((span.abs() * segments_per_radian) as u32).max(4)
}

/// Generate vertices for a filled circular sector (a full circle when the
/// span is 2π)
pub fn sector(
    center: DVec2,
    radius: f64,
    theta_start: f64,
    theta_end: f64,
    color: [f32; 4],
    segments_per_radian: f64,
) -> Vec<Vertex> {
    let span = theta_end - theta_start;
    let segments = segment_count(span, segments_per_radian);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = theta_start + span * i as f64 / segments as f64;
        let theta2 = theta_start + span * (i + 1) as f64 / segments as f64;

        // Triangle from center to edge
        vertices.push(vertex(center, color));
        vertices.push(vertex(center + DVec2::from_angle(theta1) * radius, color));
        vertices.push(vertex(center + DVec2::from_angle(theta2) * radius, color));
    }

    vertices
}

/// Generate vertices for an arc segment (thick arc band) around `center`
pub fn arc_band(
    center: DVec2,
    arc: &ArcSegment,
    color: [f32; 4],
    segments_per_radian: f64,
) -> Vec<Vertex> {
    let span = arc.angular_span();
    let num_segments = segment_count(span, segments_per_radian);
    let inner_r = arc.inner_radius();
    let outer_r = arc.outer_radius();

    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);

    for i in 0..num_segments {
        let t1 = i as f64 / num_segments as f64;
        let t2 = (i + 1) as f64 / num_segments as f64;

        let dir1 = DVec2::from_angle(arc.theta_start + t1 * span);
        let dir2 = DVec2::from_angle(arc.theta_start + t2 * span);

        let inner1 = center + dir1 * inner_r;
        let outer1 = center + dir1 * outer_r;
        let inner2 = center + dir2 * inner_r;
        let outer2 = center + dir2 * outer_r;

        // Two triangles per segment
        vertices.push(vertex(inner1, color));
        vertices.push(vertex(outer1, color));
        vertices.push(vertex(inner2, color));

        vertices.push(vertex(inner2, color));
        vertices.push(vertex(outer1, color));
        vertices.push(vertex(outer2, color));
    }

    vertices
}
