//! Stateless decorative rendering of a [`Layout`].
//!
//! Draw order is fixed: background, then every connector, then every
//! wheel, so connectors always sit beneath the wheels they join. Each
//! element is drawn from its own attributes only; nothing here reads or
//! writes state across frames.

use collage_core::{BACKGROUND, Connector, Layout, Palette, Rgb, Wheel};
use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Painter, Pos2, Rect, Stroke};
use glam::Vec2;
use std::f32::consts::TAU;

/// Chain-link diameter along a connector, in pixels.
const LINK_SIZE: f32 = 10.0;
/// Fill for chain links and the blob's radiating dots.
const LINK_FILL: Color32 = Color32::from_rgb(255, 200, 100);

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

fn to_screen(rect: Rect, p: Vec2) -> Pos2 {
    rect.min + egui::vec2(p.x, p.y)
}

/// Paints the background and the full composition into `rect`.
pub fn draw_layout(painter: &Painter, rect: Rect, layout: &Layout, palettes: &[Palette]) {
    painter.rect_filled(rect, egui::CornerRadius::ZERO, color32(BACKGROUND));

    for connector in &layout.connectors {
        draw_connector(painter, rect, connector);
    }
    for wheel in &layout.wheels {
        draw_wheel(painter, rect, wheel, &palettes[wheel.palette]);
    }
}

/// Draws one connector: the main line, chain links along it, and the
/// decorated midpoint blob.
fn draw_connector(painter: &Painter, rect: Rect, conn: &Connector) {
    let color = color32(conn.color);
    let start = to_screen(rect, conn.start);
    let end = to_screen(rect, conn.end);

    painter.line_segment([start, end], Stroke::new(5.0, color));

    // Chain links, evenly spaced along the segment.
    let links = (conn.length() / (LINK_SIZE * 1.5)).floor() as i32;
    if links > 0 {
        for i in 0..=links {
            let t = i as f32 / links as f32;
            let p = start.lerp(end, t);
            painter.circle(p, LINK_SIZE * 0.5, LINK_FILL, Stroke::new(1.0, color));
            painter.circle_filled(p, LINK_SIZE * 0.2, Color32::BLACK);
        }
    }

    // Midpoint blob with radiating dots.
    let mid = to_screen(rect, conn.midpoint());
    painter.circle(mid, 10.0, Color32::WHITE, Stroke::new(3.0, color));
    painter.circle_filled(mid, 5.0, color);
    for i in 0..8 {
        let angle = i as f32 / 8.0 * TAU;
        let p = mid + egui::vec2(angle.cos(), angle.sin()) * 15.0;
        painter.circle_filled(p, 2.0, LINK_FILL);
    }
}

/// Draws one wheel, layered back to front: base disc, outer dot ring,
/// spokes, nested inner discs and dot ring, then the stem ornament.
fn draw_wheel(painter: &Painter, rect: Rect, wheel: &Wheel, palette: &Palette) {
    let center = to_screen(rect, wheel.pos);
    let r = wheel.radius;

    painter.circle_filled(center, r, color32(palette.base()));

    // Outer dot ring.
    let outer = color32(palette.outer_accent());
    for i in 0..40 {
        let angle = i as f32 / 40.0 * TAU;
        let p = center + egui::vec2(angle.cos(), angle.sin()) * (r * 0.9);
        painter.circle_filled(p, r * 0.04, outer);
    }

    // Spokes.
    let spoke = Stroke::new(r * 0.03, color32(palette.spoke()));
    for i in 0..24 {
        let angle = i as f32 / 24.0 * TAU;
        let dir = egui::vec2(angle.cos(), angle.sin());
        painter.line_segment([center + dir * (r * 0.55), center + dir * (r * 0.8)], spoke);
    }

    // Nested discs and the inner dot ring.
    painter.circle_filled(center, r * 0.3, color32(palette.inner_primary()));
    let inner_dot = color32(palette.spoke());
    for i in 0..20 {
        let angle = i as f32 / 20.0 * TAU;
        let p = center + egui::vec2(angle.cos(), angle.sin()) * (r * 0.4);
        painter.circle_filled(p, r * 0.03, inner_dot);
    }
    painter.circle_filled(center, r * 0.15, color32(palette.inner_secondary()));
    painter.circle_filled(center, r * 0.075, color32(palette.base()));

    draw_stem(painter, center, wheel, palette);
}

/// Draws the single curved stem radiating from the wheel center, capped
/// with a small disc.
fn draw_stem(painter: &Painter, center: Pos2, wheel: &Wheel, palette: &Palette) {
    let accent = color32(palette.outer_accent());
    let along = |angle: f32, dist: f32| center + egui::vec2(angle.cos(), angle.sin()) * dist;

    let r = wheel.radius;
    let start = along(wheel.stem_angle, r * 0.075);
    let end = along(wheel.stem_angle, r * 0.5);
    // Offset control point bends the stem slightly off its axis.
    let control = along(wheel.stem_angle + 0.5, r * 0.4);

    painter.add(QuadraticBezierShape::from_points_stroke(
        [start, control, end],
        false,
        Color32::TRANSPARENT,
        Stroke::new(r * 0.04, accent),
    ));
    painter.circle_filled(end, r * 0.04, accent);
}
