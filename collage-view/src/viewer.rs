//! Composition controller for the wheel collage, built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the single current
//! [`Layout`] and implements [`eframe::App`] to redraw it every frame,
//! regenerating from scratch whenever the canvas size changes.

use collage_core::{Layout, LayoutConfig, PALETTES};
use eframe::App;
use glam::Vec2;
use rand::rng;

use crate::render;

/// Main application state.
///
/// [`Viewer`] holds exactly one layout at a time. A rebuild constructs
/// the replacement completely before swapping it in, so the renderer
/// never observes a half-built composition, and nothing from the old
/// layout survives a rebuild.
///
/// ### Fields
/// - `layout` - The current composition; `layout.size` doubles as the
///   canvas size it was generated for.
/// - `cfg` - Generation tunables, fixed for the lifetime of the app.
/// - `rng` - Random number generator feeding layout generation.
pub struct Viewer {
    layout: Layout,
    cfg: LayoutConfig,
    rng: rand::rngs::ThreadRng,
}

impl Viewer {
    /// Creates a viewer with an empty layout.
    ///
    /// The first real layout is generated on the first frame, once the
    /// canvas size is known.
    pub fn new() -> Self {
        Self {
            layout: Layout::empty(Vec2::ZERO),
            cfg: LayoutConfig::default(),
            rng: rng(),
        }
    }

    /// Rebuilds the layout for a new canvas size.
    ///
    /// On error the previous layout stays current: the composition may
    /// be stale, but it is never torn.
    fn regenerate(&mut self, size: Vec2) {
        match Layout::generate(size, &self.cfg, &PALETTES, &mut self.rng) {
            Ok(layout) => self.layout = layout,
            Err(err) => log::error!("layout rebuild failed: {err}"),
        }
    }
}

impl App for Viewer {
    /// eframe callback that redraws the composition each frame.
    ///
    /// The central panel's rect doubles as the resize event source: when
    /// its size differs from the current layout's, the old layout is
    /// discarded and a fresh one generated before drawing. Drawing
    /// itself never mutates the layout, so repeated frames at a fixed
    /// size are idempotent.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let size = Vec2::new(rect.width(), rect.height());

                if size != self.layout.size && size.x > 0.0 && size.y > 0.0 {
                    self.regenerate(size);
                }

                let painter = ui.painter_at(rect);
                render::draw_layout(&painter, rect, &self.layout, &PALETTES);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regenerate_replaces_the_layout_wholesale() {
        let mut viewer = Viewer::new();

        viewer.regenerate(Vec2::new(800.0, 600.0));
        assert_eq!(viewer.layout.size, Vec2::new(800.0, 600.0));
        assert!(!viewer.layout.wheels.is_empty());

        viewer.regenerate(Vec2::new(400.0, 300.0));
        assert_eq!(viewer.layout.size, Vec2::new(400.0, 300.0));

        // Every wheel fits the new canvas; nothing carried over from
        // the 800x600 layout.
        for w in &viewer.layout.wheels {
            assert!(w.pos.x + w.radius <= 400.0);
            assert!(w.pos.y + w.radius <= 300.0);
        }
    }

    #[test]
    fn failed_rebuild_keeps_the_previous_layout() {
        let mut viewer = Viewer::new();

        viewer.regenerate(Vec2::new(800.0, 600.0));
        let wheels_before = viewer.layout.wheels.len();
        assert!(wheels_before > 0);

        viewer.regenerate(Vec2::new(-1.0, 600.0));
        assert_eq!(viewer.layout.size, Vec2::new(800.0, 600.0));
        assert_eq!(viewer.layout.wheels.len(), wheels_before);
    }

    #[test]
    fn new_viewer_starts_with_an_empty_layout() {
        let viewer = Viewer::new();
        assert!(viewer.layout.wheels.is_empty());
        assert!(viewer.layout.connectors.is_empty());
    }
}
