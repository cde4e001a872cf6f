//! Application entry point for the 2D wheel collage.
//!
//! This binary sets up eframe/egui and delegates layout ownership and
//! rendering to [`Viewer`] from the `viewer` module.

mod render;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Initializes the logger, then launches the main window titled
/// `"2D Wheel Collage"`. All state and rendering are handled by
/// [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "2D Wheel Collage",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}
