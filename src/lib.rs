//! # Canvas Ruler
//!
//! An interactive measurement-and-alignment overlay for zoomable/pannable
//! canvas editors built on egui. A ruler strip runs along one axis with
//! multi-tier tick marks and labels; hovering shows a live readout of the
//! logical coordinate under the pointer, and dragging off the strip creates
//! alignment guide lines that can be repositioned or deleted.
//!
//! ## Features
//! - Bidirectional mapping between device pixels and scaled/offset logical units
//! - Three-tier tick rendering (major/medium/minor) with numeric labels
//! - Live hover position indicator
//! - Draggable, double-click-deletable alignment guides with drag tooltips
//! - Horizontal and vertical ruler directions
//! - High-density-display aware surface provisioning

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod demo;
mod ruler;
mod types;

// Re-export public types and functions
pub use ruler::{
    create_ruler_surface, tick_label, tick_tier, CoordinateMapper, GuideLine, PositionIndicator,
    RulerSurface, TickTier,
};
pub use types::*;
use demo::RulerDemoApp;

/// Runs the demo application hosting two ruler surfaces around a canvas.
///
/// This function initializes the egui application window and starts the main
/// event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use canvas_ruler::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Canvas Ruler",
        options,
        Box::new(|cc| {
            let app = RulerDemoApp::new(cc.egui_ctx.pixels_per_point())?;
            Ok(Box::new(app))
        }),
    )
}
