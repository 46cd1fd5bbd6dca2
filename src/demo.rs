//! Demo host application: a pannable grid canvas framed by a horizontal and
//! a vertical ruler, with a toolbar driving the public surface API.
//!
//! This is the reference integration of [`RulerSurface`]; the library itself
//! has no opinion about window layout.

use eframe::egui;

use crate::constants;
use crate::ruler::{create_ruler_surface, RulerSurface};
use crate::types::{RulerDirection, RulerError, RulerOverrides};

/// Grid spacing of the demo canvas, in device pixels.
const CANVAS_GRID: f32 = 50.0;

/// The demo application hosting two ruler surfaces around a canvas.
pub struct RulerDemoApp {
    horizontal: RulerSurface,
    vertical: RulerSurface,
    zoom: f32,
    guides_visible: bool,
}

impl RulerDemoApp {
    /// Builds the demo with both rulers at the host's device pixel ratio.
    ///
    /// # Errors
    ///
    /// Propagates [`RulerError::Configuration`] from surface construction.
    pub fn new(pixels_per_point: f32) -> Result<Self, RulerError> {
        let shared = RulerOverrides {
            pixels_per_point: Some(pixels_per_point),
            ..Default::default()
        };
        let horizontal = create_ruler_surface(
            0.0,
            &RulerOverrides {
                direction: Some(RulerDirection::Horizontal),
                ..shared.clone()
            },
        )?;
        let vertical = create_ruler_surface(
            0.0,
            &RulerOverrides {
                direction: Some(RulerDirection::Vertical),
                ..shared
            },
        )?;
        Ok(Self {
            horizontal,
            vertical,
            zoom: 1.0,
            guides_visible: true,
        })
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Zoom");
            let slider = ui.add(egui::Slider::new(&mut self.zoom, 0.25..=5.0).logarithmic(true));
            if slider.changed() {
                for surface in [&mut self.horizontal, &mut self.vertical] {
                    if let Err(err) = surface.set_scale(self.zoom) {
                        log::error!("rejected zoom change: {err}");
                    }
                }
            }

            if ui
                .checkbox(&mut self.guides_visible, "Show guides")
                .changed()
            {
                self.horizontal.toggle_guide_visibility(self.guides_visible);
                self.vertical.toggle_guide_visibility(self.guides_visible);
            }

            if ui.button("Clear guides").clicked() {
                self.horizontal.clear_guides();
                self.vertical.clear_guides();
            }

            ui.label(format!(
                "{} + {} guides",
                self.horizontal.guides().len(),
                self.vertical.guides().len()
            ));
        });
    }

    fn draw_canvas(&self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

        let stroke = egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(128, 128, 128, 32),
        );
        let mut x = rect.min.x;
        while x <= rect.max.x {
            painter.line_segment(
                [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                stroke,
            );
            x += CANVAS_GRID;
        }
        let mut y = rect.min.y;
        while y <= rect.max.y {
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
            y += CANVAS_GRID;
        }
    }
}

impl eframe::App for RulerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::TopBottomPanel::top("ruler_horizontal")
            .exact_height(constants::DEFAULT_THICKNESS)
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.horizontal.show(ui);
            });

        egui::SidePanel::left("ruler_vertical")
            .exact_width(constants::DEFAULT_THICKNESS)
            .resizable(false)
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.vertical.show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}
