//! Transient hover readout showing the logical coordinate under the pointer.

use eframe::egui;

use crate::constants;
use crate::ruler::mapper::CoordinateMapper;
use crate::types::{RulerDirection, RulerOptions};

/// Live cursor-position readout.
///
/// At most one exists per surface; the surface owns it in an `Option` slot
/// and replaces the whole value on pointer-enter, so the single-instance
/// invariant holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionIndicator {
    device_pos: f32,
    logical: i32,
}

impl PositionIndicator {
    /// Builds a fresh indicator at the pointer's primary-axis position.
    pub fn new(device_pos: f32, mapper: &CoordinateMapper) -> Self {
        Self {
            device_pos,
            logical: mapper.to_logical(device_pos),
        }
    }

    /// Moves the existing readout in place; no new instance is allocated.
    pub fn move_to(&mut self, device_pos: f32, mapper: &CoordinateMapper) {
        self.device_pos = device_pos;
        self.logical = mapper.to_logical(device_pos);
    }

    /// Device-pixel position along the primary axis.
    pub fn device_pos(&self) -> f32 {
        self.device_pos
    }

    /// Logical coordinate currently shown.
    pub fn logical(&self) -> i32 {
        self.logical
    }

    /// Draws a hairline across the strip plus the coordinate text next to
    /// the pointer.
    pub fn draw(&self, painter: &egui::Painter, strip: egui::Rect, options: &RulerOptions) {
        let stroke = egui::Stroke::new(options.line_width, options.font_color);
        let font = egui::FontId::proportional(options.font_size);
        let text = self.logical.to_string();
        match options.direction {
            RulerDirection::Horizontal => {
                let x = strip.min.x + self.device_pos;
                painter.line_segment(
                    [egui::pos2(x, strip.min.y), egui::pos2(x, strip.max.y)],
                    stroke,
                );
                painter.text(
                    egui::pos2(x + constants::READOUT_OFFSET, strip.min.y),
                    egui::Align2::LEFT_TOP,
                    text,
                    font,
                    options.font_color,
                );
            }
            RulerDirection::Vertical => {
                let y = strip.min.y + self.device_pos;
                painter.line_segment(
                    [egui::pos2(strip.min.x, y), egui::pos2(strip.max.x, y)],
                    stroke,
                );
                painter.text(
                    egui::pos2(strip.min.x, y + constants::READOUT_OFFSET),
                    egui::Align2::LEFT_TOP,
                    text,
                    font,
                    options.font_color,
                );
            }
        }
    }
}
