//! Stateless tick-strip rendering.
//!
//! Draws the ruler background, tick marks at three density tiers, and the
//! numeric labels. Nothing is retained between calls, so a redraw with the
//! same geometry and options always produces the identical result.

use eframe::egui;

use crate::constants;
use crate::types::{RulerDirection, RulerGeometry, RulerOptions};

/// Tick-density classification for a device position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTier {
    /// Full-height tick carrying a numeric label. Every 50 device pixels.
    Major,
    /// Medium tick starting at `height / 1.5`. Every 25 device pixels.
    Medium,
    /// Minor tick starting at `height / 1.2`. Every 5 device pixels.
    Minor,
}

/// Classifies the distance past the origin margin into a tick tier.
///
/// Negative deltas sit inside the reserved origin margin and get no tick.
/// Priority order matters: a multiple of 50 is also a multiple of 25 and 5,
/// so the major check runs first.
pub fn tick_tier(delta: i32) -> Option<TickTier> {
    if delta < 0 {
        None
    } else if delta % constants::MAJOR_TICK_INTERVAL == 0 {
        Some(TickTier::Major)
    } else if delta % constants::MEDIUM_TICK_INTERVAL == 0 {
        Some(TickTier::Medium)
    } else if delta % constants::MINOR_TICK_INTERVAL == 0 {
        Some(TickTier::Minor)
    } else {
        None
    }
}

/// Label text drawn at a major tick: the logical coordinate at that position.
pub fn tick_label(delta: i32, scale: f32) -> String {
    ((delta as f32 / scale).floor() as i64).to_string()
}

/// Clears the strip and draws all ticks and labels for the current geometry
/// and options.
///
/// `rect` is the screen-space rectangle of the strip; all positions are in
/// logical (CSS) pixels, with the device-pixel-ratio transform applied by the
/// painter itself.
pub fn draw(
    painter: &egui::Painter,
    rect: egui::Rect,
    geometry: &RulerGeometry,
    options: &RulerOptions,
) {
    painter.rect_filled(rect, 0.0, options.background);

    let stroke = egui::Stroke::new(options.line_width, options.line_color);
    let font = egui::FontId::proportional(options.font_size);
    let height = geometry.height;

    for p in 0..=(geometry.width.floor() as i32) {
        let delta = p as f32 - options.offset;
        if delta < 0.0 {
            // Reserved origin margin.
            continue;
        }
        if delta.fract() != 0.0 {
            continue;
        }
        let Some(tier) = tick_tier(delta as i32) else {
            continue;
        };

        let start = match tier {
            TickTier::Major => 0.0,
            TickTier::Medium => height / constants::MEDIUM_TICK_DIVISOR,
            TickTier::Minor => height / constants::MINOR_TICK_DIVISOR,
        };

        match options.direction {
            RulerDirection::Horizontal => {
                let x = rect.min.x + p as f32;
                painter.line_segment(
                    [
                        egui::pos2(x, rect.min.y + start),
                        egui::pos2(x, rect.min.y + height),
                    ],
                    stroke,
                );
                if tier == TickTier::Major {
                    painter.text(
                        egui::pos2(
                            x + constants::LABEL_PADDING,
                            rect.min.y + height / constants::MEDIUM_TICK_DIVISOR,
                        ),
                        egui::Align2::LEFT_BOTTOM,
                        tick_label(delta as i32, options.scale),
                        font.clone(),
                        options.font_color,
                    );
                }
            }
            RulerDirection::Vertical => {
                let y = rect.min.y + p as f32;
                painter.line_segment(
                    [
                        egui::pos2(rect.min.x + start, y),
                        egui::pos2(rect.min.x + height, y),
                    ],
                    stroke,
                );
                if tier == TickTier::Major {
                    painter.text(
                        egui::pos2(
                            rect.min.x + height / constants::MEDIUM_TICK_DIVISOR,
                            y + constants::LABEL_PADDING,
                        ),
                        egui::Align2::RIGHT_TOP,
                        tick_label(delta as i32, options.scale),
                        font.clone(),
                        options.font_color,
                    );
                }
            }
        }
    }
}
