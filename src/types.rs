//! Core data types for the ruler overlay.
//!
//! This module defines the configuration structure, its override/merge
//! companion, the derived geometry, guide identifiers and states, and the
//! error taxonomy shared across the crate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants;

/// Unique identifier for alignment guides.
pub type GuideId = Uuid;

/// Which axis the ruler measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulerDirection {
    /// Ruler runs left-to-right along the top of the canvas; guides are vertical.
    Horizontal,
    /// Ruler runs top-to-bottom along the left of the canvas; guides are horizontal.
    Vertical,
}

/// Lifecycle state of an alignment guide.
///
/// `Destroyed` is terminal and absorbing: a destroyed guide never re-enters
/// `Idle` or `Dragging`, and every operation on it is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideState {
    /// Guide is placed and not being interacted with.
    Idle,
    /// Guide follows the pointer; at most one guide per surface is in this state.
    Dragging,
    /// Guide has been removed and will never be reused.
    Destroyed,
}

/// Errors surfaced to callers of the ruler API.
///
/// Listener-lifecycle faults (double-detach, operating on a destroyed guide)
/// are deliberately *not* represented here: pointer-event timing is outside
/// the caller's control, so those are handled as defensive no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulerError {
    /// A supplied configuration value is unusable (e.g. non-positive scale).
    /// The previously valid configuration is retained unchanged.
    #[error("invalid ruler configuration: {0}")]
    Configuration(String),
}

/// Configuration for a ruler surface.
///
/// Mutable only through [`RulerSurface`](crate::ruler::RulerSurface) methods,
/// which validate before committing so the held options are always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerOptions {
    /// Primary axis of measurement.
    pub direction: RulerDirection,
    /// Cross-axis size of the ruler strip, in device pixels.
    pub thickness: f32,
    /// Minimum primary-axis extent, in device pixels. The strip never renders
    /// shorter than this even when the host container is smaller (or empty).
    pub min_length: f32,
    /// Strip background fill.
    #[serde(skip)]
    pub background: egui::Color32,
    /// Tick and guide stroke color.
    #[serde(skip)]
    pub line_color: egui::Color32,
    /// Tick label and readout text color.
    #[serde(skip)]
    pub font_color: egui::Color32,
    /// Font size for tick labels and readouts.
    pub font_size: f32,
    /// Stroke width for ticks and guides.
    pub line_width: f32,
    /// Whether hovering the strip shows the live position indicator.
    pub show_indicator: bool,
    /// Whether a dragged guide shows a coordinate tooltip.
    pub show_tooltip: bool,
    /// Logical units per device pixel. Must be finite and `> 0`.
    pub scale: f32,
    /// Logical-origin shift along the primary axis, in device pixels. `>= 0`.
    pub offset: f32,
    /// Device pixel ratio: physical pixels per logical pixel.
    pub pixels_per_point: f32,
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            direction: RulerDirection::Horizontal,
            thickness: constants::DEFAULT_THICKNESS,
            min_length: constants::DEFAULT_MIN_LENGTH,
            background: egui::Color32::from_gray(32),
            line_color: egui::Color32::from_gray(140),
            font_color: egui::Color32::from_gray(200),
            font_size: constants::DEFAULT_FONT_SIZE,
            line_width: constants::DEFAULT_LINE_WIDTH,
            show_indicator: true,
            show_tooltip: true,
            scale: 1.0,
            offset: 0.0,
            pixels_per_point: 1.0,
        }
    }
}

impl RulerOptions {
    /// Checks every field for usability.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the options can be committed, or a
    /// [`RulerError::Configuration`] naming the offending field.
    pub fn validate(&self) -> Result<(), RulerError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RulerError::Configuration(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(RulerError::Configuration(format!(
                "thickness must be finite and >= 0, got {}",
                self.thickness
            )));
        }
        if !self.offset.is_finite() || self.offset < 0.0 {
            return Err(RulerError::Configuration(format!(
                "offset must be finite and >= 0, got {}",
                self.offset
            )));
        }
        if !self.min_length.is_finite() || self.min_length < 0.0 {
            return Err(RulerError::Configuration(format!(
                "min_length must be finite and >= 0, got {}",
                self.min_length
            )));
        }
        if !self.pixels_per_point.is_finite() || self.pixels_per_point <= 0.0 {
            return Err(RulerError::Configuration(format!(
                "pixels_per_point must be finite and > 0, got {}",
                self.pixels_per_point
            )));
        }
        Ok(())
    }

    /// Applies partial overrides on top of these options.
    ///
    /// The merge rule is shallow-replace per top-level field: a `Some` in the
    /// overrides replaces the whole field value, a `None` keeps the current
    /// value. No deep merging happens anywhere.
    pub fn merged(&self, overrides: &RulerOverrides) -> RulerOptions {
        RulerOptions {
            direction: overrides.direction.unwrap_or(self.direction),
            thickness: overrides.thickness.unwrap_or(self.thickness),
            min_length: overrides.min_length.unwrap_or(self.min_length),
            background: overrides.background.unwrap_or(self.background),
            line_color: overrides.line_color.unwrap_or(self.line_color),
            font_color: overrides.font_color.unwrap_or(self.font_color),
            font_size: overrides.font_size.unwrap_or(self.font_size),
            line_width: overrides.line_width.unwrap_or(self.line_width),
            show_indicator: overrides.show_indicator.unwrap_or(self.show_indicator),
            show_tooltip: overrides.show_tooltip.unwrap_or(self.show_tooltip),
            scale: overrides.scale.unwrap_or(self.scale),
            offset: overrides.offset.unwrap_or(self.offset),
            pixels_per_point: overrides.pixels_per_point.unwrap_or(self.pixels_per_point),
        }
    }

    /// Serializes the options to JSON (e.g. for persisting editor settings).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes options from JSON produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Partial configuration supplied at construction time.
///
/// Every field mirrors one [`RulerOptions`] field; `None` means "keep the
/// default". See [`RulerOptions::merged`] for the merge rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulerOverrides {
    /// Overrides [`RulerOptions::direction`].
    pub direction: Option<RulerDirection>,
    /// Overrides [`RulerOptions::thickness`].
    pub thickness: Option<f32>,
    /// Overrides [`RulerOptions::min_length`].
    pub min_length: Option<f32>,
    /// Overrides [`RulerOptions::background`].
    pub background: Option<egui::Color32>,
    /// Overrides [`RulerOptions::line_color`].
    pub line_color: Option<egui::Color32>,
    /// Overrides [`RulerOptions::font_color`].
    pub font_color: Option<egui::Color32>,
    /// Overrides [`RulerOptions::font_size`].
    pub font_size: Option<f32>,
    /// Overrides [`RulerOptions::line_width`].
    pub line_width: Option<f32>,
    /// Overrides [`RulerOptions::show_indicator`].
    pub show_indicator: Option<bool>,
    /// Overrides [`RulerOptions::show_tooltip`].
    pub show_tooltip: Option<bool>,
    /// Overrides [`RulerOptions::scale`].
    pub scale: Option<f32>,
    /// Overrides [`RulerOptions::offset`].
    pub offset: Option<f32>,
    /// Overrides [`RulerOptions::pixels_per_point`].
    pub pixels_per_point: Option<f32>,
}

/// Derived extent of the ruler strip, in device pixels.
///
/// `width` is the primary-axis length regardless of direction; `height` is
/// the cross-axis thickness. Recomputed whenever options or the host
/// container extent change; never stored stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerGeometry {
    /// Primary-axis length. Invariant: `width >= max(container_extent, min_length)`.
    pub width: f32,
    /// Cross-axis thickness.
    pub height: f32,
}

impl RulerGeometry {
    /// Derives geometry from options and the host container's primary-axis
    /// extent.
    ///
    /// A zero or negative container extent is degraded gracefully: the strip
    /// falls back to `min_length` instead of failing.
    pub fn derive(options: &RulerOptions, container_extent: f32) -> Self {
        let extent = if container_extent.is_finite() && container_extent > 0.0 {
            container_extent
        } else {
            log::warn!(
                "ruler container extent {container_extent} unusable; falling back to min_length {}",
                options.min_length
            );
            0.0
        };
        Self {
            width: extent.max(options.min_length),
            height: options.thickness,
        }
    }

    /// Screen-space size of the strip for the given direction.
    pub fn strip_size(&self, direction: RulerDirection) -> egui::Vec2 {
        match direction {
            RulerDirection::Horizontal => egui::vec2(self.width, self.height),
            RulerDirection::Vertical => egui::vec2(self.height, self.width),
        }
    }

    /// Physical pixel dimensions of the backing surface: logical size scaled
    /// by the device pixel ratio. Drawing itself stays in logical pixels; the
    /// painter applies the ratio transform.
    pub fn physical_size(&self, pixels_per_point: f32) -> (u32, u32) {
        (
            (self.width * pixels_per_point).round() as u32,
            (self.height * pixels_per_point).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert!(RulerOptions::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_scale() {
        let mut options = RulerOptions::default();
        options.scale = 0.0;
        assert!(matches!(
            options.validate(),
            Err(RulerError::Configuration(_))
        ));
        options.scale = -1.5;
        assert!(options.validate().is_err());
        options.scale = f32::NAN;
        assert!(options.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_thickness_and_offset() {
        let mut options = RulerOptions::default();
        options.thickness = -1.0;
        assert!(options.validate().is_err());

        let mut options = RulerOptions::default();
        options.offset = -0.5;
        assert!(options.validate().is_err());
    }

    #[test]
    fn merge_is_shallow_per_field() {
        let base = RulerOptions::default();
        let overrides = RulerOverrides {
            scale: Some(2.0),
            offset: Some(40.0),
            direction: Some(RulerDirection::Vertical),
            ..Default::default()
        };
        let merged = base.merged(&overrides);
        assert_eq!(merged.scale, 2.0);
        assert_eq!(merged.offset, 40.0);
        assert_eq!(merged.direction, RulerDirection::Vertical);
        // Untouched fields keep the base value wholesale.
        assert_eq!(merged.thickness, base.thickness);
        assert_eq!(merged.min_length, base.min_length);
        assert_eq!(merged.show_tooltip, base.show_tooltip);
    }

    #[test]
    fn geometry_honors_min_length_floor() {
        let options = RulerOptions {
            min_length: 400.0,
            ..Default::default()
        };
        let small = RulerGeometry::derive(&options, 100.0);
        assert_eq!(small.width, 400.0);

        let large = RulerGeometry::derive(&options, 1000.0);
        assert_eq!(large.width, 1000.0);
    }

    #[test]
    fn geometry_degrades_zero_extent_to_min_length() {
        let options = RulerOptions::default();
        let geometry = RulerGeometry::derive(&options, 0.0);
        assert_eq!(geometry.width, options.min_length);
        let geometry = RulerGeometry::derive(&options, -50.0);
        assert_eq!(geometry.width, options.min_length);
    }

    #[test]
    fn physical_size_scales_by_pixel_ratio() {
        let geometry = RulerGeometry {
            width: 400.0,
            height: 20.0,
        };
        assert_eq!(geometry.physical_size(2.0), (800, 40));
        assert_eq!(geometry.physical_size(1.0), (400, 20));
    }

    #[test]
    fn options_json_round_trip_preserves_numeric_fields() {
        let options = RulerOptions {
            scale: 2.0,
            offset: 40.0,
            thickness: 24.0,
            ..Default::default()
        };
        let json = options.to_json().expect("serialize");
        let back = RulerOptions::from_json(&json).expect("deserialize");
        assert_eq!(back.scale, 2.0);
        assert_eq!(back.offset, 40.0);
        assert_eq!(back.thickness, 24.0);
    }
}
