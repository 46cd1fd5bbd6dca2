//! Shared application-wide constants.
//! Centralizes tweakable values used across ruler rendering and interactions.

// Tick tiers
/// Device-pixel interval between major (labelled, full-height) ticks.
pub const MAJOR_TICK_INTERVAL: i32 = 50;
/// Device-pixel interval between medium ticks.
pub const MEDIUM_TICK_INTERVAL: i32 = 25;
/// Device-pixel interval between minor ticks.
pub const MINOR_TICK_INTERVAL: i32 = 5;
/// Divisor giving a medium tick's start (and the label baseline) as `height / this`.
pub const MEDIUM_TICK_DIVISOR: f32 = 1.5;
/// Divisor giving a minor tick's start as `height / this`.
pub const MINOR_TICK_DIVISOR: f32 = 1.2;
/// Horizontal padding between a major tick and its label (in device pixels).
pub const LABEL_PADDING: f32 = 2.5;

// Ruler defaults
/// Default cross-axis thickness of the ruler strip (in device pixels).
pub const DEFAULT_THICKNESS: f32 = 20.0;
/// Default minimum primary-axis length of the ruler (in device pixels).
pub const DEFAULT_MIN_LENGTH: f32 = 400.0;
/// Default font size for tick labels and coordinate readouts.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;
/// Default stroke width for ticks and guide lines.
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

// Guides
/// Cross-axis thickness of a guide line's occupied band (in device pixels).
pub const GUIDE_THICKNESS: f32 = 3.0;
/// Extra pointer slop on each side of a guide counted as a hit.
pub const GUIDE_HIT_SLOP: f32 = 4.0;

// Readouts
/// Offset of indicator/tooltip text from the pointer or guide (in device pixels).
pub const READOUT_OFFSET: f32 = 8.0;
