//! The ruler subsystem: measurement strip, hover readout, and alignment
//! guides for a zoomable canvas.
//!
//! # Module Organization
//!
//! - `mapper` - Bidirectional device-pixel / logical coordinate mapping
//! - `ticks` - Stateless tick-strip and label rendering
//! - `indicator` - Transient hover readout of the pointer's logical position
//! - `guide` - Draggable, deletable alignment guide lines
//! - `surface` - The orchestrator owning options, geometry, indicator, and guides

mod guide;
mod indicator;
mod mapper;
mod surface;
mod ticks;

pub use guide::GuideLine;
pub use indicator::PositionIndicator;
pub use mapper::CoordinateMapper;
pub use surface::{create_ruler_surface, RulerSurface};
pub use ticks::{tick_label, tick_tier, TickTier};
