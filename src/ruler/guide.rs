//! Alignment guide lines: draggable, deletable markers perpendicular to the
//! ruler's primary axis.
//!
//! Each guide runs a small state machine (`Idle` → `Dragging` → `Idle`,
//! `Idle` → `Destroyed`) and guards its movement-handler lifecycle so that
//! detach happens exactly once regardless of whether the drag ends via
//! pointer-up or a mid-drag destroy.

use eframe::egui;
use uuid::Uuid;

use crate::constants;
use crate::ruler::mapper::CoordinateMapper;
use crate::types::{GuideId, GuideState, RulerDirection, RulerOptions};

/// Pointer and guide position captured when a drag starts; movement is
/// applied as a cumulative delta against this anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer_start: f32,
    position_start: f32,
}

/// A single alignment guide owned by a ruler surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    /// Stable identity, assigned at creation and never reused.
    pub id: GuideId,
    /// Device-pixel offset along the primary axis.
    /// Invariant: `0 <= axis_position <= container_extent - GUIDE_THICKNESS`.
    pub axis_position: f32,
    /// Current lifecycle state.
    pub state: GuideState,
    /// Whether the coordinate tooltip is currently shown (styling flag,
    /// toggled while dragging).
    pub tooltip_visible: bool,
    /// Whether the guide is rendered at all. Toggled wholesale by the
    /// surface without destroying state.
    pub visible: bool,
    anchor: Option<DragAnchor>,
    move_handler_attached: bool,
}

impl GuideLine {
    /// Creates a guide at the given device position, clamped into the
    /// container.
    pub fn new(axis_position: f32, container_extent: f32) -> Self {
        let guide = Self {
            id: Uuid::new_v4(),
            axis_position: clamp_position(axis_position, container_extent),
            state: GuideState::Idle,
            tooltip_visible: false,
            visible: true,
            anchor: None,
            move_handler_attached: false,
        };
        log::debug!("guide {} created at {}", guide.id, guide.axis_position);
        guide
    }

    /// Whether this guide has reached its terminal state.
    pub fn is_destroyed(&self) -> bool {
        self.state == GuideState::Destroyed
    }

    /// Whether this guide currently follows the pointer.
    pub fn is_dragging(&self) -> bool {
        self.state == GuideState::Dragging
    }

    /// Number of currently attached movement handlers (0 or 1). Exposed so
    /// lifecycle tests can assert nothing leaks.
    pub fn attached_handlers(&self) -> usize {
        usize::from(self.move_handler_attached)
    }

    /// Whether the pointer position (primary axis, device pixels) falls on
    /// this guide's band.
    pub fn hit_test(&self, device_pos: f32) -> bool {
        if self.is_destroyed() || !self.visible {
            return false;
        }
        let half = constants::GUIDE_THICKNESS / 2.0 + constants::GUIDE_HIT_SLOP;
        (device_pos - self.axis_position).abs() <= half
    }

    /// `Idle --pointer_down--> Dragging`. Attaches the movement handler and
    /// records the drag anchor.
    ///
    /// # Returns
    ///
    /// `true` if the drag started; `false` if the guide was not idle (a
    /// destroyed or already-dragging guide ignores the gesture).
    pub fn begin_drag(&mut self, pointer: f32) -> bool {
        if self.state != GuideState::Idle {
            return false;
        }
        self.state = GuideState::Dragging;
        self.anchor = Some(DragAnchor {
            pointer_start: pointer,
            position_start: self.axis_position,
        });
        self.move_handler_attached = true;
        self.tooltip_visible = true;
        true
    }

    /// Applies the cumulative pointer delta since drag start, clamping into
    /// `[0, container_extent - GUIDE_THICKNESS]`. No-op unless dragging.
    pub fn drag_to(&mut self, pointer: f32, container_extent: f32) {
        let Some(anchor) = self.anchor else {
            return;
        };
        if self.state != GuideState::Dragging {
            return;
        }
        let candidate = anchor.position_start + (pointer - anchor.pointer_start);
        self.axis_position = clamp_position(candidate, container_extent);
    }

    /// `Dragging --pointer_up--> Idle`. Detaches the movement handler.
    pub fn end_drag(&mut self) {
        if self.state != GuideState::Dragging {
            return;
        }
        self.state = GuideState::Idle;
        self.anchor = None;
        self.tooltip_visible = false;
        self.detach_move_handler();
    }

    /// Detaches the movement handler if attached.
    ///
    /// The same stored handler reference is used for attach and detach, and
    /// a second detach is a silent no-op, so repeated calls (pointer-up after
    /// destroy, destroy after pointer-up) can never double-remove.
    pub fn detach_move_handler(&mut self) -> bool {
        if self.move_handler_attached {
            self.move_handler_attached = false;
            true
        } else {
            false
        }
    }

    /// Destroys the guide. Idempotent: repeated calls succeed, never touch
    /// already-removed visuals, and always leave zero attached handlers.
    ///
    /// A mid-drag destroy also ends the drag so the movement handler cannot
    /// later mutate a guide that no longer renders.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.detach_move_handler();
        self.anchor = None;
        self.state = GuideState::Destroyed;
        self.tooltip_visible = false;
        self.visible = false;
        log::debug!("guide {} destroyed", self.id);
    }

    /// Re-clamps the stored device position after the container shrank or
    /// grew, preserving the position invariant without re-deriving from the
    /// logical coordinate.
    pub(crate) fn clamp_into(&mut self, container_extent: f32) {
        if self.is_destroyed() {
            return;
        }
        self.axis_position = clamp_position(self.axis_position, container_extent);
    }

    /// Logical coordinate of the guide via the shared mapper; used for the
    /// drag tooltip.
    pub fn logical_position(&self, mapper: &CoordinateMapper) -> i32 {
        mapper.to_logical(self.axis_position)
    }

    /// Draws the guide as a line across `span` (the canvas region it cuts
    /// through), plus the coordinate tooltip while dragging.
    ///
    /// Styling state (dragged vs idle) is expressed by stroke emphasis, the
    /// way a class-toggling utility would mark the node in a DOM host.
    pub fn draw(
        &self,
        painter: &egui::Painter,
        strip: egui::Rect,
        span: egui::Rect,
        options: &RulerOptions,
        mapper: &CoordinateMapper,
    ) {
        if self.is_destroyed() || !self.visible {
            return;
        }
        let width = if self.is_dragging() {
            options.line_width + 1.0
        } else {
            options.line_width
        };
        let stroke = egui::Stroke::new(width, options.line_color);
        match options.direction {
            RulerDirection::Horizontal => {
                let x = strip.min.x + self.axis_position;
                painter.line_segment(
                    [egui::pos2(x, span.min.y), egui::pos2(x, span.max.y)],
                    stroke,
                );
                if self.tooltip_visible && options.show_tooltip {
                    painter.text(
                        egui::pos2(
                            x + constants::READOUT_OFFSET,
                            strip.max.y + constants::READOUT_OFFSET,
                        ),
                        egui::Align2::LEFT_TOP,
                        self.logical_position(mapper).to_string(),
                        egui::FontId::proportional(options.font_size),
                        options.font_color,
                    );
                }
            }
            RulerDirection::Vertical => {
                let y = strip.min.y + self.axis_position;
                painter.line_segment(
                    [egui::pos2(span.min.x, y), egui::pos2(span.max.x, y)],
                    stroke,
                );
                if self.tooltip_visible && options.show_tooltip {
                    painter.text(
                        egui::pos2(
                            strip.max.x + constants::READOUT_OFFSET,
                            y + constants::READOUT_OFFSET,
                        ),
                        egui::Align2::LEFT_TOP,
                        self.logical_position(mapper).to_string(),
                        egui::FontId::proportional(options.font_size),
                        options.font_color,
                    );
                }
            }
        }
    }
}

fn clamp_position(candidate: f32, container_extent: f32) -> f32 {
    let max = (container_extent - constants::GUIDE_THICKNESS).max(0.0);
    candidate.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RulerOptions;

    #[test]
    fn creation_clamps_into_container() {
        let guide = GuideLine::new(1500.0, 1000.0);
        assert_eq!(guide.axis_position, 1000.0 - constants::GUIDE_THICKNESS);
        let guide = GuideLine::new(-20.0, 1000.0);
        assert_eq!(guide.axis_position, 0.0);
    }

    #[test]
    fn drag_stays_clamped_at_every_step() {
        let extent = 500.0;
        let mut guide = GuideLine::new(250.0, extent);
        assert!(guide.begin_drag(250.0));

        // Wild deltas, including far outside the container.
        for pointer in [-1000.0, -10.0, 0.0, 260.0, 5000.0, 499.0, 250.0] {
            guide.drag_to(pointer, extent);
            assert!(guide.axis_position >= 0.0);
            assert!(guide.axis_position <= extent - constants::GUIDE_THICKNESS);
        }
    }

    #[test]
    fn drag_applies_cumulative_delta_from_anchor() {
        let mut guide = GuideLine::new(100.0, 1000.0);
        guide.begin_drag(300.0);
        guide.drag_to(340.0, 1000.0);
        assert_eq!(guide.axis_position, 140.0);
        guide.drag_to(280.0, 1000.0);
        assert_eq!(guide.axis_position, 80.0);
    }

    #[test]
    fn only_idle_guides_start_dragging() {
        let mut guide = GuideLine::new(50.0, 1000.0);
        assert!(guide.begin_drag(50.0));
        // Already dragging: a second press is ignored.
        assert!(!guide.begin_drag(60.0));
        guide.end_drag();
        guide.destroy();
        assert!(!guide.begin_drag(50.0));
    }

    #[test]
    fn end_drag_returns_to_idle_and_detaches() {
        let mut guide = GuideLine::new(50.0, 1000.0);
        guide.begin_drag(50.0);
        assert_eq!(guide.attached_handlers(), 1);
        assert!(guide.tooltip_visible);
        guide.end_drag();
        assert_eq!(guide.state, GuideState::Idle);
        assert_eq!(guide.attached_handlers(), 0);
        assert!(!guide.tooltip_visible);
    }

    #[test]
    fn double_destroy_is_a_no_op_with_zero_handlers() {
        let mut guide = GuideLine::new(50.0, 1000.0);
        guide.begin_drag(50.0);
        guide.destroy();
        assert_eq!(guide.attached_handlers(), 0);
        assert!(guide.is_destroyed());
        // Second destroy must succeed silently.
        guide.destroy();
        assert_eq!(guide.attached_handlers(), 0);
        assert!(guide.is_destroyed());
    }

    #[test]
    fn double_detach_is_guarded() {
        let mut guide = GuideLine::new(50.0, 1000.0);
        guide.begin_drag(50.0);
        assert!(guide.detach_move_handler());
        assert!(!guide.detach_move_handler());
    }

    #[test]
    fn mid_drag_destroy_stops_movement() {
        let mut guide = GuideLine::new(100.0, 1000.0);
        guide.begin_drag(100.0);
        guide.destroy();
        // A late pointer-move must not mutate the destroyed guide.
        guide.drag_to(900.0, 1000.0);
        assert_eq!(guide.axis_position, 100.0);
    }

    #[test]
    fn destroyed_guides_never_hit() {
        let mut guide = GuideLine::new(100.0, 1000.0);
        assert!(guide.hit_test(101.0));
        guide.destroy();
        assert!(!guide.hit_test(101.0));
    }

    #[test]
    fn tooltip_reads_logical_coordinate() {
        let options = RulerOptions {
            scale: 2.0,
            offset: 40.0,
            thickness: 20.0,
            ..Default::default()
        };
        let mapper = CoordinateMapper::new(&options);
        let guide = GuideLine::new(140.0, 1000.0);
        assert_eq!(guide.logical_position(&mapper), 40);
    }
}
