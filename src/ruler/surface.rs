//! The ruler surface: owns configuration, geometry, the hover indicator,
//! and the guide collection, and wires host pointer events to all of them.
//!
//! The pointer protocol (`pointer_enter`, `pointer_move`, `pointer_leave`,
//! `pointer_down`, `pointer_up`, `double_click`) is the host contract; the
//! [`RulerSurface::show`] method adapts egui input to that protocol and does
//! the per-frame drawing.

use eframe::egui;

use crate::ruler::guide::GuideLine;
use crate::ruler::indicator::PositionIndicator;
use crate::ruler::mapper::CoordinateMapper;
use crate::ruler::ticks;
use crate::types::{GuideId, RulerDirection, RulerError, RulerGeometry, RulerOptions, RulerOverrides};

/// The active drag, registered when a guide's drag starts and unregistered
/// when it ends. Owning it here (rather than in a shared mutable handler
/// slot) keeps multiple coexisting surfaces from interfering with each
/// other, and makes "at most one guide dragging" structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    guide: GuideId,
}

/// Orchestrator for one ruler strip and its guides.
#[derive(Debug)]
pub struct RulerSurface {
    options: RulerOptions,
    geometry: RulerGeometry,
    /// Raw extent last reported by the host, kept to detect resizes even
    /// when it was unusable and `container_extent` fell back to the strip.
    host_extent: f32,
    container_extent: f32,
    guides: Vec<GuideLine>,
    indicator: Option<PositionIndicator>,
    drag: Option<DragSession>,
    alive: bool,
}

/// Construction entry point: merges the overrides over defaults, validates,
/// and provisions the surface.
pub fn create_ruler_surface(
    container_extent: f32,
    overrides: &RulerOverrides,
) -> Result<RulerSurface, RulerError> {
    RulerSurface::new(container_extent, overrides)
}

impl RulerSurface {
    /// Builds a surface for a host container with the given primary-axis
    /// extent (device pixels).
    ///
    /// # Errors
    ///
    /// [`RulerError::Configuration`] if the merged options are unusable;
    /// nothing is provisioned in that case.
    pub fn new(container_extent: f32, overrides: &RulerOverrides) -> Result<Self, RulerError> {
        let options = RulerOptions::default().merged(overrides);
        options.validate()?;
        let geometry = RulerGeometry::derive(&options, container_extent);
        let host_extent = container_extent;
        let container_extent = usable_extent(container_extent, &geometry);
        log::debug!(
            "ruler surface provisioned: {:?} logical, {:?} physical px",
            geometry.strip_size(options.direction),
            geometry.physical_size(options.pixels_per_point),
        );
        Ok(Self {
            options,
            geometry,
            host_extent,
            container_extent,
            guides: Vec::new(),
            indicator: None,
            drag: None,
            alive: true,
        })
    }

    /// Current configuration. Mutable only through the surface methods.
    pub fn options(&self) -> &RulerOptions {
        &self.options
    }

    /// Current derived strip extent.
    pub fn geometry(&self) -> &RulerGeometry {
        &self.geometry
    }

    /// Primary-axis extent guides are clamped into.
    pub fn container_extent(&self) -> f32 {
        self.container_extent
    }

    /// The owned guides, in creation order. Destroyed guides are removed
    /// from the collection as soon as they terminate.
    pub fn guides(&self) -> &[GuideLine] {
        &self.guides
    }

    /// The live hover indicator, if the pointer is over the strip.
    pub fn indicator(&self) -> Option<&PositionIndicator> {
        self.indicator.as_ref()
    }

    /// Whether [`Self::destroy`] has not been called yet.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Coordinate mapper for the current options.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(&self.options)
    }

    /// Updates the container size and scale, recomputes geometry, and
    /// re-provisions the backing surface. Ticks are redrawn on the next
    /// frame.
    ///
    /// Existing guides keep their raw device offsets; they are only
    /// re-clamped into the new extent, never re-derived from their logical
    /// positions, so a scale change makes them read differently rather than
    /// move.
    ///
    /// # Errors
    ///
    /// [`RulerError::Configuration`] when `scale` is unusable; the previous
    /// configuration stays fully intact.
    pub fn set_size(&mut self, width: f32, height: f32, scale: f32) -> Result<(), RulerError> {
        let mut candidate = self.options.clone();
        candidate.scale = scale;
        candidate.validate()?;

        let extent = match candidate.direction {
            RulerDirection::Horizontal => width,
            RulerDirection::Vertical => height,
        };
        self.options = candidate;
        self.geometry = RulerGeometry::derive(&self.options, extent);
        self.host_extent = extent;
        self.container_extent = usable_extent(extent, &self.geometry);
        for guide in &mut self.guides {
            guide.clamp_into(self.container_extent);
        }
        log::debug!(
            "ruler surface re-provisioned: {:?} logical, {:?} physical px",
            self.geometry.strip_size(self.options.direction),
            self.geometry.physical_size(self.options.pixels_per_point),
        );
        Ok(())
    }

    /// Updates only the scale. Ticks redraw next frame; guides are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`RulerError::Configuration`] when `scale` is unusable; the previous
    /// configuration stays fully intact.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), RulerError> {
        let mut candidate = self.options.clone();
        candidate.scale = scale;
        candidate.validate()?;
        self.options = candidate;
        Ok(())
    }

    /// Shows or hides all guides without destroying any state.
    pub fn toggle_guide_visibility(&mut self, visible: bool) {
        for guide in &mut self.guides {
            guide.visible = visible;
        }
    }

    /// Destroys every guide and empties the owned collection.
    pub fn clear_guides(&mut self) {
        self.drag = None;
        for guide in &mut self.guides {
            guide.destroy();
        }
        self.guides.clear();
    }

    /// Tears the surface down: destroys guides, drops the indicator and any
    /// drag session, and stops responding to input and draw requests.
    /// Idempotent.
    pub fn destroy(&mut self) {
        self.clear_guides();
        self.indicator = None;
        self.alive = false;
    }

    // --- pointer protocol -------------------------------------------------

    /// Pointer entered the strip: activate the hover indicator, replacing
    /// any prior instance.
    pub fn pointer_enter(&mut self, device_pos: f32) {
        if !self.alive || !self.options.show_indicator {
            return;
        }
        self.indicator = Some(PositionIndicator::new(device_pos, &self.mapper()));
    }

    /// Pointer moved. Routed to the active drag when one exists, otherwise
    /// to the hover indicator (mutated in place).
    pub fn pointer_move(&mut self, device_pos: f32) {
        if !self.alive {
            return;
        }
        if let Some(session) = self.drag {
            let extent = self.container_extent;
            if let Some(guide) = self.guide_mut(session.guide) {
                guide.drag_to(device_pos, extent);
            }
            return;
        }
        if let Some(indicator) = &mut self.indicator {
            indicator.move_to(device_pos, &CoordinateMapper::new(&self.options));
        }
    }

    /// Pointer left the strip: deactivate the indicator.
    pub fn pointer_leave(&mut self) {
        self.indicator = None;
    }

    /// Pointer pressed on the strip. Starts dragging the guide under the
    /// pointer, or creates a new guide there and drags it immediately.
    ///
    /// # Returns
    ///
    /// The id of the guide now dragging, or `None` when the press was
    /// swallowed (dead surface, or another drag already active).
    pub fn pointer_down(&mut self, device_pos: f32) -> Option<GuideId> {
        if !self.alive || self.drag.is_some() {
            // At most one guide drags at a time: whichever got the press.
            return None;
        }

        if let Some(guide) = self.guides.iter_mut().find(|g| g.hit_test(device_pos)) {
            if guide.begin_drag(device_pos) {
                let id = guide.id;
                self.drag = Some(DragSession { guide: id });
                return Some(id);
            }
            return None;
        }

        let mut guide = GuideLine::new(device_pos, self.container_extent);
        guide.begin_drag(device_pos);
        let id = guide.id;
        self.guides.push(guide);
        self.drag = Some(DragSession { guide: id });
        Some(id)
    }

    /// Pointer released anywhere: ends the active drag, returning the guide
    /// to `Idle` and unregistering the drag session exactly once.
    pub fn pointer_up(&mut self) {
        if let Some(session) = self.drag.take() {
            if let Some(guide) = self.guide_mut(session.guide) {
                guide.end_drag();
            }
        }
    }

    /// Double click on a guide destroys it (terminal; never recreated).
    ///
    /// # Returns
    ///
    /// `true` when a guide was destroyed.
    pub fn double_click(&mut self, device_pos: f32) -> bool {
        if !self.alive {
            return false;
        }
        let Some(index) = self.guides.iter().position(|g| g.hit_test(device_pos)) else {
            return false;
        };
        let id = self.guides[index].id;
        // A destroy mid-drag must also unregister the drag session so the
        // movement handler cannot touch the removed guide afterwards.
        if self.drag.map(|s| s.guide) == Some(id) {
            self.drag = None;
        }
        self.guides[index].destroy();
        self.guides.remove(index);
        true
    }

    // --- egui integration -------------------------------------------------

    /// Lays out the strip, adapts egui pointer input to the pointer
    /// protocol, and draws ticks, guides, and the indicator.
    ///
    /// Returns `None` once the surface has been destroyed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<egui::Response> {
        if !self.alive {
            return None;
        }

        // Track host container resizes: geometry is derived, never stale.
        let avail = ui.available_size();
        let host_extent = match self.options.direction {
            RulerDirection::Horizontal => avail.x,
            RulerDirection::Vertical => avail.y,
        };
        if host_extent != self.host_extent {
            self.geometry = RulerGeometry::derive(&self.options, host_extent);
            self.host_extent = host_extent;
            self.container_extent = usable_extent(host_extent, &self.geometry);
            for guide in &mut self.guides {
                guide.clamp_into(self.container_extent);
            }
        }

        let size = self.geometry.strip_size(self.options.direction);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        self.handle_pointer_input(ui, &response, rect);

        // Cursor affordance follows the live direction, including for guides
        // created before a direction change.
        if self.drag.is_some() || response.hovered() {
            let cursor = match self.options.direction {
                RulerDirection::Horizontal => egui::CursorIcon::ResizeColumn,
                RulerDirection::Vertical => egui::CursorIcon::ResizeRow,
            };
            ui.ctx().set_cursor_icon(cursor);
        }

        self.draw(ui.painter(), rect, ui.ctx().screen_rect());

        Some(response)
    }

    /// Translates egui's per-frame input into the pointer protocol.
    fn handle_pointer_input(&mut self, ui: &egui::Ui, response: &egui::Response, rect: egui::Rect) {
        let direction = self.options.direction;
        let primary = |pos: egui::Pos2| match direction {
            RulerDirection::Horizontal => pos.x - rect.min.x,
            RulerDirection::Vertical => pos.y - rect.min.y,
        };

        // Double click is checked first: the second click's press has
        // already started a drag on the guide, and the destroy path is the
        // one that knows how to unwind that drag safely.
        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.double_click(primary(pos));
            }
            return;
        }

        if self.drag.is_some() {
            // Movement capture is global for the duration of the drag: the
            // pointer may leave the strip (and the guide's own band) while
            // the guide keeps following it.
            if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
                self.pointer_move(primary(pos));
            }
            if ui.input(|i| i.pointer.any_released()) {
                self.pointer_up();
            }
            return;
        }

        let pressed = ui.input(|i| i.pointer.primary_pressed());
        if pressed && response.hovered() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.pointer_down(primary(pos));
                return;
            }
        }

        // Hover tracking for the position indicator.
        match ui.input(|i| i.pointer.hover_pos()) {
            Some(pos) if response.hovered() => {
                let p = primary(pos);
                if self.indicator.is_some() {
                    self.pointer_move(p);
                } else {
                    self.pointer_enter(p);
                }
            }
            _ => self.pointer_leave(),
        }
    }

    /// Draws the whole surface: tick strip, guides across the canvas span,
    /// and the hover indicator.
    ///
    /// Guides extend from the strip across the rest of the screen on their
    /// perpendicular axis, so a guide pulled off a top ruler cuts the whole
    /// canvas below it.
    fn draw(&self, painter: &egui::Painter, strip: egui::Rect, screen: egui::Rect) {
        let span = match self.options.direction {
            RulerDirection::Horizontal => {
                egui::Rect::from_min_max(strip.min, egui::pos2(strip.max.x, screen.max.y))
            }
            RulerDirection::Vertical => {
                egui::Rect::from_min_max(strip.min, egui::pos2(screen.max.x, strip.max.y))
            }
        };
        let painter = painter.with_clip_rect(span);

        ticks::draw(&painter, strip, &self.geometry, &self.options);

        let mapper = self.mapper();
        for guide in &self.guides {
            guide.draw(&painter, strip, span, &self.options, &mapper);
        }

        if let Some(indicator) = &self.indicator {
            if self.options.show_indicator {
                indicator.draw(&painter, strip, &self.options);
            }
        }
    }

    fn guide_mut(&mut self, id: GuideId) -> Option<&mut GuideLine> {
        self.guides.iter_mut().find(|g| g.id == id)
    }
}

/// The extent guides are clamped into. A container that resolved to nothing
/// degrades to the derived strip length instead of collapsing to zero.
fn usable_extent(container_extent: f32, geometry: &RulerGeometry) -> f32 {
    if container_extent.is_finite() && container_extent > 0.0 {
        container_extent
    } else {
        geometry.width
    }
}
