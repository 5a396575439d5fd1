//! Drag carousel controller.
//!
//! Turns press / move / release input on a horizontally scrollable grid into
//! scroll-offset updates, and optionally snaps to the nearest item once the
//! gesture ends. Mouse and touch share one [`DragState`]; only the event
//! source differs.
//!
//! The controller never touches the DOM directly. Everything it needs from the
//! page goes through three narrow seams so the gesture logic can be driven
//! without a browser:
//!
//! | Trait | Role |
//! |-------|------|
//! | [`ScrollSurface`] | read/write the scroll position, measure the grid |
//! | [`FrameScheduler`] | request/cancel the next animation frame |
//! | [`Affordance`] | show the grab / grabbing cursor |
//!
//! Moves never write the scroll offset synchronously. Each move computes a
//! target, cancels any unconsumed frame, and requests a new one; when the frame
//! fires, [`DragController::run_frame`] writes only the latest target.

use crate::config::CarouselConfig;
use crate::state::{Direction, DragState, FrameHandle, ScrollEdges, snap_target};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Scroll-related capabilities borrowed from the grid element.
pub trait ScrollSurface {
    fn scroll_offset(&self) -> f64;
    /// Instant write. The surface clamps to its own scroll extent.
    fn set_scroll_offset(&self, offset: f64);
    fn scroll_width(&self) -> f64;
    fn client_width(&self) -> f64;
    /// Left edge of the grid in the same coordinate space as pointer x.
    fn left_offset(&self) -> f64;
    /// Width of the first item, `None` when the grid is empty.
    fn first_item_width(&self) -> Option<f64>;
    fn smooth_scroll_to(&self, offset: f64);
    fn smooth_scroll_by(&self, delta: f64);
}

pub trait FrameScheduler {
    /// Returns `None` if no frame could be requested.
    fn request(&self) -> Option<FrameHandle>;
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

pub trait Affordance {
    fn set_cursor(&self, cursor: Cursor);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

pub struct DragController {
    surface: Box<dyn ScrollSurface>,
    frames: Box<dyn FrameScheduler>,
    affordance: Box<dyn Affordance>,
    config: CarouselConfig,
    drag: DragState,
}

impl DragController {
    /// Builds an idle controller and shows the grab cursor.
    pub fn new(
        surface: Box<dyn ScrollSurface>,
        frames: Box<dyn FrameScheduler>,
        affordance: Box<dyn Affordance>,
        config: CarouselConfig,
    ) -> Self {
        affordance.set_cursor(Cursor::Grab);
        Self {
            surface,
            frames,
            affordance,
            config,
            drag: DragState::default(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Target the next frame will write, if one is pending.
    pub fn pending_target(&self) -> Option<f64> {
        self.drag.pending_target
    }

    pub fn on_gesture_start(&mut self, pointer_x: f64) {
        let relative_x = pointer_x - self.surface.left_offset();
        self.drag.begin(relative_x, self.surface.scroll_offset());
        self.cancel_pending();
        self.affordance.set_cursor(Cursor::Grabbing);
    }

    /// Schedules the scroll update for a move. Returns whether the host should
    /// suppress the event's default action (mouse only; touch listeners are
    /// passive).
    pub fn on_gesture_move(&mut self, pointer_x: f64, source: InputSource) -> bool {
        if !self.drag.dragging {
            return false;
        }
        let target = self.drag.target_for(pointer_x - self.surface.left_offset());
        self.cancel_pending();
        match self.frames.request() {
            Some(handle) => {
                self.drag.pending_frame = Some(handle);
                self.drag.pending_target = Some(target);
            }
            // No frame available: apply now rather than drop the move.
            None => self.surface.set_scroll_offset(target),
        }
        source == InputSource::Mouse
    }

    pub fn on_gesture_end(&mut self) {
        if !self.drag.dragging {
            return;
        }
        self.drag.dragging = false;
        self.cancel_pending();
        self.affordance.set_cursor(Cursor::Grab);
        if self.config.snap {
            self.snap();
        }
    }

    /// Pointer left the grid or the touch was interrupted.
    pub fn on_gesture_cancel(&mut self) {
        self.on_gesture_end();
    }

    /// Animates to the nearest item boundary. Returns the target, or `None`
    /// when the grid has no measurable item.
    pub fn snap(&self) -> Option<f64> {
        let width = self.surface.first_item_width()?;
        let target = snap_target(self.surface.scroll_offset(), width)?;
        self.surface.smooth_scroll_to(target);
        Some(target)
    }

    /// Frame callback: writes the latest pending target.
    pub fn run_frame(&mut self) {
        self.drag.pending_frame = None;
        if let Some(target) = self.drag.pending_target.take() {
            self.surface.set_scroll_offset(target);
        }
    }

    /// Arrow-button scroll by one configured step.
    pub fn step(&self, dir: Direction) {
        self.surface.smooth_scroll_by(dir.step(self.config.button_step));
    }

    pub fn edges(&self) -> ScrollEdges {
        ScrollEdges::measure(
            self.surface.scroll_offset(),
            self.surface.scroll_width(),
            self.surface.client_width(),
        )
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.drag.take_pending() {
            self.frames.cancel(handle);
        }
    }
}

// The frame callback is owned by `frames` and goes away with it.
impl Drop for DragController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
