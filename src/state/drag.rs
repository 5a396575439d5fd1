// Drag gesture state shared by mouse and touch input on a carousel grid.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// Scroll distance travelled per pixel of pointer movement.
pub const DRAG_SENSITIVITY: f64 = 2.0;

/// Opaque id of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

#[derive(Default, Debug, Clone)]
pub struct DragState {
    pub dragging: bool,
    /// Pointer x at gesture start, relative to the container's left edge.
    pub start_pointer_x: f64,
    pub start_scroll_offset: f64,
    pub pending_frame: Option<FrameHandle>,
    /// Offset the pending frame will write.
    pub pending_target: Option<f64>,
}

impl DragState {
    pub fn begin(&mut self, relative_x: f64, scroll_offset: f64) {
        self.dragging = true;
        self.start_pointer_x = relative_x;
        self.start_scroll_offset = scroll_offset;
    }

    /// Scroll offset that puts the content under the pointer, amplified by
    /// [`DRAG_SENSITIVITY`].
    pub fn target_for(&self, relative_x: f64) -> f64 {
        let delta = (relative_x - self.start_pointer_x) * DRAG_SENSITIVITY;
        self.start_scroll_offset - delta
    }

    /// Drops any pending frame, returning its handle so the caller can cancel it.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending_target = None;
        self.pending_frame.take()
    }
}

/// Round half up, matching the browser's `Math.round`.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Nearest item boundary for `offset`, or `None` when there is no usable item width.
pub fn snap_target(offset: f64, item_width: f64) -> Option<f64> {
    if !item_width.is_finite() || item_width <= 0.0 || !offset.is_finite() {
        return None;
    }
    Some(round_half_up(offset / item_width) * item_width)
}
