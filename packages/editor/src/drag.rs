//! # Drag Sessions
//!
//! A drag is a short-lived interactive session: pointer-down records the
//! start state, every pointer-move recomputes a constrained target position
//! synchronously, pointer-up (or cancellation) finalizes. Globally
//! registered listeners are a resource: acquired at drag start and
//! guaranteed released at drag end or teardown, whichever comes first.

use pagecraft_tree::{CANVAS_MARGIN, CANVAS_WIDTH};

/// Snap distance for edge alignment, in px.
pub const SNAP_THRESHOLD: f64 = 6.0;

/// Guard over globally registered listeners. Fires its release hook exactly
/// once: explicitly, or on drop if the session is torn down mid-drag.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release (tests, headless use).
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn release(&mut self) {
        if let Some(hook) = self.release.take() {
            hook();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// One in-flight drag of a canvas component.
#[derive(Debug)]
pub struct DragSession {
    /// Component being dragged.
    pub component_id: String,

    /// Component position at pointer-down.
    pub origin: (f64, f64),

    /// Pointer position at pointer-down.
    pub pointer_start: (f64, f64),

    /// Dragged component size, for canvas clamping.
    size: (f64, f64),

    current: (f64, f64),
    guard: ListenerGuard,
}

impl DragSession {
    pub fn begin(
        component_id: impl Into<String>,
        origin: (f64, f64),
        pointer_start: (f64, f64),
        size: (f64, f64),
        guard: ListenerGuard,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            origin,
            pointer_start,
            size,
            current: origin,
            guard,
        }
    }

    /// Recompute the constrained target for a pointer-move. Synchronous,
    /// no suspension: position = origin + pointer delta, clamped to the
    /// canvas and snapped to the margin guides within [`SNAP_THRESHOLD`].
    pub fn update(&mut self, pointer: (f64, f64)) -> (f64, f64) {
        let dx = pointer.0 - self.pointer_start.0;
        let dy = pointer.1 - self.pointer_start.1;

        let mut x = (self.origin.0 + dx).clamp(0.0, (CANVAS_WIDTH - self.size.0).max(0.0));
        let mut y = (self.origin.1 + dy).max(0.0);

        // Margin guides: left edge and right edge of the content area.
        if (x - CANVAS_MARGIN).abs() <= SNAP_THRESHOLD {
            x = CANVAS_MARGIN;
        }
        let right_guide = CANVAS_WIDTH - CANVAS_MARGIN - self.size.0;
        if (x - right_guide).abs() <= SNAP_THRESHOLD {
            x = right_guide;
        }
        if (y - CANVAS_MARGIN).abs() <= SNAP_THRESHOLD {
            y = CANVAS_MARGIN;
        }

        self.current = (x, y);
        self.current
    }

    pub fn position(&self) -> (f64, f64) {
        self.current
    }

    /// Pointer-up: release listeners, keep the final position.
    pub fn finish(mut self) -> (f64, f64) {
        self.guard.release();
        self.current
    }

    /// Escape / forced teardown: release listeners, revert to the origin.
    pub fn cancel(mut self) -> (f64, f64) {
        self.guard.release();
        self.origin
    }
}
