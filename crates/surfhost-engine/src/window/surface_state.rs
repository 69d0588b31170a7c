use crate::core::Extent;

/// Transition of the hosted surface between presentable and hidden.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VisibilityChange {
    Shown,
    Hidden,
}

/// Host-side bookkeeping for the hosted surface.
///
/// Tracks the current extent, whether the host should keep requesting frames
/// from the composition loop, and whether the renderer must recreate its target.
#[derive(Debug, Clone)]
pub struct SurfaceState {
    extent: Extent,
    needs_recreate: bool,
    halted: bool,
}

impl SurfaceState {
    /// The first frame always recreates.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            needs_recreate: true,
            halted: false,
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn is_visible(&self) -> bool {
        self.extent.is_visible()
    }

    /// Whether the host should request frames from the composition loop.
    pub fn is_subscribed(&self) -> bool {
        self.is_visible() && !self.halted
    }

    /// Records a new extent. Returns the visibility transition, if any.
    pub fn resize(&mut self, extent: Extent) -> Option<VisibilityChange> {
        if extent == self.extent {
            return None;
        }

        let was_visible = self.is_visible();
        self.extent = extent;
        self.needs_recreate = true;

        match (was_visible, self.is_visible()) {
            (false, true) => Some(VisibilityChange::Shown),
            (true, false) => Some(VisibilityChange::Hidden),
            _ => None,
        }
    }

    /// The swapchain was rebuilt behind the renderer's back.
    pub fn mark_reconfigured(&mut self) {
        self.needs_recreate = true;
    }

    pub fn recreate_pending(&self) -> bool {
        self.needs_recreate
    }

    /// A frame reached the screen; the renderer's target is current.
    pub fn frame_presented(&mut self) {
        self.needs_recreate = false;
    }

    /// Stops frame requests after a render failure.
    pub fn halt(&mut self) {
        self.halted = true;
    }
}
