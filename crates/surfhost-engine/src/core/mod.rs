//! Core engine-facing contracts.
//!
//! This module defines the boundary between the host runtime (window, event loop,
//! swapchain) and the code that draws into the hosted surface. Renderers only see
//! an opaque `RenderSurface` and a recreate flag; no windowing types leak through.

mod frame_loop;
mod renderer;
mod surface;

pub use frame_loop::FrameLoop;
pub use renderer::SurfaceRenderer;
pub use surface::{Extent, RenderSurface};
