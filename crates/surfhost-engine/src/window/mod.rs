//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the host window, wires redraw ticks to the
//! frame loop and keeps the hosted surface in step with resizes.

mod config;
mod control;
mod runtime;
mod surface_state;

pub use config::{HostConfig, fps_title};
pub use runtime::SurfaceHost;
pub use surface_state::{SurfaceState, VisibilityChange};
pub use winit::keyboard::KeyCode;
