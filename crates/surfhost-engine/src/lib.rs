//! surfhost engine crate.
//!
//! Hosts a GPU surface inside a window, paces rendering to the window's redraw
//! cycle and measures the resulting frame rate.
//!
//! - `time`: windowed frame-rate measurement
//! - `core`: the renderer contract and the per-frame timing bracket
//! - `window`: the host runtime (event loop, resize/visibility, input)
//! - `device`: wgpu device and swapchain ownership
//! - `logging`: logger initialization

pub mod core;
pub mod device;
pub mod logging;
pub mod time;
pub mod window;

pub use crate::core::{Extent, FrameLoop, RenderSurface, SurfaceRenderer};
pub use time::FrameTimer;
pub use window::{HostConfig, SurfaceHost};
