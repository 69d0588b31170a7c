use crate::core::RenderSurface;

use super::Gpu;

/// A single acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: holding the surface texture blocks acquisition of the next frame.
/// `Gpu::submit` finishes the encoder and presents.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Borrows this frame as the opaque surface handed to a renderer.
    pub fn render_surface<'a>(&'a mut self, gpu: &'a Gpu<'_>) -> RenderSurface<'a> {
        RenderSurface {
            device: gpu.device(),
            queue: gpu.queue(),
            encoder: &mut self.encoder,
            view: &self.view,
            format: gpu.surface_format(),
            extent: gpu.extent(),
        }
    }
}
