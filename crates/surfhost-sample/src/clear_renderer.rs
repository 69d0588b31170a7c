use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use surfhost_engine::{RenderSurface, SurfaceRenderer};

/// Clear color before the first recreate.
const INITIAL_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Clears the hosted surface to a solid color.
///
/// A new random color is picked every time the render target is recreated, so
/// resizes are visible at a glance.
pub struct ClearRenderer<G: Rng = StdRng> {
    rng: G,
    clear: wgpu::Color,
}

impl ClearRenderer<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<G: Rng> ClearRenderer<G> {
    pub fn with_rng(rng: G) -> Self {
        Self {
            rng,
            clear: INITIAL_CLEAR,
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear
    }

    /// Returns the color for this frame, rerolling it on recreate.
    fn next_color(&mut self, recreate: bool) -> wgpu::Color {
        if recreate {
            self.clear = wgpu::Color {
                r: self.rng.random(),
                g: self.rng.random(),
                b: self.rng.random(),
                a: 1.0,
            };
        }
        self.clear
    }
}

impl<G: Rng> SurfaceRenderer for ClearRenderer<G> {
    fn render_frame(&mut self, surface: &mut RenderSurface<'_>, recreate: bool) -> Result<()> {
        let clear = self.next_color(recreate);
        if recreate {
            log::debug!(
                "render target recreated: {}x{} {:?}",
                surface.extent.width,
                surface.extent.height,
                surface.format
            );
        }

        let _rpass = surface.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("surfhost clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        Ok(())
    }
}

impl<G: Rng> Drop for ClearRenderer<G> {
    fn drop(&mut self) {
        log::debug!("clear renderer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ClearRenderer<StdRng> {
        ClearRenderer::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn starts_blue() {
        assert_eq!(seeded().clear_color(), INITIAL_CLEAR);
    }

    #[test]
    fn color_kept_without_recreate() {
        let mut r = seeded();
        assert_eq!(r.next_color(false), INITIAL_CLEAR);
        assert_eq!(r.next_color(false), INITIAL_CLEAR);
    }

    #[test]
    fn recreate_rerolls_opaque_color() {
        let mut r = seeded();
        let c = r.next_color(true);
        assert_eq!(c.a, 1.0);
        for v in [c.r, c.g, c.b] {
            assert!((0.0..1.0).contains(&v));
        }
        // Sticks until the next recreate.
        assert_eq!(r.next_color(false), c);
    }

    #[test]
    fn successive_recreates_differ() {
        let mut r = seeded();
        let a = r.next_color(true);
        let b = r.next_color(true);
        assert_ne!(a, b);
    }
}
