use anyhow::Result;

use super::surface::RenderSurface;

/// Contract for code that draws into the hosted surface.
///
/// The host calls `render_frame` once per composition tick while the surface is
/// visible. Disposal is `Drop`: the host releases the renderer before the GPU
/// surface and the window it was drawing into.
pub trait SurfaceRenderer {
    /// Records one frame into `surface`.
    ///
    /// `recreate` is true on the first frame and whenever the target has been
    /// resized or reconfigured since the previous successful frame; renderers
    /// rebuild size-dependent state when they see it.
    ///
    /// A returned error carries one human-readable message. The host logs it,
    /// shows it to the user and halts rendering.
    fn render_frame(&mut self, surface: &mut RenderSurface<'_>, recreate: bool) -> Result<()>;
}

impl<R: SurfaceRenderer + ?Sized> SurfaceRenderer for Box<R> {
    fn render_frame(&mut self, surface: &mut RenderSurface<'_>, recreate: bool) -> Result<()> {
        (**self).render_frame(surface, recreate)
    }
}
