/// Size of the hosted surface in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A surface with a zero dimension cannot be presented.
    #[inline]
    pub fn is_visible(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Computes the physical extent of a logical area at the given scale factor.
    ///
    /// Each axis is rounded up so the surface always covers the host area.
    pub fn from_logical(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            width: to_physical_axis(width, scale_factor),
            height: to_physical_axis(height, scale_factor),
        }
    }
}

// Absorbs float error from a physical -> logical -> physical round trip, which
// would otherwise grow the surface one pixel past the window.
const ROUND_TRIP_EPSILON: f64 = 1e-6;

fn to_physical_axis(logical: f64, scale_factor: f64) -> u32 {
    let px = (logical * scale_factor - ROUND_TRIP_EPSILON).ceil();
    if px.is_finite() && px > 0.0 {
        px.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Opaque render target handed to a `SurfaceRenderer` for one frame.
///
/// Lifetimes:
/// - `'a` is the duration of the `render_frame` call
pub struct RenderSurface<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
    pub format: wgpu::TextureFormat,
    pub extent: Extent,
}
