use crate::core::Extent;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = caps.formats.first().copied()?;
    if !prefer_srgb {
        return Some(first);
    }

    [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ]
    .into_iter()
    .find(|f| caps.formats.contains(f))
    .or(Some(first))
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Swapchain configuration for `extent`.
///
/// wgpu rejects zero dimensions, so a hidden extent yields a 1x1 placeholder
/// that is only ever configured once `apply_resize` replaces its size.
pub(crate) fn build_config(
    format: wgpu::TextureFormat,
    alpha_mode: wgpu::CompositeAlphaMode,
    present_mode: wgpu::PresentMode,
    desired_maximum_frame_latency: u32,
    extent: Extent,
) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: extent.width.max(1),
        height: extent.height.max(1),
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency,
    }
}

/// Applies a new extent. A zero-sized surface cannot be configured, so only the
/// recorded extent changes until the surface becomes visible again.
///
/// Returns whether the swapchain was reconfigured.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    extent: &mut Extent,
    new_extent: Extent,
) -> bool {
    *extent = new_extent;
    if !new_extent.is_visible() {
        return false;
    }

    config.width = new_extent.width;
    config.height = new_extent.height;
    surface.configure(device, config);
    true
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    extent: Extent,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if extent.is_visible() {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(extent: Extent) -> wgpu::SurfaceConfiguration {
        build_config(
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::CompositeAlphaMode::Auto,
            wgpu::PresentMode::Fifo,
            2,
            extent,
        )
    }

    #[test]
    fn visible_extent_is_used_as_is() {
        let c = config(Extent::new(640, 480));
        assert_eq!((c.width, c.height), (640, 480));
    }

    #[test]
    fn hidden_extent_builds_placeholder_config() {
        // Creating a host window minimized must not fail.
        let c = config(Extent::new(0, 0));
        assert_eq!((c.width, c.height), (1, 1));
        let c = config(Extent::new(0, 300));
        assert_eq!((c.width, c.height), (1, 300));
    }
}
