use anyhow::{Context, Result, anyhow};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{Extent, FrameLoop, SurfaceRenderer};
use crate::device::{Gpu, SurfaceErrorAction};

use super::config::{HostConfig, error_title, fps_title};
use super::control;
use super::surface_state::{SurfaceState, VisibilityChange};

/// Entry point for the host runtime.
///
/// Owns the event loop, one window, one GPU surface, one frame loop and one
/// renderer. Rendering is driven by the redraw cycle: while the surface is
/// visible a redraw is requested on every loop iteration, and each redraw runs
/// exactly one frame through the frame loop.
pub struct SurfaceHost;

impl SurfaceHost {
    pub fn run<R>(config: HostConfig, renderer: R) -> Result<()>
    where
        R: SurfaceRenderer + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = HostState::new(config, renderer);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct HostedSurface {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

enum FrameOutcome {
    Presented(f64),
    Skipped,
    Failed(anyhow::Error),
    Fatal(anyhow::Error),
}

struct HostState<R: SurfaceRenderer> {
    config: HostConfig,

    // Drop order matters: the renderer goes before the surface it draws into.
    renderer: Option<R>,
    surface: Option<HostedSurface>,

    surface_state: SurfaceState,
    frame_loop: FrameLoop,
    shown_fps_tenths: Option<i64>,

    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<R: SurfaceRenderer> HostState<R> {
    fn new(config: HostConfig, renderer: R) -> Self {
        let frame_loop = FrameLoop::new(config.fps_window);
        Self {
            config,
            renderer: Some(renderer),
            surface: None,
            surface_state: SurfaceState::new(Extent::default()),
            frame_loop,
            shown_fps_tenths: None,
            fatal: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.shutdown();
        self.request_exit(event_loop);
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.config.gpu.clone();
        let hosted = HostedSurfaceTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        let adapter = hosted.with_gpu(|gpu| gpu.adapter_info());
        log::info!("hosting surface on {} ({:?})", adapter.name, adapter.backend);

        let extent = hosted.with_window(|w| surface_extent(w, w.inner_size()));
        if !extent.is_visible() {
            log::info!("window created hidden; rendering starts on first resize");
        }
        self.surface_state = SurfaceState::new(extent);
        self.surface = Some(hosted);
        Ok(())
    }

    /// Releases the renderer, then the GPU surface and window.
    fn shutdown(&mut self) {
        if self.renderer.take().is_some() {
            log::debug!("renderer disposed");
        }
        self.surface = None;
    }

    fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let extent = surface.with_window(|w| surface_extent(w, size));
        surface.with_gpu_mut(|gpu| gpu.resize(extent));

        let Some(change) =
            control::apply_extent(&mut self.surface_state, &mut self.frame_loop, extent)
        else {
            return;
        };

        log::debug!(
            "surface {:?} at {}x{}",
            change,
            extent.width,
            extent.height
        );
        self.shown_fps_tenths = None;
        if change == VisibilityChange::Shown {
            surface.with_window(|w| w.request_redraw());
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let reset_key = self.config.reset_key;
        if control::apply_key(
            &mut self.frame_loop,
            reset_key,
            event.physical_key,
            event.state,
            event.repeat,
        ) {
            log::info!("frame timer reset ({reset_key:?})");
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if !self.surface_state.is_subscribed() {
            return;
        }
        let (Some(surface), Some(renderer)) = (self.surface.as_mut(), self.renderer.as_mut())
        else {
            return;
        };

        let surface_state = &mut self.surface_state;
        let frame_loop = &mut self.frame_loop;
        let outcome = surface.with_mut(|fields| {
            render_once(fields.window, fields.gpu, renderer, surface_state, frame_loop)
        });

        match outcome {
            FrameOutcome::Presented(fps) => self.show_fps(fps),
            FrameOutcome::Skipped => {}
            FrameOutcome::Failed(err) => {
                let message = format!("{err:#}");
                log::error!("render failed: {message}");
                self.surface_state.halt();
                if let Some(surface) = self.surface.as_ref() {
                    let title = error_title(&self.config.title, &message);
                    surface.with_window(|w| w.set_title(&title));
                }
            }
            FrameOutcome::Fatal(err) => self.fail(event_loop, err),
        }
    }

    fn show_fps(&mut self, fps: f64) {
        if !self.config.show_fps_in_title {
            return;
        }
        let tenths = (fps * 10.0).round() as i64;
        if self.shown_fps_tenths == Some(tenths) {
            return;
        }
        self.shown_fps_tenths = Some(tenths);

        if let Some(surface) = self.surface.as_ref() {
            let title = fps_title(&self.config.title, fps);
            surface.with_window(|w| w.set_title(&title));
        }
    }
}

impl<R: SurfaceRenderer> ApplicationHandler for HostState<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        if let Err(err) = self.create_surface(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        self.frame_loop.reset();
        if let Some(surface) = self.surface.as_ref() {
            surface.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // One composition tick per loop iteration while subscribed.
        if self.surface_state.is_subscribed() {
            if let Some(surface) = self.surface.as_ref() {
                surface.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => self.handle_resize(*new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self
                    .surface
                    .as_ref()
                    .map(|s| s.with_window(|w| w.inner_size()));
                if let Some(size) = size {
                    self.handle_resize(size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event),

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

/// Runs one frame: acquire, render through the frame loop, present.
fn render_once<R: SurfaceRenderer>(
    window: &Window,
    gpu: &mut Gpu<'_>,
    renderer: &mut R,
    surface_state: &mut SurfaceState,
    frame_loop: &mut FrameLoop,
) -> FrameOutcome {
    let mut frame = match gpu.begin_frame() {
        Ok(frame) => frame,
        Err(err) => {
            log::debug!("surface acquire failed: {err}");
            return match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Reconfigured => {
                    surface_state.mark_reconfigured();
                    FrameOutcome::Skipped
                }
                SurfaceErrorAction::SkipFrame => FrameOutcome::Skipped,
                SurfaceErrorAction::Fatal => {
                    FrameOutcome::Fatal(anyhow!("surface acquisition failed: out of memory"))
                }
            };
        }
    };

    let recreate = surface_state.recreate_pending();
    let gpu: &Gpu<'_> = gpu;
    let result = frame_loop.run_frame(|| {
        let mut target = frame.render_surface(gpu);
        renderer.render_frame(&mut target, recreate)
    });

    match result {
        Ok(fps) => {
            window.pre_present_notify();
            gpu.submit(frame);
            surface_state.frame_presented();
            FrameOutcome::Presented(fps)
        }
        Err(err) => FrameOutcome::Failed(err),
    }
}

/// DPI-aware extent of the window's client area.
fn surface_extent(window: &Window, size: PhysicalSize<u32>) -> Extent {
    let scale = window.scale_factor();
    let logical: LogicalSize<f64> = size.to_logical(scale);
    Extent::from_logical(logical.width, logical.height, scale)
}
