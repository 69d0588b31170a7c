use winit::dpi::LogicalSize;
use winit::keyboard::KeyCode;

use crate::device::GpuInit;
use crate::time::DEFAULT_WINDOW_SIZE;

/// Host window configuration.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Frames per frame-rate measurement window; non-positive means one.
    pub fps_window: i64,

    /// Key that restarts frame-rate measurement.
    pub reset_key: KeyCode,

    /// Append the measured rate to the window title.
    pub show_fps_in_title: bool,

    pub gpu: GpuInit,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "surfhost".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            fps_window: DEFAULT_WINDOW_SIZE,
            reset_key: KeyCode::Space,
            show_fps_in_title: true,
            gpu: GpuInit::default(),
        }
    }
}

impl HostConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.initial_size = LogicalSize::new(width, height);
        self
    }

    pub fn fps_window(mut self, frames: i64) -> Self {
        self.fps_window = frames;
        self
    }

    pub fn reset_key(mut self, key: KeyCode) -> Self {
        self.reset_key = key;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }
}

/// Window title carrying the displayed frame rate.
pub fn fps_title(title: &str, fps: f64) -> String {
    format!("{title} | fps = {fps:.1}")
}

pub(crate) fn error_title(title: &str, message: &str) -> String {
    format!("{title} | render error: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.fps_window, 30);
        assert_eq!(cfg.reset_key, KeyCode::Space);
        assert!(cfg.show_fps_in_title);
    }

    #[test]
    fn builder_overrides() {
        let cfg = HostConfig::default().title("demo").size(320.0, 240.0).fps_window(5);
        assert_eq!(cfg.title, "demo");
        assert_eq!(cfg.initial_size, LogicalSize::new(320.0, 240.0));
        assert_eq!(cfg.fps_window, 5);
    }

    #[test]
    fn fps_title_has_one_decimal() {
        assert_eq!(fps_title("demo", 59.94), "demo | fps = 59.9");
        assert_eq!(fps_title("demo", 0.0), "demo | fps = 0.0");
    }

    #[test]
    fn error_title_includes_message() {
        assert_eq!(error_title("demo", "device lost"), "demo | render error: device lost");
    }
}
