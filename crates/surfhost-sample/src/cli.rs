use clap::Parser;

use surfhost_engine::time::DEFAULT_WINDOW_SIZE;

#[derive(Parser, Debug, Clone)]
#[command(name = "surfhost-sample")]
#[command(about = "Hosts a GPU surface in a window and reports the frame rate", long_about = None)]
pub struct Cli {
    /// Window title
    #[arg(long, default_value = "surfhost sample")]
    pub title: String,

    /// Initial width in logical pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Initial height in logical pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// Frames per frame-rate measurement window (values below 1 mean 1)
    #[arg(long = "fps-window", default_value_t = DEFAULT_WINDOW_SIZE, allow_negative_numbers = true)]
    pub fps_window: i64,

    /// Log filter (env_logger syntax); overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,

    /// Present without waiting for vertical blank
    #[arg(long = "no-vsync", default_value = "false")]
    pub no_vsync: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfhost_engine::FrameTimer;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["surfhost-sample"]);
        assert_eq!(cli.fps_window, 30);
        assert_eq!(cli.width, 800.0);
        assert!(cli.log.is_none());
        assert!(!cli.no_vsync);
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "surfhost-sample",
            "--fps-window",
            "5",
            "--title",
            "demo",
            "--log",
            "debug",
            "--no-vsync",
        ]);
        assert_eq!(cli.fps_window, 5);
        assert_eq!(cli.title, "demo");
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert!(cli.no_vsync);
    }

    #[test]
    fn negative_fps_window_is_accepted() {
        let joined = Cli::try_parse_from(["surfhost-sample", "--fps-window=-3"]).unwrap();
        assert_eq!(joined.fps_window, -3);
        let split = Cli::try_parse_from(["surfhost-sample", "--fps-window", "-3"]).unwrap();
        assert_eq!(split.fps_window, -3);
    }

    #[test]
    fn negative_fps_window_runs_with_window_of_one() {
        let cli = Cli::parse_from(["surfhost-sample", "--fps-window=-3"]);
        let timer = FrameTimer::new(cli.fps_window);
        assert_eq!(timer.window_size(), 1);
    }

    #[test]
    fn zero_fps_window_runs_with_window_of_one() {
        let cli = Cli::parse_from(["surfhost-sample", "--fps-window", "0"]);
        assert_eq!(FrameTimer::new(cli.fps_window).window_size(), 1);
    }
}
