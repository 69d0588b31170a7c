mod cli;
mod clear_renderer;

use anyhow::Result;
use clap::Parser;

use surfhost_engine::device::GpuInit;
use surfhost_engine::logging::{LoggingConfig, init_logging};
use surfhost_engine::{HostConfig, SurfaceHost};

use crate::cli::Cli;
use crate::clear_renderer::ClearRenderer;

fn main() {
    if let Err(err) = run() {
        eprintln!("surfhost-sample error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let gpu = GpuInit {
        present_mode: if cli.no_vsync {
            wgpu::PresentMode::AutoNoVsync
        } else {
            wgpu::PresentMode::Fifo
        },
        ..GpuInit::default()
    };

    let config = HostConfig::default()
        .title(cli.title)
        .size(cli.width, cli.height)
        .fps_window(cli.fps_window)
        .gpu(gpu);

    log::info!(
        "starting: fps window={} frames, reset key={:?}",
        config.fps_window,
        config.reset_key
    );

    SurfaceHost::run(config, ClearRenderer::new())
}
