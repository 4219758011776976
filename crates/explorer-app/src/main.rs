mod app;
mod cli;
mod lifecycle;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use explorer_config::ExplorerConfig;

fn main() {
    let args = cli::parse();

    // Load config before logging is up; pre-init tracing events are dropped,
    // so loader diagnostics also go to stderr on failure.
    let mut config = match &args.config {
        Some(path) => explorer_config::load_config_from(std::path::Path::new(path)),
        None => explorer_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        ExplorerConfig::default()
    });

    if let Some(url) = &args.url {
        config.backend.origin = url.clone();
    }

    // Initialize logging: CLI override beats the config file.
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "explorer=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("GitHub Explorer shell v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(origin = %config.backend.origin, "backend origin configured");

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    let mut app = app::ShellApp::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("event loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("shutdown complete");
}
