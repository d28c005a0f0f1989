#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_state;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use multichart_config::{settings, toml_loader, AppConfig};
use multichart_platform::InstallPaths;

fn install_panic_hook(crash_dir: PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = multichart_platform::crash_report::write_crash_report(&crash_dir, info);

        eprintln!("\n--- Multichart crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("--------------------------\n");

        default_hook(info);
    }));
}

/// Initialize logging. `RUST_LOG` overrides the configured filter.
fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("multichart=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> ExitCode {
    let paths = match InstallPaths::current() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("multichart: {e}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook(paths.crash_report_dir());

    // Read config before logging starts; it carries the log filter.
    let config_path = paths.config_file();
    let loaded = toml_loader::load_from_path(&config_path);
    let filter = match &loaded {
        Ok(config) => config.logging.filter.clone(),
        Err(_) => AppConfig::default().logging.filter,
    };
    init_logging(&filter);

    tracing::info!("Multichart v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = toml_loader::or_default(&config_path, loaded);
    tracing::info!(
        panes = config.pane_count(),
        install = %paths.dir().display(),
        name = paths.exe_name(),
        "Config loaded"
    );

    let persisted = settings::load(&paths.settings_file(), config.pane_count());

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::MultichartApp::new(config, paths, persisted);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }

    if let Some(e) = app.fatal_error() {
        tracing::error!("Startup failed: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
