//! ModernWindow.Demo - Window chrome demo process
//!
//! Opens the modern window chrome with settings read from `app_config.json`
//! in the working directory. Theme and size are restored on launch and
//! written back when the window closes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use modern_window_core::{gui, ControllerOptions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("ModernWindow.Demo starting...");

    let options = ControllerOptions::with_version(env!("CARGO_PKG_VERSION"));
    tracing::info!("Controller options: {:?}", options);

    gui::run_from_cwd(options)?;

    tracing::info!("ModernWindow.Demo exited");
    Ok(())
}
