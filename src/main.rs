//! quickeys: keyboard shortcuts for the focused application
//!
//! A status-area indicator with three menu actions:
//! - Show shortcuts: resolve the focused application and open an overlay
//!   listing its shortcuts next to the system ones
//! - Open Shortcuts Folder: browse the per-user definition files
//! - Quit
//!
//! The same executable started with `--overlay` renders one overlay
//! window from a JSON payload on stdin.

mod config;
mod controller;
mod events;
mod lifecycle;
mod overlay;
mod shortcuts;
mod tray;
mod window;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::controller::Controller;
use crate::lifecycle::ShutdownSignal;
use crate::overlay::{ProcessLauncher, OVERLAY_FLAG};
use crate::shortcuts::{ShortcutStore, BUNDLED};
use crate::tray::TrayIndicator;
use crate::window::{ProcFs, Resolver, RuleSet, X11WindowSystem};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if std::env::args_os().any(|arg| arg == OVERLAY_FLAG) {
        return overlay::view::run();
    }

    // Menu handlers run to completion one at a time
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?
        .block_on(run_tray())
}

async fn run_tray() -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "quickeys starting");

    let config = Config::load()?;
    config.ensure_dirs()?;
    info!(?config.shortcuts_dir, "configuration loaded");

    // Seed before any lookup can happen
    if ShortcutStore::seed(&config.shortcuts_dir, BUNDLED)
        .context("failed to copy default shortcuts")?
    {
        info!("copied default shortcuts into the config directory");
    }
    let store = ShortcutStore::open(&config.shortcuts_dir);

    let rules = RuleSet::load(&config.rules_path)
        .with_context(|| format!("failed to load {}", config.rules_path.display()))?;
    info!(rules = rules.len(), "name rules loaded");

    let resolver = Resolver::new(X11WindowSystem::new(), ProcFs::new(), rules);
    let launcher = ProcessLauncher::current_exe()?;
    let mut controller = Controller::new(resolver, store, launcher);

    let mut shutdown =
        ShutdownSignal::register().context("failed to register signal handlers")?;

    // Tray menu -> controller
    let (event_tx, event_rx) = mpsc::channel(8);
    let mut indicator = TrayIndicator::new(event_tx, &config.icon_name);
    indicator.start().await?;

    tokio::select! {
        _ = controller.run(event_rx) => {}
        reason = shutdown.wait() => {
            info!(%reason, "shutdown signal received");
        }
    }

    // Cleanup
    controller.close_overlay();
    indicator.stop().await;

    info!("quickeys stopped");
    Ok(())
}
