use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::RecordStore;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::{commands::BackendCommand, runtime};
use config::{load_settings, resolve_database_url, AppPaths};
use controller::events::UiEvent;
use ui::{DesktopGuiApp, StartupConfig};

#[derive(Debug, Parser)]
#[command(name = "stridegear", about = "StrideGear shoe inventory")]
struct Args {
    /// Directory holding stridegear.toml and the preference database.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Preference database URL or path; overrides settings and environment.
    #[arg(long)]
    database_url: Option<String>,
    /// Skip the sign-in screen.
    #[arg(long)]
    start_signed_in: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let paths = AppPaths::resolve(args.data_dir.as_deref())?;
    paths.ensure_exists()?;

    let mut settings = load_settings(&paths.settings_path);
    if let Some(url) = args.database_url {
        settings.database_url = Some(url);
    }
    let database_url = resolve_database_url(&settings, &paths);
    tracing::info!(data_root = %paths.data_root.display(), database_url, "starting desktop shell");

    let store = RecordStore::seeded().context("failed to load bundled seed inventory")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let _worker = runtime::launch(database_url, cmd_rx, ui_tx);

    let startup = StartupConfig {
        settings,
        start_signed_in: args.start_signed_in,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("StrideGear")
            .with_inner_size([1200.0, 780.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "StrideGear",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, store, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell exited with error: {err}"))
}
