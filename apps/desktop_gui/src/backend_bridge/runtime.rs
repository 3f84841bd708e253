//! Preference worker: owns the SQLite store on its own tokio runtime and
//! answers UI commands with UI events.

use std::thread;

use client_core::ThemeService;
use crossbeam_channel::{Receiver, Sender};
use storage::{MemoryPreferences, PreferenceStore, Storage};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    database_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            match Storage::new(&database_url).await {
                Ok(storage) => {
                    let _ = ui_tx.try_send(UiEvent::Info("Preferences ready".to_string()));
                    serve(ThemeService::new(storage), cmd_rx, ui_tx).await;
                }
                Err(err) => {
                    // Theme still toggles for this session; it just is not saved.
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("{err:#}"),
                    )));
                    tracing::error!(database_url, "preference storage unavailable: {err:#}");
                    serve(ThemeService::new(MemoryPreferences::new()), cmd_rx, ui_tx).await;
                }
            }
        });
        tracing::debug!("backend worker stopped");
    })
}

/// Handles commands until the UI side hangs up.
pub async fn serve<S: PreferenceStore>(
    themes: ThemeService<S>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        let event = handle_command(&themes, cmd).await;
        let _ = ui_tx.try_send(event);
    }
}

async fn handle_command<S: PreferenceStore>(
    themes: &ThemeService<S>,
    cmd: BackendCommand,
) -> UiEvent {
    match cmd {
        BackendCommand::LoadTheme => match themes.current_theme().await {
            Ok(mode) => UiEvent::ThemeLoaded(mode),
            Err(err) => UiEvent::Error(UiError::from_message(
                UiErrorContext::LoadTheme,
                format!("{err:#}"),
            )),
        },
        BackendCommand::ToggleTheme => match themes.toggle_theme().await {
            Ok(mode) => UiEvent::ThemeChanged(mode),
            Err(err) => UiEvent::Error(UiError::from_message(
                UiErrorContext::SaveTheme,
                format!("{err:#}"),
            )),
        },
        BackendCommand::SaveTheme(mode) => match themes.save_theme(mode).await {
            Ok(()) => UiEvent::ThemeChanged(mode),
            Err(err) => UiEvent::Error(UiError::from_message(
                UiErrorContext::SaveTheme,
                format!("{err:#}"),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::ThemeMode;

    fn run_commands(cmds: &[BackendCommand]) -> Vec<UiEvent> {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        for cmd in cmds {
            cmd_tx.send(*cmd).expect("queue");
        }
        drop(cmd_tx);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        runtime.block_on(serve(
            ThemeService::new(MemoryPreferences::new()),
            cmd_rx,
            ui_tx,
        ));
        ui_rx.try_iter().collect()
    }

    #[test]
    fn load_then_toggle_reports_light_then_dark() {
        let events = run_commands(&[BackendCommand::LoadTheme, BackendCommand::ToggleTheme]);
        assert!(matches!(events[0], UiEvent::ThemeLoaded(ThemeMode::Light)));
        assert!(matches!(events[1], UiEvent::ThemeChanged(ThemeMode::Dark)));
    }

    #[test]
    fn save_is_visible_to_later_loads() {
        let events = run_commands(&[
            BackendCommand::SaveTheme(ThemeMode::Dark),
            BackendCommand::LoadTheme,
        ]);
        assert!(matches!(events[1], UiEvent::ThemeLoaded(ThemeMode::Dark)));
    }

    #[test]
    fn unopenable_database_still_toggles_in_memory() {
        let temp = tempfile::tempdir().expect("tempdir");
        // A directory where the database file should be.
        let blocked = temp.path().join("prefs.sqlite3");
        std::fs::create_dir_all(&blocked).expect("dir");

        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        cmd_tx.send(BackendCommand::ToggleTheme).expect("queue");
        drop(cmd_tx);
        let handle = launch(storage::sqlite_url_for_path(&blocked), cmd_rx, ui_tx);
        handle.join().expect("worker thread");

        let events: Vec<UiEvent> = ui_rx.try_iter().collect();
        let UiEvent::Error(err) = &events[0] else {
            panic!("expected startup error, got {:?}", events[0]);
        };
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
        assert!(matches!(events[1], UiEvent::ThemeChanged(ThemeMode::Dark)));
    }
}
