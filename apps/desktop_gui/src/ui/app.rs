use std::time::{Duration, Instant};

use client_core::{
    notifier::TransitionFlag, theme::apply_theme, AlertNotifier, InventoryApp, RecordStore,
    ThemePresentation,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ThemeMode;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorCategory, UiEvent};
use crate::controller::orchestration::{
    dispatch_backend_command, DispatchError, DispatchFailure,
};
use crate::ui::signin::SignInState;
use crate::ui::theme::EguiThemeSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppViewState {
    SignIn,
    Inventory,
}

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub settings: Settings,
    pub start_signed_in: bool,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    pub(crate) view_state: AppViewState,
    pub(crate) inventory: InventoryApp,
    /// Edit buffer for the search box; the applied filter lives in `inventory`.
    pub(crate) search_text: String,
    pub(crate) signin: SignInState,

    pub(crate) theme: ThemePresentation,
    pub(crate) theme_applied: bool,
    pub(crate) theme_transition: TransitionFlag,

    pub(crate) status: String,
    pub(crate) status_banner: Option<String>,
}

impl DesktopGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        store: RecordStore,
        startup: StartupConfig,
    ) -> Self {
        let alert = AlertNotifier::with_duration(startup.settings.alert_duration);
        let mut app = Self {
            cmd_tx,
            ui_rx,
            view_state: if startup.start_signed_in {
                AppViewState::Inventory
            } else {
                AppViewState::SignIn
            },
            inventory: InventoryApp::new(store, alert),
            search_text: String::new(),
            signin: SignInState::default(),
            theme: ThemePresentation::for_mode(ThemeMode::default()),
            theme_applied: false,
            theme_transition: TransitionFlag::with_duration(startup.settings.theme_transition),
            status: "Loading preferences".to_string(),
            status_banner: None,
        };
        app.queue(BackendCommand::LoadTheme);
        app
    }

    pub(crate) fn queue(&mut self, cmd: BackendCommand) {
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.report_error(err.error);
        }
    }

    fn report_error(&mut self, err: UiError) {
        tracing::warn!(category = ?err.category(), context = ?err.context(), "{}", err.message());
        self.status = err.banner_text();
        self.status_banner = Some(err.banner_text());
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::ThemeLoaded(mode) => {
                    self.theme = apply_theme(&mut EguiThemeSurface::new(ctx), mode);
                    self.theme_applied = true;
                    tracing::info!(theme = %mode, "theme initialized");
                }
                UiEvent::ThemeChanged(mode) => {
                    self.theme = apply_theme(&mut EguiThemeSurface::new(ctx), mode);
                    self.theme_applied = true;
                    self.theme_transition.arm(Instant::now());
                    tracing::info!(theme = %mode, "theme switched");
                }
                UiEvent::Error(err) => {
                    if err.category() == UiErrorCategory::Storage {
                        // Keep the UI usable with whatever theme is showing.
                        self.ensure_theme_applied(ctx);
                    }
                    self.report_error(err);
                }
            }
        }
    }

    fn ensure_theme_applied(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            self.theme = apply_theme(&mut EguiThemeSurface::new(ctx), self.theme.mode);
            self.theme_applied = true;
        }
    }

    pub(crate) fn on_theme_toggle_clicked(&mut self, ctx: &egui::Context) {
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::ToggleTheme) {
            Ok(()) => self.theme_transition.arm(Instant::now()),
            Err(DispatchError {
                failure: DispatchFailure::Disconnected,
                error,
            }) => {
                // Nobody can persist the choice any more; flip for this session.
                let mode = self.theme.mode.toggled();
                self.theme = apply_theme(&mut EguiThemeSurface::new(ctx), mode);
                self.theme_applied = true;
                self.theme_transition.arm(Instant::now());
                tracing::info!(theme = %mode, "theme switched without persistence");
                self.report_error(error);
            }
            Err(err) => self.report_error(err.error),
        }
    }

    pub(crate) fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        let fill = egui::Color32::from_rgb(111, 53, 53);
        egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&banner).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        self.status_banner = None;
                    }
                });
            });
        });
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        if self.theme_transition.is_active() || self.view_state == AppViewState::SignIn {
            return Duration::from_millis(16);
        }
        self.inventory
            .alert()
            .remaining(now)
            .map(|left| left.min(Duration::from_millis(250)))
            .unwrap_or(Duration::from_millis(500))
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.process_ui_events(ctx);
        self.inventory.tick(now);
        self.theme_transition.poll(now);

        match self.view_state {
            AppViewState::SignIn => self.show_signin_screen(ctx),
            AppViewState::Inventory => self.show_inventory_screen(ctx, now),
        }

        ctx.request_repaint_after(self.next_repaint(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::SortKey;

    fn app_with_worker_gone() -> DesktopGuiApp {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (_ui_tx, ui_rx) = bounded(4);
        drop(cmd_rx);
        DesktopGuiApp::new(
            cmd_tx,
            ui_rx,
            RecordStore::seeded().expect("seed"),
            StartupConfig {
                settings: Settings::default(),
                start_signed_in: true,
            },
        )
    }

    #[test]
    fn toggle_flips_theme_when_worker_is_gone() {
        let ctx = egui::Context::default();
        let mut app = app_with_worker_gone();
        assert_eq!(app.theme.mode, ThemeMode::Light);

        app.on_theme_toggle_clicked(&ctx);
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        assert!(ctx.style().visuals.dark_mode);
        assert!(app.theme_transition.is_active());
        let banner = app.status_banner.as_deref().expect("save error banner");
        assert!(banner.contains("will not be saved"));

        app.on_theme_toggle_clicked(&ctx);
        assert_eq!(app.theme.mode, ThemeMode::Light);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn full_queue_leaves_theme_alone() {
        let ctx = egui::Context::default();
        let (cmd_tx, _cmd_rx) = bounded(1);
        let (_ui_tx, ui_rx) = bounded(4);
        // The startup load fills the only slot.
        let mut app = DesktopGuiApp::new(
            cmd_tx,
            ui_rx,
            RecordStore::seeded().expect("seed"),
            StartupConfig {
                settings: Settings::default(),
                start_signed_in: true,
            },
        );

        app.on_theme_toggle_clicked(&ctx);
        assert_eq!(app.theme.mode, ThemeMode::Light);
        assert!(!app.theme_transition.is_active());
        assert!(app.status_banner.is_some());
    }

    #[test]
    fn search_and_sort_state_comes_from_the_inventory() {
        let mut app = app_with_worker_gone();
        app.search_text = "adi".to_string();
        app.inventory.on_search_input(app.search_text.clone());
        app.inventory.on_sort_change(SortKey::Name);

        assert_eq!(app.inventory.query().filter, app.search_text);
        assert_eq!(app.inventory.query().sort, SortKey::Name);
        assert_eq!(app.inventory.count(), 1);
    }
}
