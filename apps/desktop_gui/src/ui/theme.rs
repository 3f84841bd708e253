//! egui visuals for the two theme modes.

use client_core::{theme::ToggleIcon, ThemePresentation, ThemeSurface};
use eframe::egui;
use shared::domain::ThemeMode;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(219, 39, 119);

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub body: egui::Color32,
    pub navbar: egui::Color32,
    pub card: egui::Color32,
    pub footer: egui::Color32,
    pub text: egui::Color32,
    pub muted: egui::Color32,
}

pub fn palette_for(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            body: egui::Color32::from_rgb(249, 250, 251),
            navbar: egui::Color32::WHITE,
            card: egui::Color32::WHITE,
            footer: egui::Color32::from_rgb(17, 24, 39),
            text: egui::Color32::from_rgb(17, 24, 39),
            muted: egui::Color32::from_rgb(107, 114, 128),
        },
        ThemeMode::Dark => Palette {
            body: egui::Color32::from_rgb(17, 24, 39),
            navbar: egui::Color32::from_rgb(31, 41, 55),
            card: egui::Color32::from_rgb(31, 41, 55),
            footer: egui::Color32::BLACK,
            text: egui::Color32::WHITE,
            muted: egui::Color32::from_rgb(209, 213, 219),
        },
    }
}

pub fn visuals_for_mode(mode: ThemeMode) -> egui::Visuals {
    let palette = palette_for(mode);
    let mut visuals = match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };
    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.body;
    visuals.window_fill = palette.card;
    visuals.faint_bg_color = palette.navbar;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals
}

pub fn toggle_icon_glyph(icon: ToggleIcon) -> &'static str {
    match icon {
        ToggleIcon::Sun => "☀",
        ToggleIcon::Moon => "🌙",
    }
}

/// Applies theme presentations to an egui context.
pub struct EguiThemeSurface<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiThemeSurface<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ThemeSurface for EguiThemeSurface<'_> {
    fn apply(&mut self, presentation: &ThemePresentation) {
        self.ctx.set_visuals(visuals_for_mode(presentation.mode));
        tracing::debug!(
            mode_class = presentation.mode_class,
            data_theme = presentation.data_theme,
            "applied theme visuals"
        );
    }
}
