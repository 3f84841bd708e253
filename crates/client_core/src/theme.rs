//! Light/dark theme preference: persistence, toggling and presentation state.

use anyhow::{Context, Result};
use shared::domain::ThemeMode;
use storage::PreferenceStore;

pub const THEME_STORAGE_KEY: &str = "stridegear-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub body: &'static str,
    pub navbar: &'static str,
    pub card: &'static str,
    pub footer: &'static str,
}

pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    body: "bg-gray-50 text-gray-900",
    navbar: "bg-white text-gray-900 border-gray-200",
    card: "bg-white text-gray-900",
    footer: "bg-gray-900 text-white",
};

pub const DARK_PALETTE: ThemePalette = ThemePalette {
    body: "bg-gray-900 text-white",
    navbar: "bg-gray-800 text-white border-gray-700",
    card: "bg-gray-800 text-white",
    footer: "bg-black text-gray-300",
};

/// Icon the toggle shows: the sun offers a way back to light, the moon to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePresentation {
    pub mode: ThemeMode,
    pub mode_class: &'static str,
    pub data_theme: &'static str,
    pub palette: ThemePalette,
    pub toggle_icon: ToggleIcon,
}

impl ThemePresentation {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                mode_class: "light-mode",
                data_theme: mode.as_str(),
                palette: LIGHT_PALETTE,
                toggle_icon: ToggleIcon::Moon,
            },
            ThemeMode::Dark => Self {
                mode,
                mode_class: "dark-mode",
                data_theme: mode.as_str(),
                palette: DARK_PALETTE,
                toggle_icon: ToggleIcon::Sun,
            },
        }
    }
}

/// Whatever a theme gets applied to: a window's visuals, a document root,
/// a test recorder.
pub trait ThemeSurface {
    fn apply(&mut self, presentation: &ThemePresentation);
}

pub fn apply_theme(surface: &mut dyn ThemeSurface, mode: ThemeMode) -> ThemePresentation {
    let presentation = ThemePresentation::for_mode(mode);
    surface.apply(&presentation);
    presentation
}

pub struct ThemeService<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persisted mode; light when nothing (or nothing recognizable) is stored.
    pub async fn current_theme(&self) -> Result<ThemeMode> {
        let raw = self
            .store
            .get_preference(THEME_STORAGE_KEY)
            .await
            .context("failed to load theme preference")?;
        Ok(match raw.as_deref() {
            None => ThemeMode::default(),
            Some(value) => ThemeMode::parse(value).unwrap_or_else(|| {
                tracing::warn!(value, "ignoring unrecognized stored theme");
                ThemeMode::default()
            }),
        })
    }

    pub async fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        self.store
            .set_preference(THEME_STORAGE_KEY, mode.as_str())
            .await
            .context("failed to save theme preference")
    }

    pub async fn toggle_theme(&self) -> Result<ThemeMode> {
        let next = self.current_theme().await?.toggled();
        self.save_theme(next).await?;
        Ok(next)
    }

    pub async fn initialize_theme(
        &self,
        surface: &mut dyn ThemeSurface,
    ) -> Result<ThemePresentation> {
        let mode = self.current_theme().await?;
        let presentation = apply_theme(surface, mode);
        tracing::info!(theme = %mode, "theme initialized");
        Ok(presentation)
    }

    /// Toggle, persist, then apply; the toggle-button click path.
    pub async fn toggle_and_apply(
        &self,
        surface: &mut dyn ThemeSurface,
    ) -> Result<ThemePresentation> {
        let mode = self.toggle_theme().await?;
        let presentation = apply_theme(surface, mode);
        tracing::info!(theme = %mode, "theme switched");
        Ok(presentation)
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
