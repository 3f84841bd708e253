//! UI layer for the desktop shell: app state, inventory and sign-in screens, theme visuals.

pub mod app;
pub mod inventory;
pub mod signin;
pub mod theme;

pub use app::{DesktopGuiApp, StartupConfig};
