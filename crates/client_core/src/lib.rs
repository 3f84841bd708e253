//! Inventory client logic: record store, view rendering, form state, alerts,
//! theme preference and the sign-in peek animation.
//!
//! Nothing here touches a windowing toolkit; the desktop shell and the CLI
//! both drive these types directly.

pub mod app;
pub mod form;
pub mod notifier;
pub mod peek;
pub mod store;
pub mod theme;
pub mod view;

pub use app::{InventoryApp, PendingDelete};
pub use form::{FormController, FormMode, SubmitOutcome};
pub use notifier::{AlertNotifier, TransitionFlag, ALERT_DURATION, THEME_TRANSITION};
pub use store::RecordStore;
pub use theme::{ThemePresentation, ThemeService, ThemeSurface, THEME_STORAGE_KEY};
pub use view::{CardAction, RenderedView, ViewQuery};
