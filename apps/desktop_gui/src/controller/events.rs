//! UI/backend events and error modeling for desktop GUI controller.

use shared::domain::ThemeMode;

#[derive(Debug, Clone)]
pub enum UiEvent {
    Info(String),
    ThemeLoaded(ThemeMode),
    ThemeChanged(ThemeMode),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Storage,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadTheme,
    SaveTheme,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("sqlite")
            || message_lower.contains("database")
            || message_lower.contains("preference")
            || message_lower.contains("migrat")
            || message_lower.contains("directory")
        {
            UiErrorCategory::Storage
        } else if message_lower.contains("disconnect")
            || message_lower.contains("queue is full")
            || message_lower.contains("worker")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text: what failed, then why.
    pub fn banner_text(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Preference storage unavailable",
            UiErrorContext::LoadTheme => "Could not load theme",
            UiErrorContext::SaveTheme => "Could not save theme",
            UiErrorContext::General => err_label(self.category),
        };
        format!("{what}: {}", self.message)
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Storage => "Storage",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_sqlite_failures_as_storage() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "failed to open preference database 'sqlite://x': unable to open database file",
        );
        assert_eq!(err.category(), UiErrorCategory::Storage);
        assert!(err.banner_text().starts_with("Preference storage unavailable"));
    }

    #[test]
    fn preference_wording_classifies_as_storage() {
        // Storage keywords are checked before transport ones.
        let err = UiError::from_message(
            UiErrorContext::General,
            "Preference worker disconnected; theme changes will not be saved",
        );
        assert_eq!(err.category(), UiErrorCategory::Storage);
    }

    #[test]
    fn classifies_queue_problems_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "Backend worker disconnected; theme changes will not be saved",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);

        let err = UiError::from_message(UiErrorContext::General, "UI command queue is full");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.banner_text(), "Transport: UI command queue is full");
    }

    #[test]
    fn unknown_messages_keep_their_text() {
        let err = UiError::from_message(UiErrorContext::SaveTheme, "boom");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.context(), UiErrorContext::SaveTheme);
        assert_eq!(err.message(), "boom");
    }
}
