//! App shell session: login gate, active page and theme.
//!
//! # Responsibility
//! - Hold the process-wide UI context as one explicit value.
//! - Persist theme changes through an injected preference store.
//!
//! # Invariants
//! - `login` always succeeds and lands on the dashboard.
//! - Theme persistence failures are logged and never block a toggle.

pub mod theme;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::fixtures;

pub use theme::{
    JsonFileThemeStore, MemoryThemeStore, PreferenceError, Theme, ThemePreferenceStore,
};

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl User {
    /// First word of the display name, for the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Dashboard,
    Snippets,
    Projects,
    Learning,
    Journal,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Snippets,
        Page::Projects,
        Page::Learning,
        Page::Journal,
    ];
}

/// UI context shared by every view.
pub struct AppSession {
    user: Option<User>,
    active_page: Page,
    theme: Theme,
    theme_store: Box<dyn ThemePreferenceStore>,
}

impl AppSession {
    /// Starts a signed-out session with the persisted or OS theme.
    pub fn init(theme_store: Box<dyn ThemePreferenceStore>, os_prefers_dark: bool) -> Self {
        let theme = match theme_store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::os_default(os_prefers_dark),
            Err(err) => {
                warn!("event=theme_load module=session status=error error={err}");
                Theme::os_default(os_prefers_dark)
            }
        };
        info!(
            "event=session_init module=session status=ok theme={}",
            theme.as_str()
        );
        Self {
            user: None,
            active_page: Page::Dashboard,
            theme,
            theme_store,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Accepts any credentials.
    pub fn login(&mut self, _email: &str, _password: &str) -> &User {
        self.active_page = Page::Dashboard;
        info!("event=login module=session status=ok");
        self.user.insert(fixtures::user())
    }

    pub fn logout(&mut self) {
        self.user = None;
        info!("event=logout module=session status=ok");
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        if let Err(err) = self.theme_store.save(theme) {
            warn!(
                "event=theme_save module=session status=error theme={} error={err}",
                theme.as_str()
            );
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::{AppSession, MemoryThemeStore, Page, Theme};

    #[test]
    fn init_prefers_persisted_theme_over_os() {
        let session = AppSession::init(Box::new(MemoryThemeStore::new(Some(Theme::Light))), true);
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn init_falls_back_to_os_preference() {
        let session = AppSession::init(Box::new(MemoryThemeStore::default()), true);
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn login_resets_page_and_logout_clears_user() {
        let mut session = AppSession::init(Box::new(MemoryThemeStore::default()), false);
        session.navigate(Page::Journal);
        let user = session.login("anyone@example.com", "");
        assert_eq!(user.first_name(), "Lito");
        assert_eq!(session.active_page(), Page::Dashboard);
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
