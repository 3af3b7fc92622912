//! Page navigation capability
//!
//! The client's only non-local side effect besides token storage is sending the
//! user back to the landing page. It goes through [`Navigator`] so the HTTP
//! client never touches a real page context directly.

use std::sync::RwLock;

use colored::Colorize;

/// Landing page that hosts the login form
pub const LANDING_PAGE: &str = "/index.html";

/// Whether `path` already is the landing page
pub fn is_landing_page(path: &str) -> bool {
    path == "/" || path == LANDING_PAGE
}

/// Access to the active page
pub trait Navigator: Send + Sync {
    /// Path of the page currently shown
    fn current_path(&self) -> String;

    /// Move the active page to `path`
    fn navigate(&self, path: &str);
}

/// Navigator that only tracks the current path
#[derive(Debug)]
pub struct MemoryNavigator {
    path: RwLock<String>,
    history: RwLock<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(path: &str) -> Self {
        Self {
            path: RwLock::new(path.to_string()),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Every path navigated to, oldest first
    #[allow(dead_code)]
    pub fn history(&self) -> Vec<String> {
        self.history.read().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.path.read().map(|p| p.clone()).unwrap_or_default()
    }

    fn navigate(&self, path: &str) {
        if let Ok(mut current) = self.path.write() {
            *current = path.to_string();
        }
        if let Ok(mut history) = self.history.write() {
            history.push(path.to_string());
        }
    }
}

/// Navigator for terminal sessions.
///
/// There is no page to reload, so landing on the login page tells the user
/// how to sign in again.
#[derive(Debug)]
pub struct TerminalNavigator {
    inner: MemoryNavigator,
}

impl TerminalNavigator {
    /// Start on the page the configured origin points at
    pub fn new(path: &str) -> Self {
        Self {
            inner: MemoryNavigator::new(path),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn current_path(&self) -> String {
        self.inner.current_path()
    }

    fn navigate(&self, path: &str) {
        log::info!("Navigating to {}", path);
        self.inner.navigate(path);

        if is_landing_page(path) {
            eprintln!(
                "{} Session ended. Run {} to sign in again.",
                "→".yellow(),
                "embuibe login".cyan()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_landing_page() {
        assert!(is_landing_page("/"));
        assert!(is_landing_page("/index.html"));
        assert!(!is_landing_page("/dashboard.html"));
        assert!(!is_landing_page(""));
    }

    #[test]
    fn test_memory_navigator_tracks_path() {
        let nav = MemoryNavigator::new("/clientes.html");
        assert_eq!(nav.current_path(), "/clientes.html");

        nav.navigate("/index.html");
        assert_eq!(nav.current_path(), "/index.html");
        assert_eq!(nav.history(), vec!["/index.html".to_string()]);
    }

    #[test]
    fn test_terminal_navigator_tracks_path() {
        let nav = TerminalNavigator::new("/dashboard.html");
        nav.navigate(LANDING_PAGE);
        assert_eq!(nav.current_path(), LANDING_PAGE);
    }
}
