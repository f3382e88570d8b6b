//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod history;
mod input;
mod model;
mod update;

pub use history::History;
pub use model::{Model, NavEntry};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::ui::style::ThemeKind;

/// Fallback section id used when the startup fragment or a history
/// entry is empty.
pub const DEFAULT_SECTION: &str = "about";

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    initial_theme: ThemeKind,
    nav_visible: bool,
    initial_section: Option<String>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application for the given portfolio file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            initial_theme: ThemeKind::default(),
            nav_visible: true,
            initial_section: None,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the startup theme (already resolved against storage and the
    /// terminal background).
    pub const fn with_theme(mut self, theme: ThemeKind) -> Self {
        self.initial_theme = theme;
        self
    }

    /// Set initial sidebar visibility.
    pub const fn with_nav_visible(mut self, visible: bool) -> Self {
        self.nav_visible = visible;
        self
    }

    /// Set the section to activate on startup.
    pub fn with_initial_section(mut self, section: Option<String>) -> Self {
        self.initial_section = section;
        self
    }

    /// Set config paths used for persistence and shown in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

#[cfg(test)]
mod tests;
