use std::path::PathBuf;

use crate::app::history::History;
use crate::portfolio::{BodyLine, Portfolio};
use crate::ui::style::ThemeKind;
use crate::ui::viewport::Viewport;

/// A sidebar entry associated with exactly one section id.
///
/// Entries are captured from the portfolio once at startup, the way a
/// page's navigation controls are a fixed set from the moment the
/// document is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub section_id: String,
    pub title: String,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The applied
/// theme and the active section are explicit fields; the config file
/// is only an externally observed side effect of theme changes.
#[derive(Debug)]
pub struct Model {
    /// The loaded portfolio document
    pub portfolio: Portfolio,
    /// Sidebar entries, one per section, captured at startup
    pub nav_entries: Vec<NavEntry>,
    /// Index of the active section, if any
    pub active_section: Option<usize>,
    /// Index of the active sidebar entry, if any
    pub nav_active: Option<usize>,
    /// Keyboard selector over the sidebar entries
    pub nav_cursor: usize,
    /// Fragment history driving back/forward navigation
    pub history: History,
    /// The applied theme; toggling reads this, never storage
    pub theme: ThemeKind,
    /// Viewport over the active section's display lines
    pub viewport: Viewport,
    /// Display lines of the active section, wrapped to the content width
    pub content_lines: Vec<BodyLine>,
    /// Whether the navigation sidebar is visible
    pub nav_visible: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Path to the portfolio file
    pub file_path: PathBuf,
    /// Global config path, shown in help and used for theme persistence
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
}

impl Model {
    /// Create a new model for a parsed portfolio.
    ///
    /// The initial fragment seeds the history; the first activation
    /// happens through the router when the app starts.
    pub fn new(
        file_path: PathBuf,
        portfolio: Portfolio,
        terminal_size: (u16, u16),
        initial_fragment: &str,
    ) -> Self {
        let nav_entries = portfolio
            .sections()
            .iter()
            .map(|section| NavEntry {
                section_id: section.id.clone(),
                title: section.title.clone(),
            })
            .collect();

        Self {
            portfolio,
            nav_entries,
            active_section: None,
            nav_active: None,
            nav_cursor: 0,
            history: History::new(initial_fragment),
            theme: ThemeKind::default(),
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(1),
                0,
            ),
            content_lines: Vec::new(),
            nav_visible: true,
            help_visible: false,
            should_quit: false,
            file_path,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Route to a section by id.
    ///
    /// Clears both active markers first, then activates the matching
    /// section (resetting the content scroll) and the matching sidebar
    /// entry through independent lookups. Unmatched ids leave
    /// everything cleared - a silent no-op, not an error.
    pub(super) fn show_section(&mut self, id: &str) {
        self.active_section = None;
        self.nav_active = None;

        if let Some(index) = self.portfolio.section_index(id) {
            self.active_section = Some(index);
            self.reflow();
            self.viewport.go_to_top();
            tracing::debug!(section = id, index, "section activated");
        } else {
            self.content_lines.clear();
            self.viewport.set_total_lines(0);
            tracing::debug!(section = id, "no matching section, nothing activated");
        }

        if let Some(index) = self
            .nav_entries
            .iter()
            .position(|entry| entry.section_id == id)
        {
            self.nav_active = Some(index);
            self.nav_cursor = index;
        }
    }

    /// Rebuild the display lines of the active section for the current
    /// content width and refresh the viewport bounds.
    pub(super) fn reflow(&mut self) {
        let width = self.content_width();
        self.content_lines = self
            .active_section
            .and_then(|index| self.portfolio.section(index))
            .map(|section| section.display_lines(width))
            .unwrap_or_default();
        self.viewport.set_total_lines(self.content_lines.len());
    }

    pub(super) fn content_width(&self) -> u16 {
        crate::ui::content_width(self.viewport.width(), self.nav_visible)
    }

    /// Id of the active section, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active_section
            .and_then(|index| self.portfolio.section(index))
            .map(|section| section.id.as_str())
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), Portfolio::default(), (80, 24), "")
    }
}
