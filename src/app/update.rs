use crate::app::{DEFAULT_SECTION, Model};
use crate::ui::style::ThemeKind;

/// All possible events and actions in the application.
///
/// These represent user input and internal actions. Section routing
/// has three entry points - initial load, activation clicks, and
/// history moves - and all of them funnel into the same transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Routing
    /// Route directly to a section id (initial load)
    ShowSection(String),
    /// Activate the nth sidebar entry (click), recording history
    Activate(usize),
    /// Activate the entry under the sidebar selector
    NavSelect,
    /// Move the sidebar selector up
    NavUp,
    /// Move the sidebar selector down
    NavDown,
    /// Move back through the fragment history
    HistoryBack,
    /// Move forward through the fragment history
    HistoryForward,

    // Theme
    /// Apply a specific theme
    SetTheme(ThemeKind),
    /// Flip the applied theme
    ToggleTheme,

    // Content
    /// Scroll the content up by n lines
    ScrollUp(usize),
    /// Scroll the content down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to the top of the section
    GoToTop,
    /// Go to the end of the section
    GoToBottom,

    // Chrome
    /// Toggle the navigation sidebar
    ToggleNav,
    /// Toggle the help overlay
    ToggleHelp,
    /// Hide the help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Persistence of theme changes is a side effect handled after the
/// transition, not in it.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Routing
        Message::ShowSection(id) => {
            model.show_section(&id);
        }
        Message::Activate(index) => {
            activate_entry(&mut model, index);
        }
        Message::NavSelect => {
            let cursor = model.nav_cursor;
            activate_entry(&mut model, cursor);
        }
        Message::NavUp => {
            model.nav_cursor = model.nav_cursor.saturating_sub(1);
        }
        Message::NavDown => {
            let max = model.nav_entries.len().saturating_sub(1);
            model.nav_cursor = (model.nav_cursor + 1).min(max);
        }
        Message::HistoryBack => {
            if let Some(fragment) = model.history.back().map(ToOwned::to_owned) {
                let id = fragment_or_default(&fragment).to_owned();
                model.show_section(&id);
            }
        }
        Message::HistoryForward => {
            if let Some(fragment) = model.history.forward().map(ToOwned::to_owned) {
                let id = fragment_or_default(&fragment).to_owned();
                model.show_section(&id);
            }
        }

        // Theme
        Message::SetTheme(theme) => {
            model.theme = theme;
        }
        Message::ToggleTheme => {
            // Flip the applied state; storage is written afterwards.
            model.theme = model.theme.toggled();
            tracing::debug!(theme = model.theme.as_str(), "theme toggled");
        }

        // Content
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        // Chrome
        Message::ToggleNav => {
            model.nav_visible = !model.nav_visible;
            model.reflow();
        }
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => {
            model.viewport.resize(width, height.saturating_sub(1));
            model.reflow();
        }

        // Application
        Message::Quit => model.should_quit = true,
    }
    model
}

/// An activation click: record the fragment, then route. The history
/// entry is written even when the id matches nothing, exactly like a
/// fragment update ahead of a failed lookup.
fn activate_entry(model: &mut Model, index: usize) {
    let Some(entry) = model.nav_entries.get(index) else {
        return;
    };
    let id = entry.section_id.clone();
    model.history.push(id.clone());
    model.show_section(&id);
}

/// Resolve a fragment for routing: empty falls back to the default
/// section.
pub(super) fn fragment_or_default(fragment: &str) -> &str {
    if fragment.is_empty() {
        DEFAULT_SECTION
    } else {
        fragment
    }
}
