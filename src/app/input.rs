use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};
use crate::ui::theme_indicator_width;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            // Sidebar
            KeyCode::Char('j') | KeyCode::Down => Some(Message::NavDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::NavUp),
            KeyCode::Enter => Some(Message::NavSelect),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Message::Activate((c as u8 - b'1') as usize))
            }

            // History
            KeyCode::Char('h') | KeyCode::Left => Some(Message::HistoryBack),
            KeyCode::Char('l') | KeyCode::Right => Some(Message::HistoryForward),

            // Theme
            KeyCode::Char('t') => Some(Message::ToggleTheme),

            // Content scrolling
            KeyCode::Char('J') => {
                if model.viewport.can_scroll_down() {
                    Some(Message::ScrollDown(1))
                } else {
                    None
                }
            }
            KeyCode::Char('K') => {
                if model.viewport.can_scroll_up() {
                    Some(Message::ScrollUp(1))
                } else {
                    None
                }
            }
            KeyCode::Char('d') | KeyCode::Char(' ') | KeyCode::PageDown => {
                if model.viewport.can_scroll_down() {
                    Some(Message::PageDown)
                } else {
                    None
                }
            }
            KeyCode::Char('u') | KeyCode::PageUp => {
                if model.viewport.can_scroll_up() {
                    Some(Message::PageUp)
                } else {
                    None
                }
            }
            KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),

            // Chrome
            KeyCode::Char('n') => Some(Message::ToggleNav),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Quit
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }

            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
                return Some(Message::HideHelp);
            }
            return None;
        }

        let area = Rect::new(
            0,
            0,
            model.viewport.width(),
            model.viewport.height().saturating_add(1),
        );
        let status_row = area.height.saturating_sub(1);

        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                if mouse.row == status_row {
                    // The theme indicator sits at the right edge of the
                    // status bar and is the toggle control.
                    let indicator = theme_indicator_width(model.theme);
                    if mouse.column >= area.width.saturating_sub(indicator) {
                        return Some(Message::ToggleTheme);
                    }
                    return None;
                }
                if model.nav_visible {
                    let main_area = Rect {
                        height: area.height.saturating_sub(1),
                        ..area
                    };
                    let nav_area = crate::ui::split_main_columns(main_area)[0];
                    if point_in_rect(mouse.column, mouse.row, nav_area) {
                        // Rows inside the border map onto sidebar entries.
                        if mouse.row > nav_area.y
                            && mouse.row < nav_area.y + nav_area.height.saturating_sub(1)
                        {
                            let index = (mouse.row - nav_area.y - 1) as usize;
                            if index < model.nav_entries.len() {
                                return Some(Message::Activate(index));
                            }
                        }
                    }
                }
                None
            }
            MouseEventKind::ScrollDown => {
                if model.viewport.can_scroll_down() {
                    Some(Message::ScrollDown(3))
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp => {
                if model.viewport.can_scroll_up() {
                    Some(Message::ScrollUp(3))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

const fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
