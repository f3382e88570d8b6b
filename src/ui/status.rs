use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::ui::style::{Palette, ThemeKind};

/// Status-bar glyph for the applied theme: moon when dark, sun when
/// light. Clicking the glyph toggles the theme.
pub const fn theme_indicator(theme: ThemeKind) -> &'static str {
    match theme {
        ThemeKind::Light => "[☀ light]",
        ThemeKind::Dark => "[☾ dark]",
    }
}

/// Column width of the clickable indicator region at the right edge of
/// the status bar (the glyph plus one trailing space).
pub fn theme_indicator_width(theme: ThemeKind) -> u16 {
    u16::try_from(theme_indicator(theme).width()).unwrap_or(0) + 1
}

pub(super) fn render_status_bar(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let filename = model
        .file_path
        .file_name()
        .map_or_else(|| "portfolio".to_string(), |s| s.to_string_lossy().to_string());

    let active = model
        .active_section
        .and_then(|idx| model.portfolio.section(idx))
        .map_or_else(|| "(none)".to_string(), |section| format!("#{}", section.id));

    let percent = model.viewport.scroll_percent();
    let left = format!(" {filename}  {active}  [{percent}%]  ?:help");
    let indicator = theme_indicator(model.theme);

    let pad = (area.width as usize).saturating_sub(left.width() + indicator.width() + 1);
    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(pad)),
        Span::styled(indicator, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ]);

    let status_bar = Paragraph::new(line).style(
        Style::default()
            .bg(palette.status_bg)
            .fg(palette.status_fg),
    );
    frame.render_widget(status_bar, area);
}
