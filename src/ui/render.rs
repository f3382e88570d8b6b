use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::ui::style::Palette;

use super::{CONTENT_LEFT_PADDING, CONTENT_WIDTH_PERCENT, NAV_WIDTH_PERCENT, status};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(NAV_WIDTH_PERCENT),
            Constraint::Percentage(CONTENT_WIDTH_PERCENT),
        ])
        .split(area)
}

pub fn content_width(total_width: u16, nav_visible: bool) -> u16 {
    let area = Rect::new(0, 0, total_width, 1);
    let pane_width = if nav_visible {
        split_main_columns(area)[1].width
    } else {
        total_width
    };
    pane_width.saturating_sub(CONTENT_LEFT_PADDING).max(1)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let palette = Palette::of(model.theme);
    let area = frame.area();

    // Paint the page background first so the theme covers every cell.
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(palette.background)
                .fg(palette.foreground),
        ),
        area,
    );

    let main_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    if model.nav_visible {
        let chunks = split_main_columns(main_area);
        render_nav(model, &palette, frame, chunks[0]);
        render_content(model, &palette, frame, chunks[1]);
    } else {
        render_content(model, &palette, frame, main_area);
    }

    status::render_status_bar(model, &palette, frame, status_area);

    if model.help_visible {
        render_help_overlay(model, &palette, frame, area);
    }
}

fn render_nav(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let items: Vec<Line> = model
        .nav_entries
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, entry)| {
            let marker = if model.nav_cursor == i { ">" } else { " " };
            let base = if model.nav_active == Some(i) {
                palette.nav_active
            } else {
                palette.nav_entry
            };
            let style = if model.nav_cursor == i {
                base.reversed()
            } else {
                base
            };
            Line::styled(format!("{marker} {}", entry.title), style)
        })
        .collect();

    let title = model
        .file_path
        .file_stem()
        .map_or_else(|| "portfolio".to_string(), |s| s.to_string_lossy().to_string());
    let nav_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(palette.nav_border);

    frame.render_widget(Paragraph::new(items).block(nav_block), area);
}

fn render_content(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    // No active section renders an empty pane, matching the router's
    // cleared state after an unmatched id.
    let padding = " ".repeat(CONTENT_LEFT_PADDING as usize);
    let lines: Vec<Line> = model.content_lines[model.viewport.visible_range()]
        .iter()
        .map(|line| {
            Line::styled(
                format!("{padding}{}", line.content()),
                palette.style_for(line.line_type()),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_help_overlay(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(40, 60);
    let popup_height = area.height.saturating_sub(4).min(20);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let mut lines = vec![
        Line::styled("Sections", palette.subheading),
        Line::raw("  j/k, ↑/↓     move the selector"),
        Line::raw("  Enter        open the selected section"),
        Line::raw("  1-9          open the nth section"),
        Line::raw("  h/l, ←/→     history back / forward"),
        Line::raw(""),
        Line::styled("Content", palette.subheading),
        Line::raw("  J/K          scroll one line"),
        Line::raw("  d/u, PgDn/Up scroll one page"),
        Line::raw("  g/G          top / bottom"),
        Line::raw(""),
        Line::styled("View", palette.subheading),
        Line::raw("  t            toggle light/dark theme"),
        Line::raw("  n            toggle the sidebar"),
        Line::raw("  q            quit"),
    ];
    if let Some(path) = &model.config_global_path {
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("  config: {}", path.display())));
    }
    if let Some(path) = &model.config_local_path {
        lines.push(Line::raw(format!("  local:  {}", path.display())));
    }

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(
            Style::default()
                .bg(palette.background)
                .fg(palette.foreground),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
