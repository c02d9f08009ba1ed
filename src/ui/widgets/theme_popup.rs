// src/ui/widgets/theme_popup.rs

use crate::theme::{Palette, ThemeMode};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Renders the theme picker on top of the existing UI.
///
/// The currently active mode is marked with a check; `selected` is the
/// highlighted row.
///
/// # Arguments
/// * `frame` - The `Frame` to draw on.
/// * `palette` - Colors for the active theme.
/// * `selected` - Index into `ThemeMode::all()` of the highlighted row.
/// * `current` - The mode in effect, marked with a check.
/// * `area` - The region the popup is centered in.
pub fn render_theme_popup(frame: &mut Frame, palette: &Palette, selected: usize, current: ThemeMode, area: Rect) {
    let items: Vec<ListItem> = ThemeMode::all()
        .into_iter()
        .map(|mode| {
            let mark = if mode == current { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(palette.safe)),
                Span::raw(mode.label()),
            ]))
        })
        .collect();

    let block = Block::default()
        .title("Theme")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background).fg(palette.text));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().fg(palette.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED));

    let popup_area = centered_rect(24, 5, area);
    let mut state = ListState::default().with_selected(Some(selected));

    // Clear first so the report underneath does not bleed through.
    frame.render_widget(Clear, popup_area);
    frame.render_stateful_widget(list, popup_area, &mut state);
}

/// A fixed-size rectangle centered in `r`, clamped to fit.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
