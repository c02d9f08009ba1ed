// src/ui/widgets/footer.rs

use crate::app::App;
use crate::theme::Palette;
use chrono::Local;
use ratatui::{
    prelude::*,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer: key hints, or a pending status message.
///
/// Hints change with the mode (theme menu, scanning, idle). The time of the
/// last completed scan is appended when there is one.
///
/// # Arguments
/// * `frame` - The `Frame` to draw on.
/// * `app` - Application state.
/// * `palette` - Colors for the active theme.
/// * `area` - The one-line footer region.
pub fn render_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::new().bold().fg(palette.accent));

    let mut spans = if let Some(message) = &app.status_message {
        vec![Span::styled(message.clone(), Style::new().fg(palette.unsafe_))]
    } else if app.theme_menu.is_some() {
        vec![
            key("↑ ↓"),
            Span::raw(" choose, "),
            key("Enter"),
            Span::raw(" apply, "),
            key("Esc"),
            Span::raw(" cancel"),
        ]
    } else if app.is_loading() {
        vec![Span::raw("Scanning... "), key("Esc"), Span::raw(" to quit.")]
    } else {
        vec![
            key("Enter"),
            Span::raw(" scan, "),
            key("↑ ↓"),
            Span::raw(" scroll, "),
            key("^T"),
            Span::raw(" theme, "),
            key("^U"),
            Span::raw(" clear, "),
            key("Esc"),
            Span::raw(" quit"),
        ]
    };

    if let Some(at) = app.view.completed_at {
        let local = at.with_timezone(&Local);
        spans.push(Span::styled(
            format!("  |  last scan {}", local.format("%H:%M:%S")),
            Style::new().fg(palette.muted),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
