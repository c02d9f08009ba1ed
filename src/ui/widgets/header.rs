// src/ui/widgets/header.rs

use crate::app::App;
use crate::theme::Palette;
use ratatui::{prelude::*, widgets::Paragraph};

/// Renders the title line with the active theme on the right.
///
/// # Arguments
/// * `frame` - The `Frame` to draw on.
/// * `app` - Application state, read for the theme mode.
/// * `palette` - Colors for the active theme.
/// * `area` - The one-line header region.
pub fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Website Scanner",
        Style::default().fg(palette.text).bold(),
    )));
    frame.render_widget(title, chunks[0]);

    let theme = Paragraph::new(Line::from(vec![
        Span::styled("Theme: ", Style::default().fg(palette.muted)),
        Span::styled(app.theme.mode().label(), Style::default().fg(palette.accent)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(theme, chunks[1]);
}
