// src/ui/widgets/input.rs
use crate::app::App;
use crate::theme::Palette;
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders the URL input box and the submit button next to it.
///
/// Input longer than the box scrolls horizontally so the end of what is
/// being typed, and the cursor after it, always stay visible.
///
/// # Arguments
/// * `frame` - The `Frame` to draw on.
/// * `app` - Application state holding the input buffer and loading flag.
/// * `palette` - Colors for the active theme.
/// * `input_area` - Where the text box goes.
/// * `submit_area` - Where the submit button goes.
pub fn render_input(frame: &mut Frame, app: &App, palette: &Palette, input_area: Rect, submit_area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title("Target URL");

    // One column stays free for the cursor.
    let inner_width = usize::from(input_area.width.saturating_sub(2));
    let (visible, visible_len) = visible_tail(&app.input, inner_width.saturating_sub(1));

    let content = if app.input.is_empty() {
        Paragraph::new("Enter URL to scan").style(Style::default().fg(palette.muted))
    } else {
        Paragraph::new(visible).style(Style::default().fg(palette.text))
    };
    frame.render_widget(content.block(input_block), input_area);

    // The button greys out while a scan is in flight.
    let button_style = if app.is_loading() {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.accent).bold()
    };
    let button = Paragraph::new(app.submit_label())
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    frame.render_widget(button, submit_area);

    if app.theme_menu.is_none() {
        let offset = u16::try_from(visible_len).unwrap_or(u16::MAX);
        let x = input_area.x.saturating_add(1).saturating_add(offset);
        frame.set_cursor_position((x, input_area.y.saturating_add(1)));
    }
}

/// Returns the last `width` characters of `input` and their count.
fn visible_tail(input: &str, width: usize) -> (&str, usize) {
    let total = input.chars().count();
    let skip = total.saturating_sub(width);
    let start = input.char_indices().nth(skip).map_or(input.len(), |(i, _)| i);
    (&input[start..], total - skip)
}
