// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, computed once per frame.
pub struct AppLayout {
    pub header: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub report: Rect,
    pub footer: Rect,
}

/// Splits the frame into a one-line header, the input row (text box plus
/// submit button), the report area and a one-line footer.
///
/// # Arguments
/// * `frame_size` - The full terminal area.
///
/// # Returns
/// An `AppLayout`; the report gets whatever height is left.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(main_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        input: input_chunks[0],
        submit: input_chunks[1],
        report: main_chunks[2],
        footer: main_chunks[3],
    }
}
