// src/ui/mod.rs

use crate::app::App;
use ratatui::{prelude::*, widgets::Block};

mod layout;
pub mod widgets;

use widgets::report_view::ReportViewModel;

/// Draws one frame.
///
/// Takes `app` mutably to record how many report lines fit on screen, which
/// bounds how far the report can scroll.
///
/// # Arguments
/// * `app` - Application state.
/// * `frame` - The `Frame` to draw on.
pub fn render(app: &mut App, frame: &mut Frame) {
    let palette = app.theme.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    let layout = layout::create_layout(frame.area());
    // Borders take the top and bottom rows.
    app.report_viewport = layout.report.height.saturating_sub(2);
    app.scroll_offset = app.scroll_offset.min(app.max_scroll());
    let app = &*app;

    widgets::header::render_header(frame, app, &palette, layout.header);
    widgets::input::render_input(frame, app, &palette, layout.input, layout.submit);
    widgets::report_view::render_report_view(
        frame,
        &ReportViewModel::from(&app.view.state),
        &palette,
        app.spinner_frame,
        app.scroll_offset,
        layout.report,
    );
    widgets::footer::render_footer(frame, app, &palette, layout.footer);

    if let Some(selected) = app.theme_menu {
        widgets::theme_popup::render_theme_popup(frame, &palette, selected, app.theme.mode(), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::Snapshot;
    use crate::core::models::{DomainInformation, InteractionState, ScanReport};
    use crate::theme::ThemeStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn report() -> ScanReport {
        ScanReport {
            website_address: "example.com".into(),
            last_analysis: "2024-01-01".into(),
            detection_counts: "Safe".into(),
            confidence: "98%".into(),
            domain_registration: "Active".into(),
            domain_information: DomainInformation {
                registrar: "Example Registrar".into(),
                whois_server: "whois.example.com".into(),
                status: "clientTransferProhibited".into(),
            },
            ip_address: "93.184.216.34".into(),
            server_location: "US".into(),
            city: "Los Angeles".into(),
            region: "CA".into(),
        }
    }

    #[test]
    fn frame_bounds_report_scrolling() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(ThemeStore::load(dir.path().join("theme.json")));
        app.apply(Snapshot {
            state: InteractionState::Success(Arc::new(report())),
            ..Snapshot::default()
        });
        app.scroll_offset = 500;

        // 15 rows: header, input (3), footer leave 10 for the report, 8 inside borders.
        let mut terminal = Terminal::new(TestBackend::new(80, 15)).unwrap();
        terminal.draw(|frame| render(&mut app, frame)).unwrap();

        assert_eq!(app.report_viewport, 8);
        // 11 report lines, 8 visible.
        assert_eq!(app.scroll_offset, 3);
        app.scroll_down();
        assert_eq!(app.scroll_offset, 3);
    }
}
