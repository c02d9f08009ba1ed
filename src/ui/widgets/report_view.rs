// src/ui/widgets/report_view.rs

use crate::app::SPINNER_CHARS;
use crate::core::models::{DetectionTone, InteractionState, ScanFailure, ScanReport};
use crate::core::report::{report_rows, RowValue, LABEL_WIDTH};
use crate::theme::Palette;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

/// What the report area needs to know about the current scan.
///
/// Loading is kept as its own flag so the view does not depend on the exact
/// shape of the controller's state machine.
#[derive(Debug, Clone, Copy)]
pub struct ReportViewModel<'a> {
    pub loading: bool,
    pub report: Option<&'a ScanReport>,
    pub failure: Option<&'a ScanFailure>,
}

impl<'a> From<&'a InteractionState> for ReportViewModel<'a> {
    fn from(state: &'a InteractionState) -> Self {
        Self {
            loading: state.is_loading(),
            report: state.report(),
            failure: state.failure(),
        }
    }
}

/// Renders the report area. Pure: the same inputs always draw the same cells.
///
/// Loading wins over everything else; a report or a failure is shown
/// otherwise, and an idle view draws nothing.
///
/// # Arguments
/// * `frame` - The `Frame` to draw on.
/// * `model` - The state being displayed.
/// * `palette` - Colors for the active theme.
/// * `spinner_frame` - Index into `SPINNER_CHARS`, wrapped.
/// * `scroll` - Report lines hidden above the top border.
/// * `area` - The region handed to the report view.
pub fn render_report_view(
    frame: &mut Frame,
    model: &ReportViewModel,
    palette: &Palette,
    spinner_frame: usize,
    scroll: u16,
    area: Rect,
) {
    if model.loading {
        let spinner = SPINNER_CHARS[spinner_frame % SPINNER_CHARS.len()];
        let content = Paragraph::new(Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(palette.accent)),
            Span::raw("Scanning... Please wait."),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(area.height / 2)));
        frame.render_widget(content, area);
        return;
    }

    if let Some(report) = model.report {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(Span::styled("Report Summary", Style::default().fg(palette.text).bold()));
        let p = Paragraph::new(report_text(report, palette))
            .block(block)
            .scroll((scroll, 0));
        frame.render_widget(p, area);
        return;
    }

    if let Some(failure) = model.failure {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.unsafe_))
            .title(Span::styled("Scan failed", Style::default().fg(palette.unsafe_).bold()));
        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(failure.kind.to_string(), Style::default().fg(palette.unsafe_).bold())),
            Line::from(failure.message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Check the URL or the scan service and press Enter to try again.",
                Style::default().fg(palette.muted),
            )),
        ]);
        let p = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        frame.render_widget(p, area);
    }
    // Idle draws nothing.
}

/// Builds the label/value lines for a report.
pub fn report_text<'a>(report: &'a ScanReport, palette: &Palette) -> Text<'a> {
    let label_style = Style::default().fg(palette.muted);
    let value_style = Style::default().fg(palette.text);
    let pad = |label: &str| format!("{label:<LABEL_WIDTH$}");

    let mut lines = Vec::new();
    for row in report_rows(report) {
        match row.value {
            RowValue::Text(text) => lines.push(Line::from(vec![
                Span::styled(pad(row.label), label_style),
                Span::styled(text, value_style),
            ])),
            RowValue::Detection { text, tone } => {
                let color = match tone {
                    DetectionTone::Safe => palette.safe,
                    DetectionTone::Unsafe => palette.unsafe_,
                };
                lines.push(Line::from(vec![
                    Span::styled(pad(row.label), label_style),
                    Span::styled(text, Style::default().fg(color).bold()),
                ]));
            }
            RowValue::Stacked(block) => {
                for (i, text) in block.into_iter().enumerate() {
                    let label = if i == 0 { row.label } else { "" };
                    lines.push(Line::from(vec![
                        Span::styled(pad(label), label_style),
                        Span::styled(text, value_style),
                    ]));
                }
            }
        }
    }
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{DomainInformation, FailureKind};
    use crate::theme::ThemeMode;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn fixture(detection: &str) -> ScanReport {
        ScanReport {
            website_address: "example.com".into(),
            last_analysis: "2024-01-01".into(),
            detection_counts: detection.into(),
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

    fn draw(state: &InteractionState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let palette = Palette::for_mode(ThemeMode::Dark);
        terminal
            .draw(|frame| {
                render_report_view(frame, &ReportViewModel::from(state), &palette, 0, 0, frame.area())
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        (0..buffer.area.height).find_map(|y| {
            let row = row_text(buffer, y);
            row.find(needle).map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }

    #[test]
    fn success_renders_rows_in_declared_order() {
        let buffer = draw(&InteractionState::Success(Arc::new(fixture("Safe"))));
        let values = [
            "example.com",
            "2024-01-01",
            "Safe (98%)",
            "Active",
            "Registrar: Example Registrar",
            "WHOIS Server: whois.example.com",
            "Status: clientTransferProhibited",
            "93.184.216.34",
            "US",
            "Los Angeles",
            "CA",
        ];
        let ys: Vec<u16> = values
            .iter()
            .map(|v| find(&buffer, v).unwrap_or_else(|| panic!("{v} not rendered")).1)
            .collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]), "rows out of order: {ys:?}");
        assert!(find(&buffer, "Report Summary").is_some());
    }

    #[test]
    fn detection_color_follows_tone() {
        let palette = Palette::for_mode(ThemeMode::Dark);

        let safe = draw(&InteractionState::Success(Arc::new(fixture("Safe"))));
        let (x, y) = find(&safe, "Safe (98%)").unwrap();
        assert_eq!(safe[(x, y)].fg, palette.safe);

        let bad = draw(&InteractionState::Success(Arc::new(fixture("Malicious"))));
        let (x, y) = find(&bad, "Malicious (98%)").unwrap();
        assert_eq!(bad[(x, y)].fg, palette.unsafe_);
        assert_ne!(palette.safe, palette.unsafe_);
    }

    #[test]
    fn loading_shows_spinner_and_no_report() {
        let buffer = draw(&InteractionState::Loading);
        assert!(find(&buffer, "Scanning... Please wait.").is_some());
        assert!(find(&buffer, "Report Summary").is_none());
    }

    #[test]
    fn failure_is_visible() {
        let buffer = draw(&InteractionState::Failed(ScanFailure {
            kind: FailureKind::Status,
            message: "scan service returned 500: boom".into(),
        }));
        assert!(find(&buffer, "Scan failed").is_some());
        assert!(find(&buffer, "Backend error").is_some());
        assert!(find(&buffer, "Report Summary").is_none());
    }

    #[test]
    fn idle_draws_nothing() {
        let buffer = draw(&InteractionState::Idle);
        for y in 0..buffer.area.height {
            let row = row_text(&buffer, y);
            assert!(row.trim().is_empty(), "row {y} not blank: {row:?}");
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let state = InteractionState::Success(Arc::new(fixture("Suspicious")));
        assert_eq!(draw(&state), draw(&state));
    }
}
