// src/core/report.rs

//! Turns a `ScanReport` into the ordered rows the report view displays.
//!
//! Kept free of any terminal types so the same rows back both the TUI and
//! the plain-text output of one-shot mode.

use std::fmt::Write as _;

use crate::core::models::{DetectionTone, InteractionState, ScanReport};

/// The value half of a label/value row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    Text(String),
    /// Detection status with its confidence, e.g. `Safe (98%)`.
    Detection { text: String, tone: DetectionTone },
    /// Several lines shown as one vertical block.
    Stacked(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: RowValue,
}

impl ReportRow {
    fn text(label: &'static str, value: &str) -> Self {
        Self { label, value: RowValue::Text(value.to_string()) }
    }

    /// Number of terminal lines the value occupies.
    pub fn height(&self) -> usize {
        match &self.value {
            RowValue::Stacked(lines) => lines.len().max(1),
            _ => 1,
        }
    }
}

pub fn report_rows(report: &ScanReport) -> Vec<ReportRow> {
    let info = &report.domain_information;
    vec![
        ReportRow::text("Website Address", &report.website_address),
        ReportRow::text("Last Analysis", &report.last_analysis),
        ReportRow {
            label: "Detection Status",
            value: RowValue::Detection {
                text: format!("{} ({})", report.detection_counts, report.confidence),
                tone: report.detection_tone(),
            },
        },
        ReportRow::text("Domain Registration", &report.domain_registration),
        ReportRow {
            label: "Domain Information",
            value: RowValue::Stacked(vec![
                format!("Registrar: {}", info.registrar),
                format!("WHOIS Server: {}", info.whois_server),
                format!("Status: {}", info.status),
            ]),
        },
        ReportRow::text("IP Address", &report.ip_address),
        ReportRow::text("Server Location", &report.server_location),
        ReportRow::text("City", &report.city),
        ReportRow::text("Region", &report.region),
    ]
}

/// Width of the label column, shared with the TUI renderer.
pub const LABEL_WIDTH: usize = 22;

/// Plain-text rendering of a state, used when stdout is not a TUI.
pub fn render_plain(state: &InteractionState) -> String {
    let mut out = String::new();
    match state {
        InteractionState::Idle => {}
        InteractionState::Loading => out.push_str("Scanning...\n"),
        InteractionState::Failed(failure) => {
            let _ = writeln!(out, "Scan failed ({}): {}", failure.kind, failure.message);
        }
        InteractionState::Success(report) => {
            out.push_str("Report Summary\n");
            for row in report_rows(report) {
                match row.value {
                    RowValue::Text(text) => {
                        let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", row.label, text);
                    }
                    RowValue::Detection { text, tone } => {
                        let marker = match tone {
                            DetectionTone::Safe => "[SAFE]",
                            DetectionTone::Unsafe => "[UNSAFE]",
                        };
                        let _ = writeln!(out, "{:<LABEL_WIDTH$}{} {}", row.label, text, marker);
                    }
                    RowValue::Stacked(lines) => {
                        for (i, line) in lines.iter().enumerate() {
                            let label = if i == 0 { row.label } else { "" };
                            let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", label, line);
                        }
                    }
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{DomainInformation, FailureKind, ScanFailure};
    use std::sync::Arc;

    fn fixture() -> ScanReport {
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
    fn rows_follow_declared_field_order() {
        let labels: Vec<_> = report_rows(&fixture()).iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            [
                "Website Address",
                "Last Analysis",
                "Detection Status",
                "Domain Registration",
                "Domain Information",
                "IP Address",
                "Server Location",
                "City",
                "Region",
            ]
        );
    }

    #[test]
    fn detection_row_carries_confidence_and_tone() {
        let rows = report_rows(&fixture());
        assert_eq!(
            rows[2].value,
            RowValue::Detection { text: "Safe (98%)".into(), tone: DetectionTone::Safe }
        );

        let mut bad = fixture();
        bad.detection_counts = "Malicious".into();
        let rows = report_rows(&bad);
        assert!(matches!(
            rows[2].value,
            RowValue::Detection { tone: DetectionTone::Unsafe, .. }
        ));
    }

    #[test]
    fn domain_information_is_a_three_line_block() {
        let rows = report_rows(&fixture());
        assert_eq!(rows[4].height(), 3);
        assert_eq!(
            rows[4].value,
            RowValue::Stacked(vec![
                "Registrar: Example Registrar".into(),
                "WHOIS Server: whois.example.com".into(),
                "Status: clientTransferProhibited".into(),
            ])
        );
    }

    #[test]
    fn plain_output_lists_every_value_in_order() {
        let out = render_plain(&InteractionState::Success(Arc::new(fixture())));
        let expected = [
            "example.com",
            "2024-01-01",
            "Safe (98%)",
            "Active",
            "Example Registrar",
            "whois.example.com",
            "clientTransferProhibited",
            "93.184.216.34",
            "US",
            "Los Angeles",
            "CA",
        ];
        let mut cursor = 0;
        for value in expected {
            let pos = out[cursor..].find(value).unwrap_or_else(|| panic!("{value} missing"));
            cursor += pos + value.len();
        }
        assert!(out.contains("[SAFE]"));
    }

    #[test]
    fn plain_output_for_idle_is_empty_and_failure_is_explicit() {
        assert_eq!(render_plain(&InteractionState::Idle), "");
        let failed = InteractionState::Failed(ScanFailure {
            kind: FailureKind::Transport,
            message: "connection refused".into(),
        });
        assert_eq!(render_plain(&failed), "Scan failed (Connection error): connection refused\n");
    }
}
