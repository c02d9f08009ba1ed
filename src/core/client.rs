// src/core/client.rs

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::BackendSettings;
use crate::core::error::ScanError;
use crate::core::models::{ScanReport, ScanRequest};

/// Anything that can turn a `ScanRequest` into a `ScanReport`.
///
/// The controller only talks to this trait, so tests can swap the HTTP
/// backend for a scripted one.
#[async_trait]
pub trait ScanService: Send + Sync {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanReport, ScanError>;
}

/// Talks to the scanning backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpScanService {
    client: reqwest::Client,
    endpoint: Url,
}

/// Error body the backend sends alongside a 5xx.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpScanService {
    pub fn new(settings: &BackendSettings) -> Result<Self, ScanError> {
        let endpoint = resolve_endpoint(&settings.base_url, &settings.scan_path)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("url-scout/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ScanError::Client)?;

        info!(endpoint = %endpoint, "Scan service configured.");
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScanService for HttpScanService {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanReport, ScanError> {
        debug!(url = %request.url, endpoint = %self.endpoint, "Posting scan request.");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(ScanError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ScanError::Transport)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Scan service rejected the request.");
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status.canonical_reason().unwrap_or("unknown status").to_string()
                });
            return Err(ScanError::Status { status: status.as_u16(), message });
        }

        parse_report(&body)
    }
}

/// Parses a response body into a `ScanReport`, rejecting anything that does
/// not carry every required field with the right type.
pub fn parse_report(body: &str) -> Result<ScanReport, ScanError> {
    serde_json::from_str(body).map_err(|e| ScanError::Schema(e.to_string()))
}

/// Joins the configured base address and scan path into one endpoint URL.
pub fn resolve_endpoint(base_url: &str, scan_path: &str) -> Result<Url, ScanError> {
    let base = Url::parse(base_url)
        .map_err(|e| ScanError::InvalidEndpoint(format!("{base_url}: {e}")))?;
    if base.cannot_be_a_base() {
        return Err(ScanError::InvalidEndpoint(format!("{base_url}: not a base URL")));
    }
    base.join(scan_path)
        .map_err(|e| ScanError::InvalidEndpoint(format!("{scan_path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_local_predict() {
        let url = resolve_endpoint("http://localhost:5000", "/predict").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/predict");
    }

    #[test]
    fn endpoint_rejects_garbage_base() {
        assert!(matches!(
            resolve_endpoint("not a url", "/predict"),
            Err(ScanError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            resolve_endpoint("mailto:ops@example.com", "/predict"),
            Err(ScanError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn parse_report_ignores_unknown_keys() {
        let body = r#"{
            "website_address": "example.com",
            "last_analysis": "2024-01-01 10:00:00",
            "detection_counts": "Safe",
            "confidence": "98.00%",
            "raw_prediction": "good",
            "domain_registration": "1995-08-14",
            "domain_information": {"registrar": "R", "whois_server": "W", "status": "S"},
            "ip_address": "93.184.216.34",
            "server_location": "US",
            "city": "Los Angeles",
            "region": "CA"
        }"#;
        let report = parse_report(body).unwrap();
        assert_eq!(report.domain_information.whois_server, "W");
    }

    #[test]
    fn parse_report_rejects_missing_nested_field() {
        let body = r#"{
            "website_address": "example.com",
            "last_analysis": "2024-01-01",
            "detection_counts": "Safe",
            "confidence": "98%",
            "domain_registration": "Active",
            "domain_information": {"registrar": "R", "status": "S"},
            "ip_address": "1.1.1.1",
            "server_location": "US",
            "city": "x",
            "region": "y"
        }"#;
        match parse_report(body) {
            Err(ScanError::Schema(msg)) => assert!(msg.contains("whois_server")),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn parse_report_rejects_non_json() {
        assert!(matches!(parse_report("<html>"), Err(ScanError::Schema(_))));
    }
}
