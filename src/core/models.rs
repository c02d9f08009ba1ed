// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ScanError;

// --- Request ---

/// The payload posted to the scan endpoint: `{ "url": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanRequest {
    pub url: String,
}

impl ScanRequest {
    /// Builds a request from raw user input.
    ///
    /// Surrounding whitespace is dropped; anything left is sent as-is; the
    /// backend owns URL format validation. Blank input is rejected here so it
    /// never reaches the network.
    pub fn new(raw: &str) -> Result<Self, ScanError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(ScanError::EmptyUrl);
        }
        Ok(Self { url: url.to_string() })
    }
}

// --- Report ---

/// WHOIS details, always delivered as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainInformation {
    pub registrar: String,
    pub whois_server: String,
    pub status: String,
}

/// The report returned by the backend for one scanned URL.
///
/// Every field is required. Extra keys the backend adds (for example
/// `raw_prediction`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    pub website_address: String,
    /// Kept verbatim; the backend formats it.
    pub last_analysis: String,
    pub detection_counts: String,
    pub confidence: String,
    pub domain_registration: String,
    pub domain_information: DomainInformation,
    pub ip_address: String,
    pub server_location: String,
    pub city: String,
    pub region: String,
}

/// The only detection value with a positive treatment.
pub const SAFE_DETECTION: &str = "Safe";

/// Visual classification of the detection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionTone {
    Safe,
    Unsafe,
}

impl ScanReport {
    pub fn detection_tone(&self) -> DetectionTone {
        if self.detection_counts == SAFE_DETECTION {
            DetectionTone::Safe
        } else {
            DetectionTone::Unsafe
        }
    }
}

// --- Interaction State ---

/// Which boundary a scan failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FailureKind {
    #[strum(to_string = "Connection error")]
    Transport,
    #[strum(to_string = "Backend error")]
    Status,
    #[strum(to_string = "Invalid response")]
    Schema,
    /// Rejected before any request was made.
    #[strum(to_string = "Invalid input")]
    Input,
    /// The client itself could not be set up.
    #[strum(to_string = "Configuration error")]
    Config,
}

/// A failed scan as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&ScanError> for ScanFailure {
    fn from(err: &ScanError) -> Self {
        let kind = match err {
            ScanError::Transport(_) => FailureKind::Transport,
            ScanError::Status { .. } => FailureKind::Status,
            ScanError::Schema(_) => FailureKind::Schema,
            ScanError::EmptyUrl => FailureKind::Input,
            ScanError::Client(_) | ScanError::InvalidEndpoint(_) => FailureKind::Config,
        };
        Self { kind, message: err.to_string() }
    }
}

/// Where the most recent scan currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Loading,
    Success(Arc<ScanReport>),
    Failed(ScanFailure),
}

impl InteractionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, InteractionState::Loading)
    }

    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            InteractionState::Success(report) => Some(report.as_ref()),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ScanFailure> {
        match self {
            InteractionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
