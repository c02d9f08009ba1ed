// src/core/controller.rs

//! The scan interaction state machine.
//!
//! `ScanController` owns the single state cell. Every change goes through a
//! `tokio::sync::watch` channel so the UI (or any other observer) can
//! subscribe and re-render when something happens.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::core::client::ScanService;
use crate::core::error::ScanError;
use crate::core::models::{InteractionState, ScanFailure, ScanReport, ScanRequest};

/// How resolutions of overlapping requests are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Only the most recently issued request may change the state.
    #[default]
    LatestRequest,
    /// Every resolution is applied; whichever resolves last wins.
    LastResolved,
}

/// What observers see after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub state: InteractionState,
    /// Sequence number of the most recently issued request, 0 before any.
    pub latest_request: u64,
    /// When the state last left `Loading`.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Owns the interaction state and runs scans against a `ScanService`.
///
/// Cloned receivers from `subscribe` and the accessors below all read the
/// same snapshot.
pub struct ScanController {
    service: Arc<dyn ScanService>,
    ordering: ResponseOrdering,
    state: Arc<watch::Sender<Snapshot>>,
}

impl ScanController {
    /// Starts `Idle` with no request issued.
    pub fn new(service: Arc<dyn ScanService>, ordering: ResponseOrdering) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self { service, ordering, state: Arc::new(tx) }
    }

    /// Starts a scan for `url`.
    ///
    /// Blank input is rejected without touching the state or the network.
    /// Otherwise the state is `Loading` by the time this returns and the
    /// request runs on a spawned task. Must be called inside a tokio runtime.
    pub fn submit(&self, url: &str) -> Result<u64, ScanError> {
        let request = ScanRequest::new(url)?;

        let mut seq = 0;
        self.state.send_modify(|snap| {
            snap.latest_request += 1;
            seq = snap.latest_request;
            snap.state = InteractionState::Loading;
        });
        info!(seq, url = %request.url, "Scan submitted.");

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        let ordering = self.ordering;
        tokio::spawn(async move {
            let result = service.scan(&request).await;
            resolve(&state, ordering, seq, result);
        });

        Ok(seq)
    }

    /// The current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state.borrow().state.clone()
    }

    /// The current state together with its request counter and completion
    /// time.
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    /// True while the latest request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().state.is_loading()
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Returns a receiver that is marked changed on every state transition.
    ///
    /// A response dropped by `LatestRequest` ordering does not mark it.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }
}

fn resolve(
    state: &watch::Sender<Snapshot>,
    ordering: ResponseOrdering,
    seq: u64,
    result: Result<ScanReport, ScanError>,
) {
    if let Err(e) = &result {
        error!(seq, error = %e, "Scan failed.");
    }
    let ok = result.is_ok();

    let applied = state.send_if_modified(|snap| {
        if ordering == ResponseOrdering::LatestRequest && seq != snap.latest_request {
            return false;
        }
        snap.state = match result {
            Ok(report) => InteractionState::Success(Arc::new(report)),
            Err(e) => InteractionState::Failed(ScanFailure::from(&e)),
        };
        snap.completed_at = Some(Utc::now());
        true
    });

    if applied {
        info!(seq, ok, "Scan resolved.");
    } else {
        debug!(seq, "Discarding response from a superseded scan.");
    }
}
