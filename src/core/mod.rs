// src/core/mod.rs

/// Request, report and interaction-state types.
pub mod models;

/// Errors raised between user input and a parsed report.
pub mod error;

/// The `ScanService` seam and its HTTP implementation.
pub mod client;

/// The scan state machine and its change notifications.
pub mod controller;

/// Terminal-agnostic row model for rendering a report.
pub mod report;
