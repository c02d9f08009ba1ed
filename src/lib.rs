// src/lib.rs

//! Terminal client for a URL reputation scanning service.
//!
//! `core` holds the scan pipeline (request, state machine, report rows) and
//! knows nothing about terminals. `app` and `ui` drive the ratatui front end.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod theme;
pub mod ui;
