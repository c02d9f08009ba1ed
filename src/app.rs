// src/app.rs

use tracing::{debug, error};

use crate::core::controller::{ScanController, Snapshot};
use crate::core::report::report_rows;
use crate::theme::{ThemeMode, ThemeStore};

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub const SUBMIT_LABEL: &str = "Scan Website";
pub const SUBMIT_LABEL_BUSY: &str = "Scanning...";

/// Everything the TUI needs between two frames.
pub struct App {
    pub should_quit: bool,
    pub input: String,
    /// Last snapshot received from the controller.
    pub view: Snapshot,
    pub spinner_frame: usize,
    pub scroll_offset: u16,
    /// Text rows the report area showed on the last frame; bounds scrolling.
    pub report_viewport: u16,
    pub theme: ThemeStore,
    /// Highlighted entry while the theme menu is open.
    pub theme_menu: Option<usize>,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            view: Snapshot::default(),
            spinner_frame: 0,
            scroll_offset: 0,
            report_viewport: 0,
            theme,
            theme_menu: None,
            status_message: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view.state.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL }
    }

    pub fn on_tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    /// Takes a new snapshot from the controller.
    pub fn apply(&mut self, snapshot: Snapshot) {
        if snapshot.state != self.view.state {
            self.scroll_offset = 0;
        }
        self.view = snapshot;
    }

    /// Sends the current input to the controller.
    ///
    /// Does nothing while a scan is in flight: the submit control is
    /// disabled until it resolves.
    pub fn submit(&mut self, controller: &ScanController) {
        if self.is_loading() {
            debug!("Submit ignored, scan already in flight.");
            return;
        }
        match controller.submit(&self.input) {
            Ok(_) => {
                self.status_message = None;
                self.apply(controller.snapshot());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.status_message = None;
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(self.max_scroll());
    }

    /// Furthest the report can scroll before its last line leaves the
    /// bottom of the viewport. Zero when no report is shown.
    pub fn max_scroll(&self) -> u16 {
        let Some(report) = self.view.state.report() else { return 0 };
        let lines: usize = report_rows(report).iter().map(|row| row.height()).sum();
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_sub(self.report_viewport)
    }

    // --- Theme menu ---

    pub fn open_theme_menu(&mut self) {
        let current = ThemeMode::all()
            .iter()
            .position(|m| *m == self.theme.mode())
            .unwrap_or(0);
        self.theme_menu = Some(current);
    }

    pub fn close_theme_menu(&mut self) {
        self.theme_menu = None;
    }

    pub fn theme_menu_next(&mut self) {
        if let Some(i) = self.theme_menu {
            self.theme_menu = Some((i + 1) % ThemeMode::all().len());
        }
    }

    pub fn theme_menu_prev(&mut self) {
        if let Some(i) = self.theme_menu {
            let len = ThemeMode::all().len();
            self.theme_menu = Some((i + len - 1) % len);
        }
    }

    pub fn confirm_theme(&mut self) {
        let Some(i) = self.theme_menu.take() else { return };
        let Some(mode) = ThemeMode::all().get(i).copied() else { return };
        if let Err(e) = self.theme.set(mode) {
            error!(error = %e, "Failed to persist theme.");
            self.status_message = Some(format!("Could not save theme: {e}"));
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
