// src/ui/widgets/mod.rs

pub mod footer;
pub mod header;
pub mod input;
pub mod report_view;
pub mod theme_popup;
