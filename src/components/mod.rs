//! View components for the dashboard.

pub mod ai_panel;
pub mod bar_chart;
pub mod rep_table;
pub mod toast_stack;
