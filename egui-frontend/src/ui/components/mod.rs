//! # UI Components Module
//!
//! This module organizes all UI components of the teacher dashboard.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Global style, palette and shared drawing helpers
//! - `sidebar` - Collapsible navigation sidebar
//! - `header` - Teacher header with avatar, contact strip and edit button
//! - `tab_manager` - Main tab bar and content routing
//! - `qualifications` - Private and group qualification tables
//! - `schedule_grid` - Schedule management card and weekly grid
//! - `payment_form` - Payment management card and new payment form
//! - `payment_history_table` - Payment history table
//! - `toasts` - Bottom-right notification stack

pub mod header;
pub mod payment_form;
pub mod payment_history_table;
pub mod qualifications;
pub mod schedule_grid;
pub mod sidebar;
pub mod styling;
pub mod tab_manager;
pub mod toasts;

pub use styling::setup_dashboard_style;
