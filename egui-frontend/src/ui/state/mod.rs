//! # State Module
//!
//! UI state of the dashboard, split by concern:
//! - `navigation_state` - sidebar, main tabs and sub-tabs
//! - `payment_state` - payment form, in-flight submission and history
//! - `toast_state` - notification toasts

pub mod navigation_state;
pub mod payment_state;
pub mod toast_state;

pub use navigation_state::*;
pub use payment_state::*;
pub use toast_state::*;
