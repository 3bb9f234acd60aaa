//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and list bodies while reading the
//! session and API client from Leptos context providers.

pub mod dashboard_nav;
pub mod navbar;
pub mod remote_list;
