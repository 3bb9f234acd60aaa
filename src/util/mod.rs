//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so page modules stay thin and the logic can be
//! tested without a browser.

pub mod auth;
pub mod datetime;
pub mod logo;
pub mod route;
