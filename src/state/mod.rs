//! Client-side state shared between views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` holds the tab-wide identity and token; `fetch` is the per-view
//! lifecycle every remote read goes through.

pub mod fetch;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
