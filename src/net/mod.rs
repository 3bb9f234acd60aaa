//! Networking modules for the Danubit REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `error` defines the failure taxonomy
//! shared by every view, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
