//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads the session and API
//! client from context, drives its reads through `state::fetch`, and keeps
//! its write flows as plain async functions that can be tested with a fake
//! transport.

pub mod activities;
pub mod activity_edit;
pub mod asociation;
pub mod asociations;
pub mod dashboard;
pub mod dashboard_activities;
pub mod dashboard_members;
pub mod dashboard_requests;
pub mod home;
pub mod login;
pub mod signup;
