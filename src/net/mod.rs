//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (row listing and background image bytes),
//! `types` defines the JSON schema of the remote row source.

pub mod api;
pub mod types;
