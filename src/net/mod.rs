//! Networking modules for the habit backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the JSON payloads.

pub mod api;
pub mod types;
