//! Networking modules for the bot backend and weather verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `error` classifies their failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
