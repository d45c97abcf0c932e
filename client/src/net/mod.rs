//! Networking modules for the document API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the shared wire schema
//! used by pages, components, and state.

pub mod api;
pub mod types;
