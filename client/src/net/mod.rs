//! Networking modules for the external collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `notification_poller` drives the periodic
//! unread-count refresh, and `types` defines the shared wire schema.

pub mod api;
pub mod notification_poller;
pub mod types;
