//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers set up by
//! `App`; the access guard receives its auth accessor as an explicit prop.

pub mod auth_guard;
pub mod dashboard_shell;
pub mod directory_carousel;
pub mod notification_bell;
pub mod notification_panel;
pub mod rating_input;
pub mod registration_notice;
