//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing decisions and timer plumbing from page and
//! component logic to improve reuse and testability.

pub mod guard;
pub mod poll;
