//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `notifications`, `rating`, `carousel`)
//! so each component depends on a small focused model whose transitions can
//! be tested without a reactive runtime.

pub mod auth;
pub mod carousel;
pub mod notifications;
pub mod rating;
