//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap themselves in `AuthGuard`.

pub mod dashboards;
pub mod home;
pub mod login;
pub mod not_found;
