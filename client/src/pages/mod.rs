//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, actions,
//! toasts) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod settings;
pub mod users;
