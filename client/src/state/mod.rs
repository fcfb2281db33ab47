//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`users`, `settings`) plus the cross-page `session`
//! and `toast` models, so each page depends only on small focused models that
//! can be unit tested without a browser.

pub mod session;
pub mod settings;
pub mod toast;
pub mod users;
