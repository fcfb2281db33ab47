//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, placeholders and overlays while pages own
//! the fetch/mutate orchestration.

pub mod key_test_modal;
pub mod nav_card;
pub mod page_header;
pub mod skeleton;
pub mod toast_host;
