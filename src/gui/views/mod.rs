//! Screen views
//!
//! One module per screen, plus the shared search results list and the
//! bottom-sheet bodies under `sheets/`.

pub mod home;
pub mod notifications;
pub mod profile;
pub mod receive;
pub mod search;
pub mod send;
pub mod settings;
pub mod sheets;
