// Library interface for Lumo Wallet
// Exposes the view-model layer for testing and the GUI binary

pub mod account;
pub mod config;
pub mod dispatch;
pub mod link;
pub mod nav;
pub mod note;
pub mod notifications;
pub mod onboarding;
pub mod request;
pub mod search;
pub mod send;
pub mod sheet;

// GUI module - only include if iced feature is enabled
#[cfg(feature = "gui")]
pub mod gui;
