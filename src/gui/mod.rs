//! Graphical user interface for Lumo Wallet
//!
//! Built with Iced. The window is laid out like the mobile app it mirrors:
//! one screen at a time, a header bar with back navigation, and a global
//! bottom sheet rendered over everything else.

pub mod app;
pub mod backend;
pub mod message;
pub mod state;
pub mod status_layer;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::LumoApp;
pub use status_layer::{init_status_layer, take_status_receiver};

use crate::config::Config;

/// Run the GUI application
pub fn run(config: Config) -> iced::Result {
    iced::application(LumoApp::title, LumoApp::update, LumoApp::view)
        .theme(LumoApp::theme)
        .subscription(LumoApp::subscription)
        .run_with(move || LumoApp::new(config))
}
