//! Bottom-sheet bodies, one module per sheet kind

pub mod debug;
pub mod farcaster;
pub mod help;
pub mod onboarding_checklist;
pub mod own_request;

use iced::Element;

use crate::account::Account;
use crate::config::Config;
use crate::gui::message::Message;
use crate::gui::state::UiState;
use crate::onboarding::Checklist;
use crate::sheet::Sheet;

/// Render the body for the active sheet.
pub fn render(
    sheet: &Sheet,
    account: Option<&Account>,
    config: &Config,
    ui: &UiState,
) -> Element<'static, Message> {
    match sheet {
        Sheet::Debug => debug::view(account, config),
        Sheet::ConnectFarcaster => farcaster::view(false, account),
        Sheet::LinkFarcaster => farcaster::view(true, account),
        Sheet::OnboardingChecklist => {
            let checklist = account.map(Checklist::derive);
            onboarding_checklist::view(checklist)
        }
        Sheet::Help { title, content } => help::view(title, content),
        Sheet::OwnRequest { status } => own_request::view(status, ui.cancel.as_ref()),
    }
}
