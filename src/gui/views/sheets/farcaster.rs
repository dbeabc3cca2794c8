//! Farcaster connect/link sheets
//!
//! Both variants share a body: the connect sheet is the onboarding prompt,
//! the link sheet re-verifies an existing connection.

use iced::widget::{button, column, text};
use iced::Element;

use crate::account::Account;
use crate::dispatch::Action;
use crate::gui::message::Message;
use crate::gui::theme::font_size;

pub fn view(relink: bool, account: Option<&Account>) -> Element<'static, Message> {
    let title = if relink {
        "Link Farcaster"
    } else {
        "Connect Farcaster"
    };

    let linked = account.and_then(|a| {
        a.linked_accounts
            .iter()
            .find(|l| l.kind == "farcaster")
            .map(|l| l.username.clone())
    });

    let body: Element<'static, Message> = match linked {
        Some(username) => column![
            text(format!("Connected as @{}", username)).size(font_size::MEDIUM),
            text("Your profile photo and name sync from Farcaster.").size(font_size::NORMAL),
        ]
        .spacing(8)
        .into(),
        None => column![
            text("Link your Farcaster profile so friends can find you by name.")
                .size(font_size::NORMAL),
            text("Scan the QR code in the mobile app to finish connecting.")
                .size(font_size::NORMAL),
        ]
        .spacing(8)
        .into(),
    };

    column![
        text(title.to_string()).size(font_size::LARGE),
        body,
        button("Done")
            .on_press(Message::Dispatch(Action::HideSheet))
            .padding(8),
    ]
    .spacing(12)
    .into()
}
