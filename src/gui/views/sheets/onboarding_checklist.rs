//! Onboarding checklist sheet

use iced::widget::{button, column, row, text};
use iced::Element;

use crate::gui::message::Message;
use crate::gui::theme::font_size;
use crate::onboarding::Checklist;

pub fn view(checklist: Option<Checklist>) -> Element<'static, Message> {
    let checklist = match checklist {
        Some(c) => c,
        None => {
            return text("No account loaded").size(font_size::NORMAL).into();
        }
    };

    let mut body = column![
        text("Finish setting up").size(font_size::LARGE),
        checklist_row("Secure your account", checklist.has_backup),
        checklist_row("Connect Farcaster", checklist.farcaster_connected),
    ]
    .spacing(12);

    if !checklist.has_backup {
        body = body.push(
            button("Secure your account")
                .on_press(Message::ChecklistSecureAccount)
                .padding(8),
        );
    }
    if !checklist.farcaster_connected {
        body = body.push(
            button("Connect Farcaster")
                .on_press(Message::ChecklistConnectFarcaster)
                .padding(8),
        );
        if checklist.can_dismiss_farcaster() {
            body = body.push(
                button(text("Skip for now").size(font_size::SMALL))
                    .on_press(Message::ChecklistDismissFarcaster)
                    .padding(6),
            );
        }
    }
    if checklist.all_complete {
        body = body.push(text("All set!").size(font_size::MEDIUM));
    }

    body.into()
}

fn checklist_row(label: &str, done: bool) -> Element<'static, Message> {
    let mark = if done { "✓" } else { "○" };
    row![
        text(mark.to_string()).size(font_size::MEDIUM),
        text(label.to_string()).size(font_size::MEDIUM),
    ]
    .spacing(10)
    .into()
}
