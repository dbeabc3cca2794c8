//! Profile screen: a resolved account, or a deep link still loading

use iced::widget::{button, column, text};
use iced::Element;

use crate::account::contract_address;
use crate::gui::message::Message;
use crate::gui::state::ProfileState;
use crate::gui::theme::font_size;
use crate::link::not_found_banner;
use crate::nav::ProfileParams;

pub fn view(params: &ProfileParams, state: &ProfileState) -> Element<'static, Message> {
    match params {
        ProfileParams::Account { eacc, inviter } => {
            let mut body = column![
                text(eacc.display_name()).size(font_size::TITLE),
                text(contract_address(&eacc.addr)).size(font_size::NORMAL),
                button(text("Copy address").size(font_size::SMALL))
                    .on_press(Message::CopyToClipboard(eacc.addr.clone()))
                    .padding(6),
            ]
            .spacing(12);
            if let Some(inviter) = inviter {
                body = body.push(
                    text(format!("Invited by {}", inviter.display_name())).size(font_size::NORMAL),
                );
            }
            body.padding(20).into()
        }

        ProfileParams::Link(link) => {
            if state.status.is_loading {
                return text("Loading…").size(font_size::MEDIUM).into();
            }
            if let Some(err) = &state.status.error {
                // Account links get the friendlier not-found treatment
                return match not_found_banner(link) {
                    Some((title, message)) => column![
                        text(title).size(font_size::LARGE),
                        text(message).size(font_size::NORMAL),
                        button("Go back").on_press(Message::GoBack).padding(8),
                    ]
                    .spacing(12)
                    .padding(20)
                    .into(),
                    None => column![
                        text(format!("Couldn't load link: {}", err)).size(font_size::NORMAL),
                        button("Go back").on_press(Message::GoBack).padding(8),
                    ]
                    .spacing(12)
                    .padding(20)
                    .into(),
                };
            }
            // Resolution lands as a navigation; this frame is transient
            text("Loading…").size(font_size::MEDIUM).into()
        }
    }
}
