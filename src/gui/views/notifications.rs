//! Notifications screen: pending requests, then the invite row

use iced::widget::{button, column, row, text};
use iced::{Element, Length};

use crate::account::{now_s, Account};
use crate::dispatch::Action;
use crate::gui::message::Message;
use crate::gui::theme::font_size;
use crate::notifications::{derive, Notification};
use crate::search::time_ago;

pub fn view(account: Option<&Account>) -> Element<'static, Message> {
    let account = match account {
        Some(a) => a,
        None => return text("Loading account…").size(font_size::MEDIUM).into(),
    };

    let notifs = derive(account);
    if notifs.is_empty() {
        return column![text("Nothing new").size(font_size::MEDIUM)]
            .padding(20)
            .into();
    }

    let now = now_s();
    let mut list = column![].spacing(8);
    for notif in notifs {
        match notif {
            Notification::Request(status) => {
                let who = status
                    .expected_fulfiller
                    .as_ref()
                    .map(|f| f.display_name())
                    .unwrap_or_else(|| "Nobody".to_string());
                let label = column![
                    text(format!(
                        "{} hasn't accepted your {} request",
                        who, status.amount
                    ))
                    .size(font_size::NORMAL),
                    text(time_ago(status.created_at, now, true)).size(font_size::SMALL),
                ]
                .spacing(2);
                list = list.push(
                    button(label)
                        .on_press(Message::Dispatch(Action::OwnRequest { status }))
                        .width(Length::Fill)
                        .padding(10),
                );
            }
            Notification::Invite { url } => {
                list = list.push(
                    row![
                        text("Invite a friend to Lumo").size(font_size::NORMAL),
                        button(text("Copy link").size(font_size::SMALL))
                            .on_press(Message::CopyToClipboard(url))
                            .padding(6),
                    ]
                    .spacing(10),
                );
            }
        }
    }

    list.padding(20).into()
}
