//! Receive screen: shareable links that bring money in

use iced::widget::{button, column, row, text};
use iced::Element;

use crate::account::Account;
use crate::gui::message::Message;
use crate::gui::theme::font_size;
use crate::link::Link;

pub fn view(account: Option<&Account>, link_base: &str) -> Element<'static, Message> {
    let account = match account {
        Some(a) => a,
        None => return text("Loading account…").size(font_size::MEDIUM).into(),
    };

    let profile_url = Link::Account {
        account: account.name.clone(),
    }
    .format(link_base);

    let mut body = column![
        text("Get paid").size(font_size::LARGE),
        text("Anyone with your link can pay you by name.").size(font_size::NORMAL),
        link_row(profile_url),
    ]
    .spacing(16);

    if let Some(invite) = &account.invite_link {
        body = body.push(text("Invite a friend").size(font_size::MEDIUM));
        body = body.push(link_row(invite.clone()));
    }

    body.padding(20).into()
}

fn link_row(url: String) -> Element<'static, Message> {
    row![
        text(url.clone()).size(font_size::SMALL),
        button(text("Copy").size(font_size::SMALL))
            .on_press(Message::CopyToClipboard(url))
            .padding(6),
    ]
    .spacing(10)
    .into()
}
