//! Settings screen: chain info, devices, linked identities

use iced::widget::{button, column, row, text};
use iced::Element;

use crate::account::{now_s, Account, SlotType};
use crate::config::Config;
use crate::dispatch::Action;
use crate::gui::message::Message;
use crate::gui::theme::font_size;
use crate::nav::Screen;
use crate::search::time_ago;

pub fn view(account: Option<&Account>, config: &Config) -> Element<'static, Message> {
    let mut body = column![
        text("Settings").size(font_size::LARGE),
        info_row("Chain", config.chain.display_name().to_string()),
        info_row("Token", config.chain.token_symbol().to_string()),
        info_row("API", config.api_url.clone()),
    ]
    .spacing(12);

    if let Some(account) = account {
        body = body.push(farcaster_section(account));
        body = body.push(devices_section(account));
        body = body.push(
            button("Add passkey backup")
                .on_press(Message::Navigate(Screen::AddPasskey))
                .padding(8),
        );
    }

    body = body.push(
        button(text("What is a passkey?").size(font_size::SMALL))
            .on_press(Message::Dispatch(Action::HelpModal {
                title: "Passkey backups".into(),
                content: "A passkey stored in your password manager can recover \
                          this account if you lose your devices."
                    .into(),
            }))
            .padding(6),
    );

    body.padding(20).into()
}

fn farcaster_section(account: &Account) -> Element<'static, Message> {
    let linked = account
        .linked_accounts
        .iter()
        .find(|l| l.kind == "farcaster");
    match linked {
        Some(l) => row![
            text(format!("Farcaster: @{}", l.username)).size(font_size::NORMAL),
            button(text("Re-link").size(font_size::SMALL))
                .on_press(Message::Dispatch(Action::LinkFarcaster))
                .padding(6),
        ]
        .spacing(10)
        .into(),
        None => button("Connect Farcaster")
            .on_press(Message::Dispatch(Action::ConnectFarcaster))
            .padding(8)
            .into(),
    }
}

fn devices_section(account: &Account) -> Element<'static, Message> {
    let now = now_s();
    let mut list = column![text("Keys").size(font_size::MEDIUM)].spacing(4);
    for key in &account.keys {
        let kind = match key.slot_type() {
            SlotType::Device => "Device",
            SlotType::PasskeyBackup => "Passkey backup",
            SlotType::SecurityKeyBackup => "Security key",
            SlotType::Unknown => "Unknown",
        };
        list = list.push(
            text(format!(
                "{} · slot {:#04x} · added {}",
                kind,
                key.slot,
                time_ago(key.added_at, now, true)
            ))
            .size(font_size::NORMAL),
        );
    }
    list.into()
}

fn info_row(label: &str, value: String) -> Element<'static, Message> {
    row![
        text(label.to_string()).size(font_size::NORMAL),
        text(value).size(font_size::NORMAL),
    ]
    .spacing(10)
    .into()
}
