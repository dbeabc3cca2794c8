//! Debug sheet, opened with the global debug shortcut

use iced::widget::{button, column, row, text};
use iced::Element;

use crate::account::Account;
use crate::config::Config;
use crate::dispatch::Action;
use crate::gui::message::Message;
use crate::gui::theme::font_size;

pub fn view(account: Option<&Account>, config: &Config) -> Element<'static, Message> {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let chain = config.chain.display_name().to_string();
    let api_url = config.api_url.clone();

    let account_rows: Element<'static, Message> = match account {
        Some(a) => {
            let addr = a.address.clone();
            column![
                info_row("Name", a.name.clone()),
                row![
                    text("Address").size(font_size::NORMAL),
                    text(addr.clone()).size(font_size::SMALL),
                    button(text("Copy").size(font_size::SMALL))
                        .on_press(Message::CopyToClipboard(addr))
                        .padding(4),
                ]
                .spacing(10),
                info_row("Keys", a.keys.len().to_string()),
                info_row("Transfers", a.recent_transfers.len().to_string()),
            ]
            .spacing(6)
            .into()
        }
        None => text("No account loaded").size(font_size::NORMAL).into(),
    };

    column![
        text("Debug").size(font_size::LARGE),
        info_row("Version", version),
        info_row("Chain", chain),
        info_row("API", api_url),
        account_rows,
        button("Close")
            .on_press(Message::Dispatch(Action::HideSheet))
            .padding(8),
    ]
    .spacing(12)
    .into()
}

fn info_row(label: &str, value: String) -> Element<'static, Message> {
    row![
        text(label.to_string()).size(font_size::NORMAL),
        text(value).size(font_size::NORMAL),
    ]
    .spacing(10)
    .into()
}
