//! Send screen: recipient search, or the payment-link composer

use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length};

use crate::account::Account;
use crate::gui::message::{Message, SearchTarget};
use crate::gui::state::SendState;
use crate::gui::theme::{font_size, spacing};
use crate::gui::views::search;
use crate::nav::SendParams;
use crate::send::SendStatus;

pub fn view(
    account: Option<&Account>,
    params: &SendParams,
    state: &SendState,
    link_base: &str,
) -> Element<'static, Message> {
    let account = match account {
        Some(a) => a,
        None => return text("Loading account…").size(font_size::MEDIUM).into(),
    };

    if params.send_note {
        note_composer(account, state, link_base)
    } else {
        let mut body = column![].spacing(spacing::MEDIUM);
        if let Some(recipient) = &params.recipient {
            body = body.push(
                text(format!("Sending to {}", recipient.display_name()))
                    .size(font_size::MEDIUM),
            );
        }
        body = body.push(
            text_input("Search for a recipient…", &state.prefix)
                .on_input(|s| Message::SearchPrefixChanged(SearchTarget::Send, s))
                .width(Length::Fill),
        );
        body = body.push(search::results_list(&state.results));
        body.padding(20).into()
    }
}

/// Compose a one-time payment link: amount entry, send button, share step.
fn note_composer(
    account: &Account,
    state: &SendState,
    link_base: &str,
) -> Element<'static, Message> {
    let status = state.note.as_ref().map(|f| f.status());

    let mut amount_input = text_input("0.00", &state.amount_input).width(Length::Fixed(200.0));
    // Amount is frozen once the operation is in flight
    if status != Some(SendStatus::Loading) {
        amount_input = amount_input.on_input(Message::NoteAmountChanged);
    }

    let mut body = column![
        text("Send a payment link").size(font_size::LARGE),
        row![text("$").size(font_size::XLARGE), amount_input].spacing(6),
    ]
    .spacing(spacing::MEDIUM);

    match (&state.note, status) {
        (Some(flow), Some(SendStatus::Success)) => {
            let url = flow.link().format(link_base);
            body = body.push(text("Payment link created").size(font_size::MEDIUM));
            body = body.push(text(url.clone()).size(font_size::SMALL));
            body = body.push(
                row![
                    button("Share Link")
                        .on_press(Message::NoteShareRequested)
                        .padding(10),
                    button("Copy")
                        .on_press(Message::CopyToClipboard(url))
                        .padding(10),
                ]
                .spacing(10),
            );
        }
        (Some(flow), _) => {
            let mut send_button = button("Create Payment Link").padding(12);
            if status == Some(SendStatus::Idle) && !flow.is_send_disabled(account) {
                send_button = send_button.on_press(Message::NoteSendRequested);
            }
            body = body.push(send_button);

            let (line, _is_error) = flow.status_line(account);
            body = body.push(text(line).size(font_size::NORMAL));
        }
        (None, _) => {
            // No parseable amount yet
            body = body.push(button("Create Payment Link").padding(12));
            body = body.push(
                text("Works like cash, redeemable by recipient").size(font_size::NORMAL),
            );
        }
    }

    body.padding(20).into()
}
