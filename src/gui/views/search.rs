//! Shared recipient search results list

use iced::widget::{button, column, text};
use iced::{Element, Length};

use crate::account::now_s;
use crate::gui::message::Message;
use crate::gui::theme::font_size;
use crate::nav::{Screen, SendParams};
use crate::search::SearchResults;

/// Render search results: header, recipient rows, and the payment-link
/// prompt when nothing matched.
pub fn results_list(results: &SearchResults) -> Element<'static, Message> {
    let now = now_s();
    let mut list = column![].spacing(8);

    if let Some(err) = &results.error {
        list = list.push(text(format!("Search failed: {}", err)).size(font_size::NORMAL));
        return list.into();
    }

    if let Some(header) = results.header() {
        list = list.push(text(header.to_string()).size(font_size::NORMAL));
    }

    for recipient in &results.recipients {
        let mut label = column![text(recipient.display_name()).size(font_size::MEDIUM)].spacing(2);
        if let Some(caption) = recipient.last_send_caption(now) {
            label = label.push(text(caption).size(font_size::SMALL));
        }
        list = list.push(
            button(label)
                .on_press(Message::RecipientChosen(recipient.clone()))
                .width(Length::Fill)
                .padding(10),
        );
    }

    if results.suggest_payment_link() {
        list = list.push(text("No matches.").size(font_size::NORMAL));
        list = list.push(
            button("Send a payment link instead")
                .on_press(Message::Navigate(Screen::Send(SendParams {
                    recipient: None,
                    send_note: true,
                })))
                .padding(10),
        );
    }

    list.into()
}
