//! Sheet for a payment request the user created
//!
//! Shows the request and offers cancellation. This sheet ignores swipe
//! dismissal; it closes through the cancellation flow or not at all.

use iced::widget::{button, column, text};
use iced::Element;

use crate::account::now_s;
use crate::gui::message::Message;
use crate::gui::theme::font_size;
use crate::request::{CancelRequestFlow, RequestStatus};
use crate::search::time_ago;
use crate::send::SendStatus;

pub fn view(status: &RequestStatus, flow: Option<&CancelRequestFlow>) -> Element<'static, Message> {
    let amount = status.amount.to_string();
    let age = time_ago(status.created_at, now_s(), true);
    let fulfiller = status
        .expected_fulfiller
        .as_ref()
        .map(|f| format!("Requested from {}", f.display_name()));

    let flow_status = flow.map(|f| f.status()).unwrap_or(SendStatus::Idle);

    let mut body = column![
        text("Your request").size(font_size::LARGE),
        text(amount).size(font_size::BALANCE),
        text(format!("Created {}", age)).size(font_size::NORMAL),
    ]
    .spacing(12);

    if let Some(line) = fulfiller {
        body = body.push(text(line).size(font_size::NORMAL));
    }

    match flow_status {
        SendStatus::Idle | SendStatus::Error => {
            body = body.push(
                button("CANCEL REQUEST")
                    .on_press(Message::CancelRequestRequested)
                    .padding(10),
            );
            if flow_status == SendStatus::Error {
                let message = flow
                    .and_then(|f| f.message())
                    .unwrap_or("Cancellation failed")
                    .to_string();
                body = body.push(text(message).size(font_size::NORMAL));
            }
        }
        SendStatus::Loading => {
            body = body.push(text("Cancelling…").size(font_size::NORMAL));
        }
        SendStatus::Success => {
            body = body.push(text("Request cancelled").size(font_size::NORMAL));
        }
    }

    body.into()
}
