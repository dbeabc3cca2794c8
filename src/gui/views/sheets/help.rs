//! Generic help sheet: a title, explanatory copy, one dismiss button

use iced::widget::{button, column, text};
use iced::Element;

use crate::dispatch::Action;
use crate::gui::message::Message;
use crate::gui::theme::font_size;

pub fn view(title: &str, content: &str) -> Element<'static, Message> {
    column![
        text(title.to_string()).size(font_size::LARGE),
        text(content.to_string()).size(font_size::NORMAL),
        button("Got it")
            .on_press(Message::Dispatch(Action::HideSheet))
            .padding(8),
    ]
    .spacing(12)
    .into()
}
