//! Bottom-sheet overlay widget
//!
//! Renders the base content with a dimmed backdrop and the sheet card
//! anchored to the bottom edge, the desktop equivalent of the mobile
//! bottom-sheet surface. Sheets that permit it get a close affordance;
//! the rest can only be closed by their own buttons.

use iced::widget::{button, column, container, row, stack, text};
use iced::{Background, Border, Element, Length};

use crate::gui::theme::AppTheme;

/// Overlay `sheet_content` over `base`. `on_dismiss` is the message emitted
/// by the close affordance; pass `None` for sheets that must not be
/// dismissed out-of-band.
pub fn sheet_overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    sheet_content: Element<'a, Message>,
    on_dismiss: Option<Message>,
) -> Element<'a, Message> {
    let close_row: Element<'a, Message> = match on_dismiss {
        Some(msg) => row![
            container(text("")).width(Length::Fill),
            button(text("✕").size(14)).on_press(msg).padding(4),
        ]
        .into(),
        None => row![container(text("")).width(Length::Fill)].into(),
    };

    stack![
        base,
        container(
            container(column![close_row, sheet_content].spacing(8))
                .style(sheet_card_style)
                .padding(20)
                .width(Length::Fixed(460.0))
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .align_y(iced::alignment::Vertical::Bottom)
        .style(backdrop_style)
    ]
    .into()
}

/// Style for the sheet card itself
fn sheet_card_style(_theme: &iced::Theme) -> container::Style {
    let palette = AppTheme::default();
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.primary,
            width: 1.0,
            radius: iced::border::Radius {
                top_left: 16.0,
                top_right: 16.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
        },
        shadow: iced::Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: iced::Vector::new(0.0, -4.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

/// Style for the dimmed backdrop
fn backdrop_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
        ..Default::default()
    }
}
