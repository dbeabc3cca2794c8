//! Home screen: balance, primary actions, collapsible search, history panel

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::account::{now_s, Account, OpStatus};
use crate::dispatch::Action;
use crate::gui::message::{Message, SearchTarget};
use crate::gui::state::HomeState;
use crate::gui::theme::{font_size, spacing};
use crate::gui::views::search;
use crate::nav::{Screen, SendParams};
use crate::onboarding::Checklist;
use crate::search::time_ago;

pub fn view(account: Option<&Account>, state: &HomeState) -> Element<'static, Message> {
    let account = match account {
        Some(a) => a,
        None => {
            return container(text("Loading account…").size(font_size::MEDIUM))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }
    };

    // Expanded search header takes over the whole screen
    if let Some(prefix) = &state.search_prefix {
        return column![
            row![
                text_input("Search for a recipient…", prefix)
                    .on_input(|s| Message::SearchPrefixChanged(SearchTarget::Home, s))
                    .width(Length::Fill),
                button("Cancel").on_press(Message::HomeSearchClosed).padding(8),
            ]
            .spacing(10),
            search::results_list(&state.results),
        ]
        .spacing(spacing::MEDIUM)
        .padding(20)
        .into();
    }

    let balance = account.last_balance.to_string();
    let checklist = Checklist::derive(account);

    let mut body = column![
        row![
            button("Search").on_press(Message::HomeSearchOpened).padding(8),
            container(text("")).width(Length::Fill),
            notifications_button(account),
            button("Settings")
                .on_press(Message::Navigate(Screen::Settings))
                .padding(8),
        ]
        .spacing(10),
        row![
            text(balance).size(font_size::BALANCE),
            button(text("?").size(font_size::SMALL))
                .on_press(Message::Dispatch(Action::HelpModal {
                    title: "Your balance".into(),
                    content: "This is your USDC balance on Base. Deposit to add more."
                        .into(),
                }))
                .padding(4),
        ]
        .spacing(10),
        action_buttons(account),
    ]
    .spacing(spacing::LARGE);

    if !checklist.all_complete {
        body = body.push(
            button("Finish setting up your account")
                .on_press(Message::Dispatch(Action::OnboardingChecklist))
                .padding(10),
        );
    }

    let toggle_label = if state.history_open {
        "Hide activity"
    } else {
        "Recent activity"
    };
    body = body.push(button(toggle_label).on_press(Message::HistoryToggled).padding(8));

    if state.history_open {
        body = body.push(history_list(account));
    }

    body.padding(20).into()
}

fn notifications_button(account: &Account) -> Element<'static, Message> {
    let label = if crate::notifications::unread(account) {
        "Notifications ●"
    } else {
        "Notifications"
    };
    button(text(label.to_string()).size(font_size::NORMAL))
        .on_press(Message::Navigate(Screen::Notifications))
        .padding(8)
        .into()
}

fn action_buttons(account: &Account) -> Element<'static, Message> {
    let deposit = button("Deposit")
        .on_press(Message::Navigate(Screen::Deposit))
        .padding(12);
    let request = button("Request")
        .on_press(Message::Navigate(Screen::Receive))
        .padding(12);
    // Nothing to send with an empty balance
    let mut send = button("Send").padding(12);
    if !account.last_balance.is_zero() {
        send = send.on_press(Message::Navigate(Screen::Send(SendParams::default())));
    }
    row![deposit, request, send].spacing(12).into()
}

fn history_list(account: &Account) -> Element<'static, Message> {
    if account.recent_transfers.is_empty() {
        return text("No activity yet").size(font_size::NORMAL).into();
    }

    let now = now_s();
    let mut list = column![].spacing(6);
    for transfer in &account.recent_transfers {
        let direction = if transfer.from == account.address {
            format!("Sent to {}", crate::account::contract_address(&transfer.to))
        } else {
            format!(
                "Received from {}",
                crate::account::contract_address(&transfer.from)
            )
        };
        let status = match transfer.status {
            OpStatus::Pending => " · pending",
            OpStatus::Failed => " · failed",
            OpStatus::Confirmed => "",
        };
        list = list.push(
            row![
                text(direction).size(font_size::NORMAL),
                text(transfer.amount.to_string()).size(font_size::NORMAL),
                text(format!(
                    "{}{}",
                    time_ago(transfer.timestamp, now, false),
                    status
                ))
                .size(font_size::SMALL),
            ]
            .spacing(12),
        );
    }
    list.into()
}
