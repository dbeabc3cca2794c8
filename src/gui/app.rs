//! Main Iced application

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Task, Theme};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::account::{now_s, AccountKey, AccountManager, Amount, SlotType};
use crate::config::Config;
use crate::dispatch::{Action, Dispatcher};
use crate::gui::backend::{self, DemoBackend};
use crate::gui::message::{Message, SearchTarget};
use crate::gui::state::{SendState, UiState};
use crate::gui::status_layer::take_status_receiver;
use crate::gui::theme::font_size;
use crate::gui::{views, widgets};
use crate::link::{resolve_profile, LinkStatus, LinkStatusFetcher, ProfileResolution};
use crate::nav::{Nav, ProfileParams, Screen};
use crate::note::{self, NoteFlow, ShareSheet};
use crate::request::CancelRequestFlow;
use crate::search::SearchResults;
use crate::send::{OpSender, SendStatus};
use crate::sheet::SheetHost;

/// Main application struct
pub struct LumoApp {
    config: Config,
    accounts: AccountManager,
    dispatcher: Dispatcher,
    sheets: SheetHost,
    nav: Nav,
    ui: UiState,
    backend: Arc<DemoBackend>,
    status_rx: Option<Receiver<String>>,
}

impl LumoApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let accounts = AccountManager::new(backend::seed_account(&config));

        // The sheet host handles every sheet action dispatched anywhere in
        // the view tree.
        let mut dispatcher = Dispatcher::new();
        let sheets = SheetHost::new();
        sheets.register(&mut dispatcher);

        let app = Self {
            config,
            accounts,
            dispatcher,
            sheets,
            nav: Nav::new(),
            ui: UiState::default(),
            backend: Arc::new(DemoBackend::new()),
            status_rx: take_status_receiver(),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Lumo Wallet")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.drain_status();
        let task = self.handle_message(message);
        self.sync_title();
        task
    }

    pub fn view(&self) -> Element<Message> {
        self.render_view()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Desktop analog of the shake-to-debug gesture
        iced::keyboard::on_key_press(|key, _modifiers| match key {
            iced::keyboard::Key::Named(iced::keyboard::key::Named::F12) => {
                Some(Message::DebugSheetRequested)
            }
            _ => None,
        })
    }

    /// Pull any pending status-bar lines captured from the log stream.
    fn drain_status(&mut self) {
        if let Some(rx) = &self.status_rx {
            while let Ok(line) = rx.try_recv() {
                self.ui.status_line = line;
            }
        }
    }

    /// Header title follows the current screen.
    fn sync_title(&mut self) {
        let title = match self.nav.current() {
            Screen::Home => {
                if self.ui.home.history_open {
                    "History".to_string()
                } else {
                    "Home".to_string()
                }
            }
            Screen::Send(params) => {
                if params.send_note {
                    "Send Link".to_string()
                } else {
                    "Send".to_string()
                }
            }
            Screen::Receive => "Request".to_string(),
            Screen::Profile(ProfileParams::Account { eacc, .. }) => eacc.display_name(),
            Screen::Profile(ProfileParams::Link(_)) => "Profile".to_string(),
            Screen::Notifications => "Notifications".to_string(),
            Screen::Settings => "Settings".to_string(),
            Screen::AddPasskey => "Add Passkey".to_string(),
            Screen::Deposit => "Deposit".to_string(),
        };
        self.nav.set_title(&title);
    }

    fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                let follow_up = match &screen {
                    Screen::Notifications => {
                        crate::notifications::mark_read(&self.accounts);
                        None
                    }
                    Screen::Profile(ProfileParams::Link(link)) => {
                        // Kick off link resolution before showing the screen
                        self.ui.profile.link = Some(link.clone());
                        self.ui.profile.status = LinkStatus::loading();
                        let backend = self.backend.clone();
                        let link = link.clone();
                        Some(Task::perform(
                            async move { backend.fetch(&link).await.map_err(|e| e.to_string()) },
                            Message::ProfileLinkLoaded,
                        ))
                    }
                    Screen::Send(params) if !params.send_note => {
                        // Preload recents so the search tab isn't empty
                        Some(Task::done(Message::SearchPrefixChanged(
                            SearchTarget::Send,
                            self.ui.send.prefix.clone(),
                        )))
                    }
                    _ => None,
                };
                self.nav.navigate(screen);
                follow_up.unwrap_or_else(Task::none)
            }

            Message::GoBack => {
                self.nav.go_back();
                Task::none()
            }

            Message::Dispatch(action) => {
                // Opening a fresh request sheet or closing any sheet drops
                // the stale cancellation flow.
                if matches!(action, Action::HideSheet | Action::OwnRequest { .. }) {
                    self.ui.cancel = None;
                }
                if let Err(e) = self.dispatcher.dispatch(action) {
                    tracing::error!("dispatch failed: {:#}", e);
                }
                Task::none()
            }

            Message::SheetDismissRequested => {
                self.sheets.swipe_dismiss();
                if !self.sheets.is_open() {
                    self.ui.cancel = None;
                }
                Task::none()
            }

            Message::DebugSheetRequested => {
                self.sheets.shake();
                Task::none()
            }

            Message::HomeSearchOpened => {
                self.ui.home.search_prefix = Some(String::new());
                Task::done(Message::SearchPrefixChanged(
                    SearchTarget::Home,
                    String::new(),
                ))
            }

            Message::HomeSearchClosed => {
                self.ui.home.search_prefix = None;
                self.ui.home.results = SearchResults::empty();
                Task::none()
            }

            Message::HistoryToggled => {
                self.ui.home.history_open = !self.ui.home.history_open;
                Task::none()
            }

            Message::SearchPrefixChanged(target, raw) => {
                match target {
                    SearchTarget::Home => self.ui.home.search_prefix = Some(raw.clone()),
                    SearchTarget::Send => self.ui.send.prefix = raw.clone(),
                }
                let backend = self.backend.clone();
                Task::perform(
                    async move { SearchResults::run(&*backend, &raw).await },
                    move |results| Message::SearchLoaded(target, results),
                )
            }

            Message::SearchLoaded(target, results) => {
                // Responses can arrive out of order; last one wins
                match target {
                    SearchTarget::Home => self.ui.home.results = results,
                    SearchTarget::Send => self.ui.send.results = results,
                }
                Task::none()
            }

            Message::RecipientChosen(recipient) => {
                self.ui.home.search_prefix = None;
                let eacc = crate::account::NamedAccount {
                    addr: recipient.addr,
                    name: recipient.name,
                };
                Task::done(Message::Navigate(Screen::Profile(ProfileParams::Account {
                    eacc,
                    inviter: None,
                })))
            }

            Message::NoteAmountChanged(input) => {
                // Amount is frozen while the operation is in flight
                if matches!(
                    self.ui.send.note.as_ref().map(|f| f.status()),
                    Some(SendStatus::Loading)
                ) {
                    return Task::none();
                }
                self.ui.send.amount_input = input;
                self.ui.send.note = match (
                    Amount::parse_dollars(&self.ui.send.amount_input),
                    self.accounts.read(),
                ) {
                    (Ok(amount), Some(account)) if !amount.is_zero() => {
                        Some(NoteFlow::new(amount, &account))
                    }
                    _ => None,
                };
                Task::none()
            }

            Message::NoteSendRequested => {
                if let Some(flow) = &mut self.ui.send.note {
                    match flow.start(&self.accounts) {
                        Ok(params) => {
                            let backend = self.backend.clone();
                            return Task::perform(
                                async move {
                                    backend
                                        .create_note(&params.owner, params.amount, &params.nonce)
                                        .await
                                        .map_err(|e| e.to_string())
                                },
                                Message::NoteOpFinished,
                            );
                        }
                        Err(e) => tracing::warn!("note send rejected: {:#}", e),
                    }
                }
                Task::none()
            }

            Message::NoteOpFinished(result) => {
                if let Some(flow) = &mut self.ui.send.note {
                    flow.complete(result.map_err(anyhow::Error::msg));
                }
                Task::none()
            }

            Message::NoteShareRequested => {
                if let Some(flow) = &self.ui.send.note {
                    if flow.status() == SendStatus::Success {
                        let url = flow.link().format(&self.config.link_base);
                        let backend = self.backend.clone();
                        return Task::perform(
                            async move { backend.share(&url).await.map_err(|e| e.to_string()) },
                            Message::NoteShareFinished,
                        );
                    }
                }
                Task::none()
            }

            Message::NoteShareFinished(result) => {
                match result {
                    Ok(outcome) => {
                        note::handle_share_outcome(outcome, &mut self.nav);
                        if *self.nav.current() == Screen::Home {
                            // Shared and done; clear the composer
                            self.ui.send = SendState::default();
                        }
                    }
                    Err(e) => {
                        // Known gap: the user gets no visible feedback here.
                        tracing::error!("note share error: {}", e);
                    }
                }
                Task::none()
            }

            Message::CancelRequestRequested => {
                if self.ui.cancel.is_none() {
                    if let (Some(crate::sheet::Sheet::OwnRequest { status }), Some(account)) =
                        (self.sheets.active(), self.accounts.read())
                    {
                        self.ui.cancel = Some(CancelRequestFlow::new(status, &account));
                    }
                }
                if let Some(flow) = &mut self.ui.cancel {
                    match flow.start(&self.accounts) {
                        Ok((id, nonce)) => {
                            let backend = self.backend.clone();
                            return Task::perform(
                                async move {
                                    backend
                                        .cancel_request(&id, &nonce)
                                        .await
                                        .map_err(|e| e.to_string())
                                },
                                Message::CancelOpFinished,
                            );
                        }
                        Err(e) => tracing::warn!("cancellation rejected: {:#}", e),
                    }
                }
                Task::none()
            }

            Message::CancelOpFinished(result) => {
                if let Some(flow) = &mut self.ui.cancel {
                    flow.complete(result.map_err(anyhow::Error::msg));
                    if flow.status() == SendStatus::Success {
                        if let Err(e) = flow.finish(&mut self.dispatcher, &mut self.nav) {
                            tracing::error!("finishing cancellation: {:#}", e);
                        }
                        self.ui.cancel = None;
                    }
                }
                Task::none()
            }

            Message::ProfileLinkLoaded(result) => {
                match result {
                    Ok(data) => {
                        self.ui.profile.status = LinkStatus::ready(data.clone());
                        match resolve_profile(&data) {
                            ProfileResolution::Show { eacc, inviter } => {
                                // Replace the link screen with the resolved one
                                self.nav.go_back();
                                return Task::done(Message::Navigate(Screen::Profile(
                                    ProfileParams::Account { eacc, inviter },
                                )));
                            }
                            ProfileResolution::Exit => {
                                if self.nav.can_go_back() {
                                    self.nav.go_back();
                                } else {
                                    self.nav.navigate(Screen::Home);
                                }
                            }
                        }
                    }
                    Err(e) => {
                        self.ui.profile.status = LinkStatus::failed(e);
                    }
                }
                Task::none()
            }

            Message::ChecklistSecureAccount => {
                if let Err(e) = crate::onboarding::secure_account(&mut self.nav, &mut self.dispatcher)
                {
                    tracing::error!("checklist action failed: {:#}", e);
                }
                Task::none()
            }

            Message::ChecklistConnectFarcaster => {
                if let Err(e) =
                    crate::onboarding::connect_farcaster(&mut self.nav, &mut self.dispatcher)
                {
                    tracing::error!("checklist action failed: {:#}", e);
                }
                Task::none()
            }

            Message::ChecklistDismissFarcaster => {
                if let Some(account) = self.accounts.read() {
                    let checklist = crate::onboarding::Checklist::derive(&account);
                    if let Err(e) = crate::onboarding::dismiss_connect_farcaster(
                        &checklist,
                        &self.accounts,
                        &mut self.dispatcher,
                    ) {
                        tracing::warn!("dismiss rejected: {:#}", e);
                    }
                }
                Task::none()
            }

            Message::AddPasskeyRequested => {
                // Demo stand-in for the passkey ceremony: records the backup
                // slot directly.
                self.accounts.transform(|mut a| {
                    let used = a
                        .keys
                        .iter()
                        .filter(|k| k.slot_type() == SlotType::PasskeyBackup)
                        .count() as u8;
                    a.keys.push(AccountKey {
                        slot: 0x40 + used,
                        pub_key: format!("0x04b{:02x}", used),
                        added_at: now_s(),
                    });
                    a
                });
                tracing::info!("passkey backup added");
                self.nav.go_back();
                Task::none()
            }

            Message::CopyToClipboard(contents) => {
                tracing::info!("copied to clipboard");
                iced::clipboard::write(contents)
            }
        }
    }

    fn render_view(&self) -> Element<Message> {
        let account = self.accounts.read();

        let mut header = row![].spacing(10);
        if self.nav.can_go_back() {
            header = header.push(button("← Back").on_press(Message::GoBack).padding(6));
        }
        header = header.push(text(self.nav.title().to_string()).size(font_size::LARGE));

        let body: Element<'static, Message> = match self.nav.current() {
            Screen::Home => views::home::view(account.as_ref(), &self.ui.home),
            Screen::Send(params) => views::send::view(
                account.as_ref(),
                params,
                &self.ui.send,
                &self.config.link_base,
            ),
            Screen::Receive => views::receive::view(account.as_ref(), &self.config.link_base),
            Screen::Profile(params) => views::profile::view(params, &self.ui.profile),
            Screen::Notifications => views::notifications::view(account.as_ref()),
            Screen::Settings => views::settings::view(account.as_ref(), &self.config),
            Screen::AddPasskey => add_passkey_view(),
            Screen::Deposit => deposit_view(account.as_ref()),
        };

        let main_view: Element<Message> = column![
            container(header).padding(12),
            container(body).width(Length::Fill).height(Length::Fill),
            container(text(self.ui.status_line.clone()).size(font_size::SMALL)).padding(6),
        ]
        .into();

        // Overlay the active bottom sheet, if any
        if let Some(sheet) = self.sheets.active() {
            let on_dismiss = sheet
                .swipe_closable()
                .then_some(Message::SheetDismissRequested);
            let content = views::sheets::render(&sheet, account.as_ref(), &self.config, &self.ui);
            widgets::sheet_overlay(main_view, content, on_dismiss)
        } else {
            main_view
        }
    }
}

/// Passkey backup screen
fn add_passkey_view() -> Element<'static, Message> {
    column![
        text("Secure your account").size(font_size::LARGE),
        text("A passkey backup lets you recover this account from any of your devices.")
            .size(font_size::NORMAL),
        button("Back up with passkey")
            .on_press(Message::AddPasskeyRequested)
            .padding(12),
    ]
    .spacing(16)
    .padding(20)
    .into()
}

/// Deposit screen
fn deposit_view(account: Option<&crate::account::Account>) -> Element<'static, Message> {
    let Some(account) = account else {
        return text("Loading account…").size(font_size::MEDIUM).into();
    };
    let addr = account.address.clone();
    column![
        text("Deposit").size(font_size::LARGE),
        text("Send USDC on Base to this address.").size(font_size::NORMAL),
        row![
            text(addr.clone()).size(font_size::SMALL),
            button(text("Copy").size(font_size::SMALL))
                .on_press(Message::CopyToClipboard(addr))
                .padding(6),
        ]
        .spacing(10),
    ]
    .spacing(16)
    .padding(20)
    .into()
}
