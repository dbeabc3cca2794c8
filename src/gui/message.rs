//! Messages (events) that drive the application state machine

use crate::dispatch::Action;
use crate::link::LinkData;
use crate::nav::Screen;
use crate::note::ShareOutcome;
use crate::search::{Recipient, SearchResults};
use crate::send::OpReceipt;

/// Which screen a search result set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Home,
    Send,
}

/// All possible messages/events in the application
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Screen),
    GoBack,

    // Global sheet control
    Dispatch(Action),
    SheetDismissRequested,
    DebugSheetRequested,

    // Home
    HomeSearchOpened,
    HomeSearchClosed,
    HistoryToggled,

    // Recipient search
    SearchPrefixChanged(SearchTarget, String),
    SearchLoaded(SearchTarget, SearchResults),
    RecipientChosen(Recipient),

    // Payment-link (note) flow
    NoteAmountChanged(String),
    NoteSendRequested,
    NoteOpFinished(Result<OpReceipt, String>),
    NoteShareRequested,
    NoteShareFinished(Result<ShareOutcome, String>),

    // Own-request cancellation (driven from the bottom sheet)
    CancelRequestRequested,
    CancelOpFinished(Result<OpReceipt, String>),

    // Profile deep-link resolution
    ProfileLinkLoaded(Result<LinkData, String>),

    // Onboarding checklist
    ChecklistSecureAccount,
    ChecklistConnectFarcaster,
    ChecklistDismissFarcaster,

    // Passkey backup screen
    AddPasskeyRequested,

    // Clipboard operations
    CopyToClipboard(String),
}
