//! Per-screen UI state
//!
//! Everything here is local presentation state: text field contents, open
//! panels, in-flight flows. Account data itself lives behind the
//! [`crate::account::AccountManager`] and is re-read on every render.

use crate::link::{Link, LinkData, LinkStatus};
use crate::note::NoteFlow;
use crate::request::CancelRequestFlow;
use crate::search::SearchResults;

/// Home screen: collapsible search header plus the history panel toggle.
pub struct HomeState {
    /// `Some` while the search header is expanded; holds the raw prefix.
    pub search_prefix: Option<String>,
    pub results: SearchResults,
    pub history_open: bool,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            search_prefix: None,
            results: SearchResults::empty(),
            history_open: false,
        }
    }
}

/// Send screen: recipient search on one side, the payment-link composer on
/// the other.
pub struct SendState {
    pub prefix: String,
    pub results: SearchResults,
    pub amount_input: String,
    pub note: Option<NoteFlow>,
}

impl Default for SendState {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            results: SearchResults::empty(),
            amount_input: String::new(),
            note: None,
        }
    }
}

/// Profile screen: the link being resolved and its fetch state.
pub struct ProfileState {
    pub link: Option<Link>,
    pub status: LinkStatus<LinkData>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            link: None,
            status: LinkStatus {
                is_loading: false,
                error: None,
                data: None,
            },
        }
    }
}

/// All mutable UI state, grouped per screen.
#[derive(Default)]
pub struct UiState {
    pub home: HomeState,
    pub send: SendState,
    pub profile: ProfileState,
    /// In-flight cancellation of one of the user's own requests.
    pub cancel: Option<CancelRequestFlow>,
    /// Latest status-bar line captured from the log stream.
    pub status_line: String,
}
