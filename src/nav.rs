//! Typed navigation over a hierarchical screen stack
//!
//! The rendering layer owns the actual transition animations; this module
//! only tracks which screen is current, what came before it, and who wants
//! to hear about transitions.

use crate::account::NamedAccount;
use crate::link::Link;
use crate::search::Recipient;

/// Parameters for the Send screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SendParams {
    pub recipient: Option<Recipient>,
    /// Jump straight to the payment-link (note) flow.
    pub send_note: bool,
}

/// Parameters for the Profile screen: either a link still to be resolved, or
/// an already-loaded account.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileParams {
    Link(Link),
    Account {
        eacc: NamedAccount,
        inviter: Option<NamedAccount>,
    },
}

/// All screens in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Send(SendParams),
    Receive,
    Profile(ProfileParams),
    Notifications,
    Settings,
    AddPasskey,
    Deposit,
}

/// Navigation events listeners can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    TransitionEnd,
}

/// Handle returned by [`Nav::add_listener`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSubscription(u64);

/// Screen stack with typed navigate/go-back operations.
pub struct Nav {
    stack: Vec<Screen>,
    title: String,
    listeners: Vec<(NavSubscription, NavEvent, Box<dyn FnMut() + Send>)>,
    next_id: u64,
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

impl Nav {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
            title: String::from("Home"),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().expect("nav stack never empty")
    }

    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(?screen, "navigate");
        if screen == Screen::Home {
            // Home is the root: navigating there unwinds the stack.
            self.reset_home();
            return;
        }
        self.stack.push(screen);
        self.emit(NavEvent::TransitionEnd);
    }

    /// Unwind the whole stack back to Home.
    pub fn reset_home(&mut self) {
        self.stack.clear();
        self.stack.push(Screen::Home);
        self.emit(NavEvent::TransitionEnd);
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn go_back(&mut self) {
        if self.can_go_back() {
            self.stack.pop();
            self.emit(NavEvent::TransitionEnd);
        }
    }

    /// Screen title shown in the header bar.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_listener(
        &mut self,
        event: NavEvent,
        callback: impl FnMut() + Send + 'static,
    ) -> NavSubscription {
        let sub = NavSubscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((sub, event, Box::new(callback)));
        sub
    }

    pub fn remove_listener(&mut self, sub: NavSubscription) {
        self.listeners.retain(|(s, _, _)| *s != sub);
    }

    fn emit(&mut self, event: NavEvent) {
        for (_, e, cb) in self.listeners.iter_mut() {
            if *e == event {
                cb();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Nav::new();
        assert_eq!(*nav.current(), Screen::Home);
        assert!(!nav.can_go_back());

        nav.navigate(Screen::Receive);
        assert_eq!(*nav.current(), Screen::Receive);
        assert!(nav.can_go_back());

        nav.go_back();
        assert_eq!(*nav.current(), Screen::Home);
        // Backing out of the root is a no-op
        nav.go_back();
        assert_eq!(*nav.current(), Screen::Home);
    }

    #[test]
    fn test_navigate_home_unwinds_stack() {
        let mut nav = Nav::new();
        nav.navigate(Screen::Settings);
        nav.navigate(Screen::AddPasskey);
        nav.navigate(Screen::Home);
        assert_eq!(*nav.current(), Screen::Home);
        assert!(!nav.can_go_back());

        nav.navigate(Screen::Settings);
        nav.reset_home();
        assert_eq!(*nav.current(), Screen::Home);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_transition_listener_fires_and_unsubscribes() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut nav = Nav::new();
        let h = hits.clone();
        let sub = nav.add_listener(NavEvent::TransitionEnd, move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        nav.navigate(Screen::Notifications);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        nav.remove_listener(sub);
        nav.go_back();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
