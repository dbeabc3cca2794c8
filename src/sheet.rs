//! Global bottom-sheet host
//!
//! One process-wide modal surface. At most one sheet is ever visible; opening
//! over an open sheet replaces it. The host registers itself on the
//! dispatcher so any part of the view tree can open or close sheets by
//! dispatching actions.

use std::sync::{Arc, Mutex};

use crate::dispatch::{Action, Dispatcher};
use crate::request::RequestStatus;

/// The sheet currently displayed, a closed sum over every sheet kind.
#[derive(Debug, Clone)]
pub enum Sheet {
    Debug,
    ConnectFarcaster,
    LinkFarcaster,
    OnboardingChecklist,
    Help { title: String, content: String },
    OwnRequest { status: RequestStatus },
}

impl Sheet {
    pub fn kind(&self) -> &'static str {
        match self {
            Sheet::Debug => "debug",
            Sheet::ConnectFarcaster => "connectFarcaster",
            Sheet::LinkFarcaster => "linkFarcaster",
            Sheet::OnboardingChecklist => "onboardingChecklist",
            Sheet::Help { .. } => "helpModal",
            Sheet::OwnRequest { .. } => "ownRequest",
        }
    }

    /// Whether a swipe gesture may dismiss this sheet. The request-response
    /// sheet must be closed through its own flow.
    pub fn swipe_closable(&self) -> bool {
        !matches!(self, Sheet::OwnRequest { .. })
    }
}

/// Host owning the single displayed-sheet slot.
///
/// The slot sits behind an `Arc<Mutex<..>>` so dispatcher handlers can hold a
/// clone of the handle; there is still exactly one logical writer, the UI
/// event loop.
#[derive(Clone, Default)]
pub struct SheetHost {
    active: Arc<Mutex<Option<Sheet>>>,
}

impl SheetHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the active sheet, if any.
    pub fn active(&self) -> Option<Sheet> {
        self.active.lock().expect("sheet lock poisoned").clone()
    }

    pub fn is_open(&self) -> bool {
        self.active.lock().expect("sheet lock poisoned").is_some()
    }

    /// Show a sheet, replacing whatever was open.
    pub fn open(&self, sheet: Sheet) {
        tracing::info!(kind = sheet.kind(), "bottom sheet open");
        *self.active.lock().expect("sheet lock poisoned") = Some(sheet);
    }

    /// Close unconditionally.
    pub fn close(&self) {
        let mut guard = self.active.lock().expect("sheet lock poisoned");
        if let Some(sheet) = guard.take() {
            tracing::info!(kind = sheet.kind(), "bottom sheet closed");
        }
    }

    /// User swiped the sheet away. Only closes kinds that permit it.
    pub fn swipe_dismiss(&self) {
        let mut guard = self.active.lock().expect("sheet lock poisoned");
        match guard.as_ref() {
            Some(sheet) if sheet.swipe_closable() => {
                tracing::info!(kind = sheet.kind(), "bottom sheet swiped away");
                *guard = None;
            }
            _ => {}
        }
    }

    /// Global shake gesture opens the debug sheet.
    pub fn shake(&self) {
        self.open(Sheet::Debug);
    }

    /// Wire this host's handler into the dispatcher for every sheet action.
    pub fn register(&self, dispatcher: &mut Dispatcher) {
        for name in [
            "connectFarcaster",
            "linkFarcaster",
            "onboardingChecklist",
            "ownRequest",
            "helpModal",
            "hideBottomSheet",
        ] {
            let host = self.clone();
            dispatcher.register(name, move |action| host.handle(action));
        }
    }

    fn handle(&self, action: Action) {
        match action {
            Action::ConnectFarcaster => self.open(Sheet::ConnectFarcaster),
            Action::LinkFarcaster => self.open(Sheet::LinkFarcaster),
            Action::OnboardingChecklist => self.open(Sheet::OnboardingChecklist),
            Action::OwnRequest { status } => self.open(Sheet::OwnRequest { status }),
            Action::HelpModal { title, content } => self.open(Sheet::Help { title, content }),
            Action::HideSheet => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Amount;
    use crate::request::{RequestId, RequestState};

    fn own_request_sheet() -> Sheet {
        Sheet::OwnRequest {
            status: RequestStatus {
                id: RequestId("r1".into()),
                amount: Amount::from_dollars(5),
                state: RequestState::Pending,
                expected_fulfiller: None,
                created_at: 1,
                updated_at: 1,
            },
        }
    }

    fn wired() -> (SheetHost, Dispatcher) {
        let host = SheetHost::new();
        let mut dispatcher = Dispatcher::new();
        host.register(&mut dispatcher);
        (host, dispatcher)
    }

    #[test]
    fn test_dispatch_opens_and_hides() {
        let (host, mut dispatcher) = wired();
        assert!(!host.is_open());

        dispatcher.dispatch(Action::OnboardingChecklist).unwrap();
        assert!(matches!(host.active(), Some(Sheet::OnboardingChecklist)));

        dispatcher.dispatch(Action::HideSheet).unwrap();
        assert!(!host.is_open());

        // HideSheet is fine even when nothing is open
        dispatcher.dispatch(Action::HideSheet).unwrap();
        assert!(!host.is_open());
    }

    #[test]
    fn test_open_replaces_open() {
        let (host, mut dispatcher) = wired();
        dispatcher.dispatch(Action::ConnectFarcaster).unwrap();
        dispatcher
            .dispatch(Action::HelpModal {
                title: "t".into(),
                content: "c".into(),
            })
            .unwrap();
        // Only one sheet is ever active
        assert!(matches!(host.active(), Some(Sheet::Help { .. })));
    }

    #[test]
    fn test_swipe_dismiss_honors_flags() {
        let host = SheetHost::new();

        host.open(Sheet::Debug);
        host.swipe_dismiss();
        assert!(!host.is_open());

        host.open(own_request_sheet());
        host.swipe_dismiss();
        assert!(host.is_open(), "request-response sheet ignores swipes");

        host.close();
        assert!(!host.is_open());
    }

    #[test]
    fn test_shake_opens_debug_sheet() {
        let host = SheetHost::new();
        host.shake();
        assert!(matches!(host.active(), Some(Sheet::Debug)));
    }
}
