//! Named-action dispatcher
//!
//! A small event bus connecting the view tree to the global sheet host. Each
//! action name has exactly one active handler: registering again replaces the
//! previous handler (last-registered wins, logged). Dispatching an action
//! nobody registered is a programming error and fails before any handler
//! runs.

use std::collections::HashMap;

use anyhow::Result;

use crate::request::RequestStatus;

/// Actions that can be dispatched from anywhere in the view tree.
#[derive(Debug, Clone)]
pub enum Action {
    ConnectFarcaster,
    LinkFarcaster,
    OnboardingChecklist,
    OwnRequest { status: RequestStatus },
    HelpModal { title: String, content: String },
    HideSheet,
}

impl Action {
    /// Stable name tag used for handler lookup.
    pub fn name(&self) -> &'static str {
        match self {
            Action::ConnectFarcaster => "connectFarcaster",
            Action::LinkFarcaster => "linkFarcaster",
            Action::OnboardingChecklist => "onboardingChecklist",
            Action::OwnRequest { .. } => "ownRequest",
            Action::HelpModal { .. } => "helpModal",
            Action::HideSheet => "hideBottomSheet",
        }
    }
}

type Handler = Box<dyn FnMut(Action) + Send>;

/// Registry mapping action names to their single active handler.
///
/// Passed explicitly to whatever needs it rather than living in a global.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<&'static str, Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for an action name. Replaces any previous one.
    pub fn register(&mut self, name: &'static str, handler: impl FnMut(Action) + Send + 'static) {
        if self.handlers.insert(name, Box::new(handler)).is_some() {
            tracing::debug!(action = name, "dispatch handler replaced");
        }
    }

    /// Invoke the handler registered for this action's name, synchronously.
    /// Errors before invoking anything if the name is unregistered.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let name = action.name();
        let handler = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| anyhow::anyhow!("unknown action: {}", name))?;
        tracing::debug!(action = name, "dispatch");
        handler(action);
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}
