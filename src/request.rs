//! Payment request statuses and the own-request cancellation flow
//!
//! A request the user created lives in the account's request list. Cancelling
//! it submits a signed cancellation operation and optimistically replaces the
//! matching entry with a `Cancelled` copy. The replacement is filter-then-
//! append, never an in-place edit, so a request id can never appear twice.

use anyhow::Result;

use crate::account::{now_s, Account, AccountManager, Amount, NamedAccount};
use crate::dispatch::{Action, Dispatcher};
use crate::nav::{Nav, Screen};
use crate::send::{Nonce, NonceCategory, OpSender, SendFlow, SendStatus};

/// State of a payment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Pending,
    Cancelled,
    Fulfilled,
}

/// Identifier of a payment request, as carried in its link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A payment request the user created, as tracked on the account.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestStatus {
    pub id: RequestId,
    pub amount: Amount,
    pub state: RequestState,
    pub expected_fulfiller: Option<NamedAccount>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl RequestStatus {
    /// Copy of this request marked cancelled, with a refreshed timestamp.
    pub fn cancelled_copy(&self, now: u64) -> RequestStatus {
        RequestStatus {
            state: RequestState::Cancelled,
            updated_at: now,
            ..self.clone()
        }
    }
}

/// Replace the matching request with a cancelled copy. Filter out the old
/// entry first so the id stays unique even if called twice.
pub fn apply_cancellation(mut account: Account, req: &RequestStatus, now: u64) -> Account {
    let updated = req.cancelled_copy(now);
    account.request_statuses.retain(|r| r.id != req.id);
    account.request_statuses.push(updated);
    account
}

/// Flow driving cancellation of one of the user's own requests.
pub struct CancelRequestFlow {
    req: RequestStatus,
    nonce: Nonce,
    send: SendFlow,
}

impl CancelRequestFlow {
    pub fn new(req: RequestStatus, account: &Account) -> Self {
        Self {
            req,
            // Request responses get their own nonce category, so a
            // cancellation can never collide with e.g. a note creation.
            nonce: Nonce::new(NonceCategory::RequestResponse),
            send: SendFlow::new(Amount::ZERO, &account.gas),
        }
    }

    pub fn status(&self) -> SendStatus {
        self.send.status()
    }

    pub fn request(&self) -> &RequestStatus {
        &self.req
    }

    /// User-visible progress or error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.send.message()
    }

    /// Enter `Loading` and apply the optimistic list update. Returns the id
    /// and nonce for the cancellation operation; the caller submits it and
    /// reports back through [`CancelRequestFlow::complete`].
    pub fn start(&mut self, mgr: &AccountManager) -> Result<(RequestId, Nonce)> {
        tracing::info!("cancelling request {}", self.req.id);
        self.send.begin()?;
        let req = self.req.clone();
        mgr.transform(move |a| apply_cancellation(a, &req, now_s()));
        Ok((self.req.id.clone(), self.nonce.clone()))
    }

    /// Record the operation outcome.
    pub fn complete(&mut self, result: Result<crate::send::OpReceipt>) {
        self.send.complete(result);
    }

    /// Submit the cancellation operation. Applies the optimistic list update
    /// before the operation resolves; the sync engine reconciles later.
    pub async fn exec(&mut self, mgr: &AccountManager, sender: &impl OpSender) -> Result<()> {
        let (id, nonce) = self.start(mgr)?;
        let result = sender.cancel_request(&id, &nonce).await;
        self.complete(result);
        Ok(())
    }

    /// On confirmed success: close the active sheet, return home.
    pub fn finish(&self, dispatcher: &mut Dispatcher, nav: &mut Nav) -> Result<()> {
        debug_assert_eq!(self.send.status(), SendStatus::Success);
        dispatcher.dispatch(Action::HideSheet)?;
        nav.navigate(Screen::Home);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    fn pending_request(id: &str) -> RequestStatus {
        RequestStatus {
            id: RequestId(id.to_string()),
            amount: Amount::from_dollars(25),
            state: RequestState::Pending,
            expected_fulfiller: Some(NamedAccount {
                addr: "0xbb".into(),
                name: Some("bob".into()),
            }),
            created_at: 100,
            updated_at: 100,
        }
    }

    #[test]
    fn test_cancellation_replaces_without_duplicates() {
        let req = pending_request("r1");
        let mut account = Account::new("0xaa", "alice", 8453);
        account.request_statuses.push(req.clone());
        account.request_statuses.push(pending_request("r2"));

        let account = apply_cancellation(account, &req, 200);

        let matching: Vec<_> = account
            .request_statuses
            .iter()
            .filter(|r| r.id == RequestId("r1".into()))
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].state, RequestState::Cancelled);
        assert_eq!(matching[0].updated_at, 200);
        // Untouched request still pending
        let other = account
            .request_statuses
            .iter()
            .find(|r| r.id == RequestId("r2".into()))
            .unwrap();
        assert_eq!(other.state, RequestState::Pending);
    }

    #[test]
    fn test_cancellation_idempotent_on_list() {
        let req = pending_request("r1");
        let mut account = Account::new("0xaa", "alice", 8453);
        account.request_statuses.push(req.clone());

        let account = apply_cancellation(account, &req, 200);
        let account = apply_cancellation(account, &req, 300);

        assert_eq!(account.request_statuses.len(), 1);
        assert_eq!(account.request_statuses[0].state, RequestState::Cancelled);
        assert_eq!(account.request_statuses[0].updated_at, 300);
    }
}
