//! In-app notifications view-model

use crate::account::{now_s, Account, AccountManager};
use crate::request::{RequestState, RequestStatus};

/// A row in the notifications screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A payment request awaiting a response.
    Request(RequestStatus),
    /// The user has an invite link to hand out.
    Invite { url: String },
}

impl Notification {
    fn timestamp(&self) -> u64 {
        match self {
            Notification::Request(r) => r.updated_at,
            Notification::Invite { .. } => 0,
        }
    }
}

/// Derive the notification list from account state: pending requests newest
/// first, then the invite row if one is available.
pub fn derive(account: &Account) -> Vec<Notification> {
    let mut notifs: Vec<Notification> = account
        .request_statuses
        .iter()
        .filter(|r| r.state == RequestState::Pending)
        .cloned()
        .map(Notification::Request)
        .collect();
    notifs.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    if let Some(url) = &account.invite_link {
        notifs.push(Notification::Invite { url: url.clone() });
    }
    notifs
}

/// Whether anything arrived since the user last opened the screen.
pub fn unread(account: &Account) -> bool {
    derive(account)
        .iter()
        .any(|n| n.timestamp() > account.last_read_notifs_at)
}

/// Mark everything read, as of now.
pub fn mark_read(mgr: &AccountManager) {
    mgr.transform(|mut a| {
        a.last_read_notifs_at = now_s();
        a
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Amount;
    use crate::request::RequestId;

    fn request(id: &str, state: RequestState, at: u64) -> RequestStatus {
        RequestStatus {
            id: RequestId(id.into()),
            amount: Amount::from_dollars(5),
            state,
            expected_fulfiller: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_derive_filters_and_sorts() {
        let mut a = Account::new("0xaa", "alice", 8453);
        a.request_statuses.push(request("r1", RequestState::Pending, 10));
        a.request_statuses.push(request("r2", RequestState::Cancelled, 20));
        a.request_statuses.push(request("r3", RequestState::Pending, 30));
        a.invite_link = Some("https://lumo.cash/l/invite/abc".into());

        let notifs = derive(&a);
        assert_eq!(notifs.len(), 3);
        assert!(matches!(&notifs[0], Notification::Request(r) if r.id == RequestId("r3".into())));
        assert!(matches!(&notifs[1], Notification::Request(r) if r.id == RequestId("r1".into())));
        assert!(matches!(&notifs[2], Notification::Invite { .. }));
    }

    #[test]
    fn test_unread_and_mark_read() {
        let mut a = Account::new("0xaa", "alice", 8453);
        a.request_statuses.push(request("r1", RequestState::Pending, 100));
        let mgr = AccountManager::new(a);

        assert!(unread(&mgr.read().unwrap()));
        mark_read(&mgr);
        assert!(!unread(&mgr.read().unwrap()));
    }
}
