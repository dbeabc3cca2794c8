//! Shared test fixtures: recording fakes for every external collaborator

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use lumo::account::{Account, AccountKey, Amount, ChainGasConstants, NamedAccount};
use lumo::link::{Link, LinkData, LinkStatusFetcher};
use lumo::note::{ShareOutcome, ShareSheet};
use lumo::request::{RequestId, RequestState, RequestStatus};
use lumo::search::{Recipient, RecipientIndex};
use lumo::send::{Nonce, OpReceipt, OpSender};

/// Records every submitted operation; fails when told to.
pub struct RecordingSender {
    pub fail: bool,
    pub note_calls: Mutex<Vec<(String, Amount, String)>>,
    pub cancel_calls: Mutex<Vec<(RequestId, String)>>,
}

impl RecordingSender {
    pub fn ok() -> Self {
        Self {
            fail: false,
            note_calls: Mutex::new(Vec::new()),
            cancel_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }
}

#[async_trait]
impl OpSender for RecordingSender {
    async fn create_note(
        &self,
        ephemeral_owner: &str,
        amount: Amount,
        nonce: &Nonce,
    ) -> Result<OpReceipt> {
        self.note_calls.lock().unwrap().push((
            ephemeral_owner.to_string(),
            amount,
            nonce.to_hex(),
        ));
        if self.fail {
            anyhow::bail!("op reverted");
        }
        Ok(OpReceipt {
            op_hash: "0xnote".into(),
        })
    }

    async fn cancel_request(&self, id: &RequestId, nonce: &Nonce) -> Result<OpReceipt> {
        self.cancel_calls
            .lock()
            .unwrap()
            .push((id.clone(), nonce.to_hex()));
        if self.fail {
            anyhow::bail!("op reverted");
        }
        Ok(OpReceipt {
            op_hash: "0xcancel".into(),
        })
    }
}

/// Fixed directory of recipients.
pub struct FixedIndex(pub Vec<Recipient>);

#[async_trait]
impl RecipientIndex for FixedIndex {
    async fn search(&self, query: &str) -> Result<Vec<Recipient>> {
        Ok(self
            .0
            .iter()
            .filter(|r| query.is_empty() || r.display_name().starts_with(query))
            .cloned()
            .collect())
    }
}

/// Share sheet returning a fixed outcome, recording shared URLs.
pub struct RecordingShare {
    pub outcome: ShareOutcome,
    pub urls: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl RecordingShare {
    pub fn completed() -> Self {
        Self {
            outcome: ShareOutcome::Completed,
            urls: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ShareSheet for RecordingShare {
    async fn share(&self, url: &str) -> Result<ShareOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.outcome)
    }
}

/// Link resolver backed by a single canned answer.
pub struct FixedFetcher(pub Result<LinkData, String>);

#[async_trait]
impl LinkStatusFetcher for FixedFetcher {
    async fn fetch(&self, _link: &Link) -> Result<LinkData> {
        match &self.0 {
            Ok(data) => Ok(data.clone()),
            Err(e) => Err(anyhow::anyhow!("{}", e)),
        }
    }
}

/// A funded account with a device key and one pending request.
pub fn funded_account() -> Account {
    let mut account = Account::new("0xaa", "alice", 8453);
    account.last_balance = Amount::from_dollars(100);
    account.gas = ChainGasConstants {
        estimated_fee: Amount(50_000),
    };
    account.keys.push(AccountKey {
        slot: 0x00,
        pub_key: "pk-device".into(),
        added_at: 1,
    });
    account.request_statuses.push(pending_request("r1"));
    account
}

pub fn pending_request(id: &str) -> RequestStatus {
    RequestStatus {
        id: RequestId(id.to_string()),
        amount: Amount::from_dollars(15),
        state: RequestState::Pending,
        expected_fulfiller: Some(NamedAccount {
            addr: "0xbb".into(),
            name: Some("bob".into()),
        }),
        created_at: 100,
        updated_at: 100,
    }
}
