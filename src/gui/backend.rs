//! Demo backend standing in for the remote wallet services
//!
//! Implements every external collaborator seam the screens depend on, with
//! simulated latency and a small fixed recipient directory, so the GUI is
//! fully drivable without network access.
//!
//! TODO: replace with the JSON-RPC client once the api service endpoints
//! stabilize; the seams this implements are exactly the surface it needs.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::RngCore;

use crate::account::{now_s, Account, AccountKey, Amount, ChainGasConstants, NamedAccount};
use crate::config::Config;
use crate::link::{Link, LinkData, LinkStatusFetcher};
use crate::note::{ShareOutcome, ShareSheet};
use crate::request::{RequestId, RequestState, RequestStatus};
use crate::search::{Recipient, RecipientIndex};
use crate::send::{Nonce, OpReceipt, OpSender};

/// Stand-in backend with canned data and simulated latency.
pub struct DemoBackend {
    latency: Duration,
    directory: Vec<Recipient>,
}

impl DemoBackend {
    pub fn new() -> Self {
        let now = now_s();
        Self {
            latency: Duration::from_millis(400),
            directory: vec![
                Recipient {
                    addr: "0xb2c329c193ef1a6bd10c4d3a2fbc3a25f5f81d0e".into(),
                    name: Some("ben".into()),
                    last_send_time: Some(now.saturating_sub(3 * 60 * 60)),
                },
                Recipient {
                    addr: "0xc917f3ad40b9fa4be09ec73f3c915ec74b6ae380".into(),
                    name: Some("carla".into()),
                    last_send_time: Some(now.saturating_sub(2 * 24 * 60 * 60)),
                },
                Recipient {
                    addr: "0xd5a16e1bcab5a3c0de9f2b7f0a4f6d2a9b3c1e55".into(),
                    name: Some("devon".into()),
                    last_send_time: None,
                },
            ],
        }
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.latency).await;
    }

    fn fresh_op_hash() -> String {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        format!("0x{}", hex::encode(bytes))
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OpSender for DemoBackend {
    async fn create_note(
        &self,
        ephemeral_owner: &str,
        amount: Amount,
        nonce: &Nonce,
    ) -> Result<OpReceipt> {
        self.simulate_latency().await;
        tracing::info!(owner = ephemeral_owner, %amount, nonce = %nonce.to_hex(), "note op submitted");
        Ok(OpReceipt {
            op_hash: Self::fresh_op_hash(),
        })
    }

    async fn cancel_request(&self, id: &RequestId, nonce: &Nonce) -> Result<OpReceipt> {
        self.simulate_latency().await;
        tracing::info!(request = %id, nonce = %nonce.to_hex(), "request cancellation submitted");
        Ok(OpReceipt {
            op_hash: Self::fresh_op_hash(),
        })
    }
}

#[async_trait]
impl RecipientIndex for DemoBackend {
    async fn search(&self, query: &str) -> Result<Vec<Recipient>> {
        self.simulate_latency().await;
        Ok(self
            .directory
            .iter()
            .filter(|r| {
                query.is_empty()
                    || r.name
                        .as_deref()
                        .map(|n| n.starts_with(query))
                        .unwrap_or(false)
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LinkStatusFetcher for DemoBackend {
    async fn fetch(&self, link: &Link) -> Result<LinkData> {
        self.simulate_latency().await;
        match link {
            Link::Account { account } => {
                let found = self
                    .directory
                    .iter()
                    .find(|r| r.name.as_deref() == Some(account.as_str()))
                    .ok_or_else(|| anyhow::anyhow!("no account named {}", account))?;
                Ok(LinkData::Account {
                    account: NamedAccount {
                        addr: found.addr.clone(),
                        name: found.name.clone(),
                    },
                    inviter: None,
                })
            }
            Link::Invite { .. } => Ok(LinkData::Invite { inviter: None }),
            Link::Note { .. } => anyhow::bail!("note links are claimed, not viewed"),
        }
    }
}

#[async_trait]
impl ShareSheet for DemoBackend {
    async fn share(&self, url: &str) -> Result<ShareOutcome> {
        // Desktop has no system share sheet; log the URL and report success.
        tracing::info!(url, "share sheet opened");
        Ok(ShareOutcome::Completed)
    }
}

/// Starting account snapshot for the demo session.
pub fn seed_account(config: &Config) -> Account {
    let now = now_s();
    let mut account = Account::new(
        "0x8bf1f2b9ab018c3e8316bbd461c1ad5b1fc934e6",
        "maya",
        config.chain.chain_id(),
    );
    account.last_balance = Amount::parse_dollars("128.50").unwrap_or(Amount::ZERO);
    account.keys.push(AccountKey {
        slot: 0x00,
        pub_key: "0x04a9d3f1".into(),
        added_at: now.saturating_sub(30 * 24 * 60 * 60),
    });
    account.gas = ChainGasConstants {
        estimated_fee: Amount(20_000),
    };
    account.request_statuses.push(RequestStatus {
        id: RequestId("9185".into()),
        amount: Amount::from_dollars(15),
        state: RequestState::Pending,
        expected_fulfiller: Some(NamedAccount {
            addr: "0xb2c329c193ef1a6bd10c4d3a2fbc3a25f5f81d0e".into(),
            name: Some("ben".into()),
        }),
        created_at: now.saturating_sub(60 * 60),
        updated_at: now.saturating_sub(60 * 60),
    });
    account.invite_link = Some(
        Link::Invite {
            code: "maya-invites".into(),
        }
        .format(&config.link_base),
    );
    account
}
