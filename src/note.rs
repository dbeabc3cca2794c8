//! Send-as-one-time-note flow
//!
//! A note is a payment instrument secured by a freshly generated key,
//! redeemable by whoever holds the private key. The key is generated when
//! the flow is created; after the note operation confirms, the key is
//! embedded into a shareable link and handed to the platform share sheet.

use anyhow::Result;
use async_trait::async_trait;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::account::{now_s, Account, AccountManager, Amount, OpStatus, TransferClog};
use crate::link::Link;
use crate::nav::{Nav, Screen};
use crate::send::{
    send_disabled_reason, Nonce, NonceCategory, OpSender, SendFlow, SendStatus, TransferCost,
};

/// Escrow contract address holding unredeemed notes.
pub const EPHEMERAL_NOTES_ADDR: &str = "0x4adca7cb84497c9c4c308063d2f219c7b6041183";

/// One-time note owner key. Wiped from memory on drop.
pub struct NoteKey {
    bytes: Zeroizing<[u8; 32]>,
}

impl NoteKey {
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; 32]);
        rand::thread_rng().fill_bytes(bytes.as_mut());
        Self { bytes }
    }

    /// Private key as hex, for embedding in the note link.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.bytes.as_ref())
    }

    /// Address controlled by this key: trailing 20 bytes of its digest.
    pub fn owner_address(&self) -> String {
        let digest = Sha256::digest(self.bytes.as_ref());
        format!("0x{}", hex::encode(&digest[12..32]))
    }
}

/// Result of the platform share action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The user completed a share (picked a target app).
    Completed,
    /// The user dismissed the share sheet.
    Dismissed,
}

/// Platform share-sheet collaborator.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    async fn share(&self, url: &str) -> Result<ShareOutcome>;
}

/// Parameters of a note-creation operation in flight.
#[derive(Debug, Clone)]
pub struct NoteOpParams {
    pub owner: String,
    pub amount: Amount,
    pub nonce: Nonce,
}

/// Flow for creating and sharing a one-time note.
pub struct NoteFlow {
    key: NoteKey,
    owner: String,
    amount: Amount,
    nonce: Nonce,
    send: SendFlow,
}

impl NoteFlow {
    pub fn new(amount: Amount, account: &Account) -> Self {
        let key = NoteKey::generate();
        let owner = key.owner_address();
        Self {
            key,
            owner,
            amount,
            nonce: Nonce::new(NonceCategory::CreateNote),
            send: SendFlow::new(amount, &account.gas),
        }
    }

    pub fn status(&self) -> SendStatus {
        self.send.status()
    }

    pub fn cost(&self) -> &TransferCost {
        self.send.cost()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Why sending is disallowed right now, if it is. A zero amount
    /// disables the button without a reason string.
    pub fn disabled_reason(&self, account: &Account) -> Option<&'static str> {
        send_disabled_reason(account, self.send.cost())
    }

    pub fn is_send_disabled(&self, account: &Account) -> bool {
        self.disabled_reason(account).is_some() || self.amount.is_zero()
    }

    /// Status caption under the button. Second value marks error styling.
    pub fn status_line(&self, account: &Account) -> (String, bool) {
        match self.send.status() {
            SendStatus::Idle => {
                if let Some(reason) = self.disabled_reason(account) {
                    (reason.to_string(), true)
                } else if self.amount.is_zero() {
                    ("Works like cash, redeemable by recipient".to_string(), false)
                } else {
                    (
                        format!(
                            "Works like cash, redeemable by recipient\nTotal incl. fees {}",
                            self.send.cost().total
                        ),
                        false,
                    )
                }
            }
            SendStatus::Loading => (self.send.message().unwrap_or("").to_string(), false),
            SendStatus::Error => (self.send.message().unwrap_or("Error").to_string(), true),
            SendStatus::Success => {
                ("Works like cash, redeemable by recipient".to_string(), false)
            }
        }
    }

    /// Validate, apply the optimistic pending transfer, and enter `Loading`.
    /// Returns the parameters for the note-creation operation; the caller
    /// submits it and reports back through [`NoteFlow::complete`].
    pub fn start(&mut self, mgr: &AccountManager) -> Result<NoteOpParams> {
        let account = mgr
            .read()
            .ok_or_else(|| anyhow::anyhow!("no account loaded"))?;
        if self.is_send_disabled(&account) {
            anyhow::bail!("sending disabled");
        }
        self.send.begin()?;

        let pending = TransferClog {
            from: account.address.clone(),
            to: EPHEMERAL_NOTES_ADDR.to_string(),
            amount: self.amount,
            timestamp: now_s(),
            status: OpStatus::Pending,
            nonce_metadata: Some(self.nonce.to_hex()),
        };
        mgr.transform(move |mut a| {
            a.recent_transfers.insert(0, pending);
            a
        });

        Ok(NoteOpParams {
            owner: self.owner.clone(),
            amount: self.amount,
            nonce: self.nonce.clone(),
        })
    }

    /// Record the operation outcome.
    pub fn complete(&mut self, result: Result<crate::send::OpReceipt>) {
        self.send.complete(result);
    }

    /// Submit the note-creation operation, recording an optimistic pending
    /// transfer into escrow.
    pub async fn create(&mut self, mgr: &AccountManager, sender: &impl OpSender) -> Result<()> {
        let params = self.start(mgr)?;
        let result = sender
            .create_note(&params.owner, params.amount, &params.nonce)
            .await;
        self.complete(result);
        Ok(())
    }

    /// The shareable note link. Only meaningful once creation succeeded.
    pub fn link(&self) -> Link {
        Link::Note {
            ephemeral_owner: self.owner.clone(),
            ephemeral_private_key: self.key.private_key_hex(),
        }
    }

    /// Hand the link to the platform share sheet. A completed share
    /// navigates home; a dismissed one changes nothing. Transport errors
    /// are logged and swallowed — the flow stays in `Success`.
    pub async fn share(
        &self,
        sharer: &impl ShareSheet,
        link_base: &str,
        nav: &mut Nav,
    ) -> Result<()> {
        if self.send.status() != SendStatus::Success {
            return Ok(());
        }
        let url = self.link().format(link_base);
        match sharer.share(&url).await {
            Ok(outcome) => handle_share_outcome(outcome, nav),
            Err(e) => {
                // Known gap: the user gets no visible feedback here.
                tracing::error!("note share error: {:#}", e);
            }
        }
        Ok(())
    }
}

/// Apply a share result to navigation.
pub fn handle_share_outcome(outcome: ShareOutcome, nav: &mut Nav) {
    match outcome {
        ShareOutcome::Completed => {
            tracing::info!("note shared");
            nav.navigate(Screen::Home);
        }
        ShareOutcome::Dismissed => {
            tracing::info!("note share dismissed");
        }
    }
}
