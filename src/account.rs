//! Account snapshot model and the account accessor
//!
//! The account is owned by an external sync engine. This layer only reads
//! snapshots and submits read-modify-write transforms, applied atomically
//! against the latest snapshot (single writer, last transform wins).

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::request::RequestStatus;

/// Current unix time in seconds.
pub fn now_s() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Token amount in 6-decimal units (USDC-style). 1_000_000 units = $1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(pub u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const UNITS_PER_DOLLAR: u64 = 1_000_000;

    pub fn from_dollars(dollars: u64) -> Self {
        Amount(dollars * Self::UNITS_PER_DOLLAR)
    }

    /// Parse a user-entered dollars string, e.g. "1.50".
    pub fn parse_dollars(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("empty amount");
        }
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if frac.len() > 6 {
            anyhow::bail!("too many decimal places: {}", s);
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse()?
        };
        let mut frac_units: u64 = 0;
        if !frac.is_empty() {
            frac_units = frac.parse()?;
            for _ in 0..(6 - frac.len()) {
                frac_units *= 10;
            }
        }
        whole
            .checked_mul(Self::UNITS_PER_DOLLAR)
            .and_then(|w| w.checked_add(frac_units))
            .map(Amount)
            .ok_or_else(|| anyhow::anyhow!("amount overflow: {}", s))
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / Self::UNITS_PER_DOLLAR;
        // Display at cent precision
        let cents = (self.0 % Self::UNITS_PER_DOLLAR) / 10_000;
        write!(f, "${}.{:02}", whole, cents)
    }
}

/// Role of a signing key, classified by its slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotType {
    Device,
    PasskeyBackup,
    SecurityKeyBackup,
    Unknown,
}

/// Classify a key slot. Slots are partitioned by range: devices occupy the
/// low range, passkey backups the next, hardware security keys the one after.
pub fn slot_type(slot: u8) -> SlotType {
    match slot {
        0x00..=0x3f => SlotType::Device,
        0x40..=0x7f => SlotType::PasskeyBackup,
        0x80..=0xbf => SlotType::SecurityKeyBackup,
        _ => SlotType::Unknown,
    }
}

/// A registered signing key on the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountKey {
    pub slot: u8,
    pub pub_key: String,
    pub added_at: u64,
}

impl AccountKey {
    pub fn slot_type(&self) -> SlotType {
        slot_type(self.slot)
    }
}

/// An external identity linked to the account (e.g. a Farcaster profile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedAccount {
    pub kind: String,
    pub username: String,
}

/// Minimal shape of any external account: an address plus optional name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAccount {
    pub addr: String,
    pub name: Option<String>,
}

impl NamedAccount {
    /// Display name, falling back to a contracted address.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => contract_address(&self.addr),
        }
    }
}

/// Shorten an address for display: 0x1234…abcd.
pub fn contract_address(addr: &str) -> String {
    if addr.len() <= 10 {
        addr.to_string()
    } else {
        format!("{}…{}", &addr[..6], &addr[addr.len() - 4..])
    }
}

/// Status of a submitted user operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Pending,
    Confirmed,
    Failed,
}

/// A transfer as shown in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferClog {
    pub from: String,
    pub to: String,
    pub amount: Amount,
    pub timestamp: u64,
    pub status: OpStatus,
    pub nonce_metadata: Option<String>,
}

/// Gas constants fetched from the chain, used for local fee estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainGasConstants {
    pub estimated_fee: Amount,
}

/// Snapshot of the user's account, as maintained by the external sync engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub address: String,
    pub name: String,
    pub chain_id: u64,
    pub last_balance: Amount,
    pub keys: Vec<AccountKey>,
    pub linked_accounts: Vec<LinkedAccount>,
    pub dismissed_action_ids: Vec<String>,
    pub recent_transfers: Vec<TransferClog>,
    pub request_statuses: Vec<RequestStatus>,
    pub last_read_notifs_at: u64,
    pub invite_link: Option<String>,
    pub gas: ChainGasConstants,
}

impl Account {
    /// A fresh account with no history, useful as a starting snapshot.
    pub fn new(address: &str, name: &str, chain_id: u64) -> Self {
        Self {
            address: address.to_string(),
            name: name.to_string(),
            chain_id,
            last_balance: Amount::ZERO,
            keys: Vec::new(),
            linked_accounts: Vec::new(),
            dismissed_action_ids: Vec::new(),
            recent_transfers: Vec::new(),
            request_statuses: Vec::new(),
            last_read_notifs_at: 0,
            invite_link: None,
            gas: ChainGasConstants::default(),
        }
    }
}

/// Shared accessor over the current account snapshot.
///
/// Cloning the manager clones the handle, not the account. All mutation goes
/// through [`AccountManager::transform`], which locks, reads the latest
/// snapshot, applies the pure transform, and writes the result back.
#[derive(Clone, Default)]
pub struct AccountManager {
    inner: Arc<Mutex<Option<Account>>>,
}

impl AccountManager {
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(account))),
        }
    }

    /// Accessor with no account yet (pre-onboarding).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Clone of the current snapshot, if any.
    pub fn read(&self) -> Option<Account> {
        self.inner.lock().expect("account lock poisoned").clone()
    }

    /// Replace the account outright (initial load, logout).
    pub fn set(&self, account: Option<Account>) {
        *self.inner.lock().expect("account lock poisoned") = account;
    }

    /// Apply a pure read-modify-write transform against the latest snapshot.
    /// No-op when no account is loaded.
    pub fn transform(&self, f: impl FnOnce(Account) -> Account) {
        let mut guard = self.inner.lock().expect("account lock poisoned");
        if let Some(account) = guard.take() {
            *guard = Some(f(account));
        } else {
            tracing::warn!("account transform dropped: no account loaded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parse() {
        assert_eq!(Amount::parse_dollars("1").unwrap(), Amount(1_000_000));
        assert_eq!(Amount::parse_dollars("1.5").unwrap(), Amount(1_500_000));
        assert_eq!(Amount::parse_dollars("0.000001").unwrap(), Amount(1));
        assert_eq!(Amount::parse_dollars(".25").unwrap(), Amount(250_000));
        assert!(Amount::parse_dollars("").is_err());
        assert!(Amount::parse_dollars("1.2345678").is_err());
        assert!(Amount::parse_dollars("abc").is_err());
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from_dollars(5).to_string(), "$5.00");
        assert_eq!(Amount(1_500_000).to_string(), "$1.50");
        assert_eq!(Amount(10_000).to_string(), "$0.01");
    }

    #[test]
    fn test_slot_classification() {
        assert_eq!(slot_type(0x00), SlotType::Device);
        assert_eq!(slot_type(0x3f), SlotType::Device);
        assert_eq!(slot_type(0x40), SlotType::PasskeyBackup);
        assert_eq!(slot_type(0x7f), SlotType::PasskeyBackup);
        assert_eq!(slot_type(0x80), SlotType::SecurityKeyBackup);
        assert_eq!(slot_type(0xff), SlotType::Unknown);
    }

    #[test]
    fn test_contract_address() {
        assert_eq!(
            contract_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234…5678"
        );
        assert_eq!(contract_address("0xshort"), "0xshort");
    }

    #[test]
    fn test_transform_reads_latest_snapshot() {
        let mgr = AccountManager::new(Account::new("0xaa", "alice", 8453));

        mgr.transform(|mut a| {
            a.last_balance = Amount::from_dollars(10);
            a
        });
        // Second transform sees the first one's result, not a stale copy
        mgr.transform(|mut a| {
            assert_eq!(a.last_balance, Amount::from_dollars(10));
            a.dismissed_action_ids.push("x".into());
            a
        });

        let snap = mgr.read().unwrap();
        assert_eq!(snap.last_balance, Amount::from_dollars(10));
        assert_eq!(snap.dismissed_action_ids, vec!["x".to_string()]);
    }

    #[test]
    fn test_transform_without_account_is_noop() {
        let mgr = AccountManager::empty();
        mgr.transform(|a| a);
        assert!(mgr.read().is_none());
    }
}
