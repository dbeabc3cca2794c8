//! Send-async state machine and the signed-operation collaborator seam
//!
//! Screens never talk to the signing engine directly. They drive a
//! [`SendFlow`] through `Idle → Loading → Success | Error`, handing it a
//! future that produces the signed operation, plus an optional optimistic
//! account transform applied up front.

use anyhow::Result;
use async_trait::async_trait;
use rand::RngCore;

use crate::account::{Account, AccountManager, Amount, ChainGasConstants};
use crate::request::RequestId;

/// Purpose tag partitioning operation sequence numbers. Keeps concurrent
/// operation types (note creation vs request responses) from colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceCategory {
    CreateNote,
    RequestResponse,
}

impl NonceCategory {
    fn tag(&self) -> u8 {
        match self {
            NonceCategory::CreateNote => 0x01,
            NonceCategory::RequestResponse => 0x02,
        }
    }
}

/// Freshly allocated operation nonce: category tag plus random key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce {
    pub category: NonceCategory,
    key: [u8; 16],
}

impl Nonce {
    pub fn new(category: NonceCategory) -> Self {
        let mut key = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut key);
        Self { category, key }
    }

    pub fn to_hex(&self) -> String {
        format!("{:02x}{}", self.category.tag(), hex::encode(self.key))
    }
}

/// Receipt for a submitted user operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpReceipt {
    pub op_hash: String,
}

/// External transaction-construction/signing collaborator.
#[async_trait]
pub trait OpSender: Send + Sync {
    /// Create an ephemeral note owned by the given one-time key.
    async fn create_note(
        &self,
        ephemeral_owner: &str,
        amount: Amount,
        nonce: &Nonce,
    ) -> Result<OpReceipt>;

    /// Cancel a payment request the user created.
    async fn cancel_request(&self, id: &RequestId, nonce: &Nonce) -> Result<OpReceipt>;
}

/// Where a send flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Total cost of a transfer: requested amount plus estimated fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferCost {
    pub amount: Amount,
    pub fee: Amount,
    pub total: Amount,
}

impl TransferCost {
    pub fn estimate(amount: Amount, gas: &ChainGasConstants) -> Self {
        let total = amount
            .checked_add(gas.estimated_fee)
            .unwrap_or(Amount(u64::MAX));
        Self {
            amount,
            fee: gas.estimated_fee,
            total,
        }
    }
}

/// Local precondition: the account must cover amount plus fee. A balance
/// exactly equal to the total is sufficient.
pub fn send_disabled_reason(account: &Account, cost: &TransferCost) -> Option<&'static str> {
    if account.last_balance < cost.total {
        Some("Insufficient funds")
    } else {
        None
    }
}

/// One-shot async send state machine.
pub struct SendFlow {
    status: SendStatus,
    message: Option<String>,
    cost: TransferCost,
}

impl SendFlow {
    pub fn new(amount: Amount, gas: &ChainGasConstants) -> Self {
        Self {
            status: SendStatus::Idle,
            message: None,
            cost: TransferCost::estimate(amount, gas),
        }
    }

    pub fn status(&self) -> SendStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn cost(&self) -> &TransferCost {
        &self.cost
    }

    /// Enter `Loading`. Rejected from any state but `Idle`; the flow is
    /// one-shot.
    pub fn begin(&mut self) -> Result<()> {
        if self.status != SendStatus::Idle {
            anyhow::bail!("send already started (status {:?})", self.status);
        }
        self.status = SendStatus::Loading;
        self.message = Some("Sending…".to_string());
        Ok(())
    }

    /// Record the operation outcome. Resolves `Loading` into `Success` or
    /// `Error` with a user-visible message.
    pub fn complete(&mut self, result: Result<OpReceipt>) {
        debug_assert_eq!(self.status, SendStatus::Loading);
        match result {
            Ok(receipt) => {
                tracing::info!(op = %receipt.op_hash, "operation submitted");
                self.status = SendStatus::Success;
                self.message = None;
            }
            Err(e) => {
                tracing::error!("operation failed: {:#}", e);
                self.status = SendStatus::Error;
                self.message = Some(e.to_string());
            }
        }
    }

    /// Full lifecycle in one call: optimistic transform, then the signed
    /// operation. The outcome lands in the status, not the return value;
    /// only starting from a non-idle state errors.
    pub async fn exec<T, F, Fut>(
        &mut self,
        mgr: &AccountManager,
        optimistic: Option<T>,
        send: F,
    ) -> Result<()>
    where
        T: FnOnce(Account) -> Account,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<OpReceipt>>,
    {
        self.begin()?;
        if let Some(transform) = optimistic {
            mgr.transform(transform);
        }
        let result = send().await;
        self.complete(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    fn gas() -> ChainGasConstants {
        ChainGasConstants {
            estimated_fee: Amount(50_000),
        }
    }

    #[test]
    fn test_cost_estimate() {
        let cost = TransferCost::estimate(Amount::from_dollars(5), &gas());
        assert_eq!(cost.total, Amount(5_050_000));
        assert_eq!(cost.fee, Amount(50_000));
    }

    #[test]
    fn test_balance_boundary() {
        let mut account = Account::new("0xaa", "alice", 8453);
        let cost = TransferCost::estimate(Amount::from_dollars(5), &ChainGasConstants::default());

        account.last_balance = Amount::ZERO;
        assert_eq!(
            send_disabled_reason(&account, &cost),
            Some("Insufficient funds")
        );

        // Balance exactly equal to total cost is not insufficient
        account.last_balance = cost.total;
        assert_eq!(send_disabled_reason(&account, &cost), None);
    }

    #[test]
    fn test_nonce_categories_distinct() {
        let a = Nonce::new(NonceCategory::CreateNote);
        let b = Nonce::new(NonceCategory::RequestResponse);
        assert!(a.to_hex().starts_with("01"));
        assert!(b.to_hex().starts_with("02"));
        assert_ne!(a.to_hex(), b.to_hex());
    }

    #[tokio::test]
    async fn test_exec_success_path() {
        let mgr = AccountManager::new(Account::new("0xaa", "alice", 8453));
        let mut flow = SendFlow::new(Amount::from_dollars(1), &gas());

        flow.exec(
            &mgr,
            Some(|mut a: Account| {
                a.dismissed_action_ids.push("optimistic".into());
                a
            }),
            || async {
                Ok(OpReceipt {
                    op_hash: "0xop".into(),
                })
            },
        )
        .await
        .unwrap();

        assert_eq!(flow.status(), SendStatus::Success);
        assert!(flow.message().is_none());
        // Optimistic transform landed
        let snap = mgr.read().unwrap();
        assert_eq!(snap.dismissed_action_ids, vec!["optimistic".to_string()]);
    }

    #[tokio::test]
    async fn test_exec_error_keeps_message() {
        let mgr = AccountManager::new(Account::new("0xaa", "alice", 8453));
        let mut flow = SendFlow::new(Amount::from_dollars(1), &gas());

        flow.exec(&mgr, None::<fn(Account) -> Account>, || async {
            anyhow::bail!("op reverted")
        })
        .await
        .unwrap();

        assert_eq!(flow.status(), SendStatus::Error);
        assert_eq!(flow.message(), Some("op reverted"));
    }

    #[tokio::test]
    async fn test_exec_is_one_shot() {
        let mgr = AccountManager::new(Account::new("0xaa", "alice", 8453));
        let mut flow = SendFlow::new(Amount::from_dollars(1), &gas());
        flow.exec(&mgr, None::<fn(Account) -> Account>, || async {
            Ok(OpReceipt {
                op_hash: "0xop".into(),
            })
        })
        .await
        .unwrap();

        let again = flow
            .exec(&mgr, None::<fn(Account) -> Account>, || async {
                Ok(OpReceipt {
                    op_hash: "0xop2".into(),
                })
            })
            .await;
        assert!(again.is_err());
    }
}
