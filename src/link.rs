//! Deep links and the link-status fetching seam
//!
//! Links are how value and identity travel out-of-band: a note link embeds a
//! one-time key, an account link names a profile, an invite link carries a
//! code. Resolving what a link currently points at is the job of an external
//! service, reached through [`LinkStatusFetcher`].

use anyhow::Result;
use async_trait::async_trait;

use crate::account::NamedAccount;

/// Address of the faucet account used as inviter-of-last-resort.
pub const TEAM_FAUCET_ADDR: &str = "0x2a6d311394059b1b0b295cf3298542eecd0acc8e";

pub fn team_faucet_account() -> NamedAccount {
    NamedAccount {
        addr: TEAM_FAUCET_ADDR.to_string(),
        name: Some("team".to_string()),
    }
}

/// A shareable deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// One-time note. Whoever holds the private key can redeem it.
    Note {
        ephemeral_owner: String,
        ephemeral_private_key: String,
    },
    /// A user profile, by account name.
    Account { account: String },
    /// An invite code.
    Invite { code: String },
}

impl Link {
    /// Canonical URL. The note's private key rides in the fragment so it
    /// never reaches the server.
    pub fn format(&self, base: &str) -> String {
        match self {
            Link::Note {
                ephemeral_owner,
                ephemeral_private_key,
            } => format!("{}/note/{}#{}", base, ephemeral_owner, ephemeral_private_key),
            Link::Account { account } => format!("{}/account/{}", base, account),
            Link::Invite { code } => format!("{}/invite/{}", base, code),
        }
    }
}

/// What a link currently resolves to, per the external service.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkData {
    Account {
        account: NamedAccount,
        inviter: Option<NamedAccount>,
    },
    Invite {
        inviter: Option<NamedAccount>,
    },
}

/// External link-status service.
#[async_trait]
pub trait LinkStatusFetcher: Send + Sync {
    async fn fetch(&self, link: &Link) -> Result<LinkData>;
}

/// Async fetch state as exposed to a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStatus<T> {
    pub is_loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> LinkStatus<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            data: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            is_loading: false,
            error: None,
            data: Some(data),
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            is_loading: false,
            error: Some(error),
            data: None,
        }
    }
}

/// Outcome of loading a profile from a link.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileResolution {
    /// Show the profile body for this account.
    Show {
        eacc: NamedAccount,
        inviter: Option<NamedAccount>,
    },
    /// Nothing to show; leave the screen (back if possible, else home).
    Exit,
}

/// Decide what a loaded link means for the profile screen. Invite links with
/// no recorded inviter fall back to the team faucet account.
pub fn resolve_profile(data: &LinkData) -> ProfileResolution {
    match data {
        LinkData::Account { account, inviter } => ProfileResolution::Show {
            eacc: account.clone(),
            inviter: inviter.clone(),
        },
        LinkData::Invite { inviter } => ProfileResolution::Show {
            eacc: inviter.clone().unwrap_or_else(team_faucet_account),
            inviter: None,
        },
    }
}

/// Banner shown when a profile link fails to load. Only account links get
/// the not-found treatment; other failures render as plain errors.
pub fn not_found_banner(link: &Link) -> Option<(String, String)> {
    match link {
        Link::Account { account } => Some((
            "Account not found".to_string(),
            format!("Couldn't load account {}", account),
        )),
        _ => None,
    }
}
