//! Recipient search
//!
//! Thin binding over the external recipient index. The empty prefix is a
//! distinguished "recents" mode; everything else is a prefix query. Zero
//! matches turns into a prompt to send a payment link instead of a direct
//! transfer.

use anyhow::Result;
use async_trait::async_trait;

use crate::account::contract_address;

/// A potential payment recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub addr: String,
    pub name: Option<String>,
    pub last_send_time: Option<u64>,
}

impl Recipient {
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => contract_address(&self.addr),
        }
    }

    /// "Sent 5m ago" caption, when we have paid this recipient before.
    pub fn last_send_caption(&self, now: u64) -> Option<String> {
        self.last_send_time
            .map(|t| format!("Sent {}", time_ago(t, now, true)))
    }
}

/// External search/recipient index.
#[async_trait]
pub trait RecipientIndex: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Recipient>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Empty prefix: show recently-paid contacts.
    Recents,
    /// Non-empty prefix query.
    Query,
}

/// Normalize a raw search prefix: trimmed, lower-cased, mode classified.
pub fn normalize_prefix(raw: &str) -> (String, SearchMode) {
    let query = raw.trim().to_lowercase();
    let mode = if raw.is_empty() {
        SearchMode::Recents
    } else {
        SearchMode::Query
    };
    (query, mode)
}

/// Search outcome as bound to the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub mode: SearchMode,
    pub recipients: Vec<Recipient>,
    pub error: Option<String>,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self {
            mode: SearchMode::Recents,
            recipients: Vec::new(),
            error: None,
        }
    }

    /// Run a search against the index. Errors surface on the results, the
    /// screen stays interactive.
    pub async fn run(index: &impl RecipientIndex, raw_prefix: &str) -> Self {
        let (query, mode) = normalize_prefix(raw_prefix);
        match index.search(&query).await {
            Ok(recipients) => Self {
                mode,
                recipients,
                error: None,
            },
            Err(e) => Self {
                mode,
                recipients: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Header above the result rows. Only shown when there are results.
    pub fn header(&self) -> Option<&'static str> {
        if self.recipients.is_empty() {
            return None;
        }
        Some(match self.mode {
            SearchMode::Recents => "Recent recipients",
            SearchMode::Query => "Search results",
        })
    }

    /// Zero matches: offer a payment link instead of a direct transfer.
    pub fn suggest_payment_link(&self) -> bool {
        self.recipients.is_empty()
    }
}

/// Relative-time caption: "now", "45s", "5m", "3h", "2d", "4mo", "1y".
/// `long` appends " ago".
pub fn time_ago(then_s: u64, now_s: u64, long: bool) -> String {
    let elapsed = now_s.saturating_sub(then_s);
    let body = if elapsed < 5 {
        return "now".to_string();
    } else if elapsed < 60 {
        format!("{}s", elapsed)
    } else if elapsed < 60 * 60 {
        format!("{}m", elapsed / 60)
    } else if elapsed < 24 * 60 * 60 {
        format!("{}h", elapsed / (60 * 60))
    } else if elapsed < 30 * 24 * 60 * 60 {
        format!("{}d", elapsed / (24 * 60 * 60))
    } else if elapsed < 365 * 24 * 60 * 60 {
        format!("{}mo", elapsed / (30 * 24 * 60 * 60))
    } else {
        format!("{}y", elapsed / (365 * 24 * 60 * 60))
    };
    if long {
        format!("{} ago", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIndex(Vec<Recipient>);

    #[async_trait]
    impl RecipientIndex for FixedIndex {
        async fn search(&self, query: &str) -> Result<Vec<Recipient>> {
            if query == "boom" {
                anyhow::bail!("index unavailable");
            }
            Ok(self
                .0
                .iter()
                .filter(|r| query.is_empty() || r.display_name().starts_with(query))
                .cloned()
                .collect())
        }
    }

    fn index() -> FixedIndex {
        FixedIndex(vec![
            Recipient {
                addr: "0xbb".into(),
                name: Some("bob".into()),
                last_send_time: Some(1_000),
            },
            Recipient {
                addr: "0xcc".into(),
                name: Some("carol".into()),
                last_send_time: None,
            },
        ])
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix(""), ("".into(), SearchMode::Recents));
        assert_eq!(normalize_prefix("  Bob "), ("bob".into(), SearchMode::Query));
    }

    #[tokio::test]
    async fn test_empty_prefix_is_recents() {
        let res = SearchResults::run(&index(), "").await;
        assert_eq!(res.mode, SearchMode::Recents);
        assert_eq!(res.header(), Some("Recent recipients"));
        assert!(!res.suggest_payment_link());
    }

    #[tokio::test]
    async fn test_query_with_matches() {
        let res = SearchResults::run(&index(), "Bo").await;
        assert_eq!(res.header(), Some("Search results"));
        assert_eq!(res.recipients.len(), 1);
        assert_eq!(res.recipients[0].display_name(), "bob");
    }

    #[tokio::test]
    async fn test_zero_matches_prompts_payment_link() {
        let res = SearchResults::run(&index(), "zelda").await;
        assert!(res.recipients.is_empty());
        assert_eq!(res.header(), None);
        assert!(res.suggest_payment_link());
    }

    #[tokio::test]
    async fn test_index_error_surfaces() {
        let res = SearchResults::run(&index(), "boom").await;
        assert!(res.error.is_some());
        assert!(res.recipients.is_empty());
    }

    #[test]
    fn test_time_ago() {
        assert_eq!(time_ago(100, 102, false), "now");
        assert_eq!(time_ago(100, 145, false), "45s");
        assert_eq!(time_ago(0, 300, false), "5m");
        assert_eq!(time_ago(0, 7_200, false), "2h");
        assert_eq!(time_ago(0, 172_800, true), "2d ago");
        assert_eq!(time_ago(0, 86_400 * 65, false), "2mo");
        assert_eq!(time_ago(0, 86_400 * 400, false), "1y");
    }

    #[test]
    fn test_last_send_caption() {
        let r = Recipient {
            addr: "0xbb".into(),
            name: Some("bob".into()),
            last_send_time: Some(0),
        };
        assert_eq!(r.last_send_caption(300).unwrap(), "Sent 5m ago");
    }
}
