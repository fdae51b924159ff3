//! Finder links
//!
//! The explorer addresses every object as `/{chain}/{kind}/{value}`, e.g.
//! `/mainnet/blocks/1234567` or `/mainnet/tx/5A1F...`.

use serde::{Deserialize, Serialize};

/// Kind of object a finder link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// A block by height
    Blocks,
    /// A transaction by hash
    Tx,
    /// An account by address
    Account,
    /// A validator by operator address
    Validator,
}

impl LinkKind {
    /// Path segment for this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Blocks => "blocks",
            LinkKind::Tx => "tx",
            LinkKind::Account => "account",
            LinkKind::Validator => "validator",
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds finder links for one chain
///
/// # Examples
///
/// ```
/// use terra_display::{Finder, LinkKind};
///
/// let finder = Finder::new("mainnet");
/// assert_eq!(finder.link(LinkKind::Tx, "ABC123"), "/mainnet/tx/ABC123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finder {
    chain: String,
}

impl Finder {
    /// Create a finder for a chain segment
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
        }
    }

    /// Chain segment links are built for
    pub fn chain(&self) -> &str {
        &self.chain
    }

    /// Path to an object
    pub fn link(&self, kind: LinkKind, value: &str) -> String {
        format!("/{}/{}/{}", self.chain, kind, value)
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(crate::config::constants::DEFAULT_CHAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let finder = Finder::new("columbus-5");
        assert_eq!(finder.link(LinkKind::Blocks, "42"), "/columbus-5/blocks/42");
        assert_eq!(
            finder.link(LinkKind::Account, "terra1abc"),
            "/columbus-5/account/terra1abc"
        );
        assert_eq!(
            finder.link(LinkKind::Validator, "terravaloper1xyz"),
            "/columbus-5/validator/terravaloper1xyz"
        );
    }

    #[test]
    fn test_default_chain() {
        assert_eq!(Finder::default().chain(), "mainnet");
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&LinkKind::Blocks).unwrap(), r#""blocks""#);
        let kind: LinkKind = serde_json::from_str(r#""tx""#).unwrap();
        assert_eq!(kind, LinkKind::Tx);
    }
}
