//! Asset identity
//!
//! An asset is either the network's native asset or a credit issued by
//! an account. Equality, ordering and hashing are derived from the full
//! identity, so assets work directly as map keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An asset tradable on the exchange
///
/// Two credits are the same asset only when both code and issuer match.
/// Native sorts before every credit; credits order by code, then issuer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    /// The network's built-in asset
    Native,
    /// An issued asset, identified by code and issuing account
    Credit { code: String, issuer: String },
}

impl Asset {
    /// Build a credit asset
    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Asset::Credit {
            code: code.into(),
            issuer: issuer.into(),
        }
    }

    #[inline(always)]
    pub const fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    /// Asset code; `None` for native
    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::Credit { code, .. } => Some(code),
        }
    }

    /// Issuing account; `None` for native
    pub fn issuer(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::Credit { issuer, .. } => Some(issuer),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => write!(f, "native"),
            Asset::Credit { code, issuer } => write!(f, "{}:{}", code, issuer),
        }
    }
}
