//! Domain module - business categories a query can be routed to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business domain of a helpdesk query
///
/// Each domain has its own specialist knowledge source and its own fallback
/// contact message. `General` is the catch-all for queries that match no
/// specialist and for unrecognised domain labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Human resources: leave, benefits, payroll
    Hr,

    /// IT support: accounts, devices, network
    It,

    /// Finance: expenses, procurement, invoices
    Finance,

    /// Anything else
    General,
}

impl Domain {
    /// All domains in routing order (specialists first, `General` last)
    pub const ALL: [Domain; 4] = [Domain::Hr, Domain::It, Domain::Finance, Domain::General];

    /// Get the domain label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Hr => "hr",
            Domain::It => "it",
            Domain::Finance => "finance",
            Domain::General => "general",
        }
    }

    /// Parse a domain label (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hr" => Some(Domain::Hr),
            "it" => Some(Domain::It),
            "finance" => Some(Domain::Finance),
            "general" => Some(Domain::General),
            _ => None,
        }
    }

    /// Parse a domain label, routing anything unrecognised to `General`
    pub fn parse_or_general(s: &str) -> Self {
        Self::parse(s).unwrap_or(Domain::General)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid domain: {}", s))
    }
}
