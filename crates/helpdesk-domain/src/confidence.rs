//! Confidence level module - discrete tiers of answer confidence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence tier derived from a combined confidence score
///
/// `High`, `Medium` and `Low` answers are shown to the user (the lower two
/// with a disclaimer); `Insufficient` answers are replaced by a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Not enough support to answer
    Insufficient,

    /// Answer with a strong verification warning
    Low,

    /// Answer with a verification note
    Medium,

    /// Answer as-is
    High,
}

impl ConfidenceLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Insufficient => "insufficient",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }

    /// Whether an answer at this level may be shown
    pub fn allows_response(&self) -> bool {
        !matches!(self, ConfidenceLevel::Insufficient)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(ConfidenceLevel::High > ConfidenceLevel::Medium);
        assert!(ConfidenceLevel::Medium > ConfidenceLevel::Low);
        assert!(ConfidenceLevel::Low > ConfidenceLevel::Insufficient);
    }

    #[test]
    fn test_allows_response() {
        assert!(ConfidenceLevel::High.allows_response());
        assert!(ConfidenceLevel::Low.allows_response());
        assert!(!ConfidenceLevel::Insufficient.allows_response());
    }

    #[test]
    fn test_serde_names_match_display() {
        for level in [
            ConfidenceLevel::Insufficient,
            ConfidenceLevel::Low,
            ConfidenceLevel::Medium,
            ConfidenceLevel::High,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level));
        }
    }
}
