//! Gatekeeper configuration

use crate::GatekeeperError;
use helpdesk_domain::Domain;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the safety gate
///
/// Built once at startup and never mutated. Every field has a default, so a
/// TOML `[gate]` table only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Inclusive lower bound of the high tier
    pub high_threshold: f64,

    /// Inclusive lower bound of the medium tier
    pub medium_threshold: f64,

    /// Inclusive lower bound of the low tier; anything below is insufficient
    pub low_threshold: f64,

    /// Bonus added to the mean citation score when enough sources agree
    pub agreement_bonus: f64,

    /// Number of citations needed before the agreement bonus applies
    pub agreement_min_citations: usize,

    /// Hallucination scores strictly above this refuse the answer
    pub hallucination_threshold: f64,

    /// Domains whose email addresses survive redaction
    pub first_party_domains: Vec<String>,

    /// Official phone lines that survive redaction
    pub support_lines: Vec<String>,

    /// Pre-approved fallback messages per domain
    pub fallbacks: FallbackMessages,
}

/// Fallback message shown instead of a refused answer, one per domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackMessages {
    /// HR fallback
    pub hr: String,
    /// IT fallback
    pub it: String,
    /// Finance fallback
    pub finance: String,
    /// Generic fallback, also used for unknown domains
    pub general: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.8,
            medium_threshold: 0.6,
            low_threshold: 0.4,
            agreement_bonus: 0.1,
            agreement_min_citations: 3,
            hallucination_threshold: 0.7,
            first_party_domains: vec!["company.com".to_string()],
            support_lines: vec!["+65 6825 3000".to_string()],
            fallbacks: FallbackMessages::default(),
        }
    }
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self {
            hr: "I don't have enough information to answer that HR question confidently. \
                 Please contact HR directly at hr@company.com or extension 2100."
                .to_string(),
            it: "I'm not certain about that IT question. Please contact IT Support at \
                 itsupport@company.com or +65 6825 3000 for accurate assistance."
                .to_string(),
            finance: "I don't have sufficient information about that finance query. \
                      Please reach out to the Finance team at finance@company.com or extension 2200."
                .to_string(),
            general: "I'm not confident I can answer that accurately. Please contact the \
                      relevant department or check the company intranet for verified information."
                .to_string(),
        }
    }
}

impl FallbackMessages {
    /// Fallback message for a domain
    pub fn for_domain(&self, domain: Domain) -> &str {
        match domain {
            Domain::Hr => &self.hr,
            Domain::It => &self.it,
            Domain::Finance => &self.finance,
            Domain::General => &self.general,
        }
    }
}

impl GateConfig {
    /// Load configuration from a TOML file containing only gate settings
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GatekeeperError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, GatekeeperError> {
        let config: GateConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are ordered and fallbacks are usable
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(GatekeeperError::Config(format!("{} {} is outside [0.0, 1.0]", name, v)))
            }
        };
        unit("high_threshold", self.high_threshold)?;
        unit("medium_threshold", self.medium_threshold)?;
        unit("low_threshold", self.low_threshold)?;
        unit("agreement_bonus", self.agreement_bonus)?;
        unit("hallucination_threshold", self.hallucination_threshold)?;

        if !(self.low_threshold <= self.medium_threshold && self.medium_threshold <= self.high_threshold) {
            return Err(GatekeeperError::Config(format!(
                "Thresholds must satisfy low <= medium <= high (got {}, {}, {})",
                self.low_threshold, self.medium_threshold, self.high_threshold
            )));
        }

        for domain in Domain::ALL {
            if self.fallbacks.for_domain(domain).trim().is_empty() {
                return Err(GatekeeperError::Config(format!(
                    "Fallback message for domain '{}' is empty",
                    domain
                )));
            }
        }

        Ok(())
    }
}
