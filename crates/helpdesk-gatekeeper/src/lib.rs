//! Helpdesk Gatekeeper
//!
//! Decides whether a generated helpdesk answer is safe to show to a user.
//!
//! The Gatekeeper provides:
//! - Knowledge-base confidence from citation scores
//! - Confidence tiering (high / medium / low / insufficient)
//! - Hallucination-risk scoring
//! - PII detection and redaction
//! - Confidence disclaimers and domain-specific fallback messages
//!
//! Every decision fails closed: when in doubt the user gets a pre-approved
//! fallback message naming a human contact instead of the generated text.
//!
//! # Examples
//!
//! ```
//! use helpdesk_domain::{Citation, ConfidenceLevel};
//! use helpdesk_gatekeeper::SafetyGate;
//!
//! let gate = SafetyGate::default_config();
//! let citations = vec![Citation::scored(0.9), Citation::scored(0.85), Citation::scored(0.88)];
//!
//! let decision = gate.validate("Employees get 14–21 days annual leave.", &citations, 0.9, "hr");
//! assert!(decision.safe_to_respond);
//! assert_eq!(decision.confidence_level, ConfidenceLevel::High);
//! ```

#![warn(missing_docs)]

mod config;
mod error;

pub mod confidence;
pub mod disclaimer;
pub mod hallucination;
pub mod pii;
mod validator;

pub use config::{FallbackMessages, GateConfig};
pub use confidence::ConfidenceAssessment;
pub use error::GatekeeperError;
pub use pii::{PiiCategory, PiiFilter};
pub use validator::{GateDecision, GateRequest, RefusalReason, SafetyGate};
