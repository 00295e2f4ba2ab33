//! Trait definitions for external interactions
//!
//! The answer generator is an external retrieval-augmented agent service.
//! Implementations live outside the domain layer.

use crate::{Citation, Domain};
use serde::{Deserialize, Serialize};

/// Draft answer returned by a specialist agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentAnswer {
    /// Generated response text
    pub response: String,

    /// Citations the agent retrieved while answering, best first
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl AgentAnswer {
    /// Create an answer
    pub fn new(response: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            response: response.into(),
            citations,
        }
    }
}

/// Trait for specialist answer generators
///
/// One agent backend serves every domain; the domain tells it which
/// knowledge base to consult.
pub trait SpecialistAgent {
    /// Error type for agent invocations
    type Error;

    /// Draft an answer to `query` from the knowledge source of `domain`
    fn answer(&self, domain: Domain, query: &str, session_id: &str) -> Result<AgentAnswer, Self::Error>;
}
