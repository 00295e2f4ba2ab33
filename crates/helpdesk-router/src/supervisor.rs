//! Query supervisor
//!
//! Entry point for one chat turn: redirect queries get a deep link, all
//! other queries are classified, answered by a specialist agent and passed
//! through the safety gate.

use crate::catalog::ResourceCatalog;
use crate::classifier::{Classification, QueryClassifier};
use crate::config::{ConfigError, RouterConfig};
use crate::deep_link::{DeepLink, DeepLinkResolver};
use crate::redirect::{format_redirect, RedirectDetector};
use crate::reply::format_answer;
use helpdesk_domain::{Citation, Domain, SpecialistAgent};
use helpdesk_gatekeeper::{GateDecision, RefusalReason, SafetyGate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned for malformed turns
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupervisorError {
    /// The query was empty or whitespace
    #[error("Query must not be empty")]
    EmptyQuery,
}

/// Reply for one chat turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "response_type", rename_all = "lowercase")]
pub enum SupervisorResponse {
    /// A link into an enterprise system
    Redirect {
        /// Chat-ready message
        message: String,
        /// The resolved link
        link: DeepLink,
    },

    /// A gated answer from a specialist agent
    Answer {
        /// Domain the query was routed to
        domain: Domain,
        /// Chat-ready message: the gated text with sources and follow-ups
        message: String,
        /// Gate decision, carrying the text to show
        decision: GateDecision,
        /// Supporting citations; empty when the answer was refused
        citations: Vec<Citation>,
    },
}

impl SupervisorResponse {
    /// Text to show the user
    pub fn message(&self) -> &str {
        match self {
            SupervisorResponse::Redirect { message, .. } => message,
            SupervisorResponse::Answer { message, .. } => message,
        }
    }
}

/// Routes queries and gates every generated answer
#[derive(Debug, Clone)]
pub struct Supervisor {
    classifier: QueryClassifier,
    redirects: RedirectDetector,
    links: DeepLinkResolver,
    gate: SafetyGate,
}

impl Supervisor {
    /// Assemble a supervisor from its parts
    pub fn new(
        classifier: QueryClassifier,
        redirects: RedirectDetector,
        links: DeepLinkResolver,
        gate: SafetyGate,
    ) -> Self {
        Self {
            classifier,
            redirects,
            links,
            gate,
        }
    }

    /// Build every component from a validated configuration
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        let catalog = match &config.resources {
            Some(resources) => ResourceCatalog::new(resources.clone())?,
            None => ResourceCatalog::builtin(),
        };

        Ok(Self::new(
            QueryClassifier::new(&config.classifier),
            RedirectDetector::new(&config.classifier),
            DeepLinkResolver::new(Arc::new(catalog), config.sso.clone()),
            SafetyGate::new(config.gate.clone())?,
        ))
    }

    /// Query classifier
    pub fn classifier(&self) -> &QueryClassifier {
        &self.classifier
    }

    /// Redirect detector
    pub fn redirects(&self) -> &RedirectDetector {
        &self.redirects
    }

    /// Deep-link resolver
    pub fn links(&self) -> &DeepLinkResolver {
        &self.links
    }

    /// Resource catalog
    pub fn catalog(&self) -> &ResourceCatalog {
        self.links.catalog()
    }

    /// Safety gate
    pub fn gate(&self) -> &SafetyGate {
        &self.gate
    }

    /// Classify a query
    pub fn classify(&self, query: &str) -> Classification {
        self.classifier.classify(query)
    }

    /// Handle one chat turn
    ///
    /// # Arguments
    ///
    /// * `query` - The user's message
    /// * `session_id` - Conversation id passed through to the agent
    /// * `domain_hint` - Domain chosen by the caller; overrides classification
    ///   and restricts deep-link matching to that domain's systems
    /// * `agent` - Answer generator for specialist queries
    ///
    /// # Errors
    ///
    /// Returns `SupervisorError::EmptyQuery` for blank queries. Agent failures
    /// are not errors: they produce a refusal carrying the domain fallback.
    pub fn handle<A>(
        &self,
        query: &str,
        session_id: &str,
        domain_hint: Option<Domain>,
        agent: &A,
    ) -> Result<SupervisorResponse, SupervisorError>
    where
        A: SpecialistAgent,
        A::Error: Display,
    {
        let query = query.trim();
        if query.is_empty() {
            return Err(SupervisorError::EmptyQuery);
        }

        let classification = self.classifier.classify(query);
        let domain = domain_hint.unwrap_or(classification.domain);

        if self.redirects.is_redirectional(query) {
            if let Some(link) = self.links.resolve(query, domain_hint) {
                info!("Redirecting {} query to {}", domain, link.resource_id);
                return Ok(SupervisorResponse::Redirect {
                    message: format_redirect(&link),
                    link,
                });
            }
        }

        let (decision, citations) = match agent.answer(domain, query, session_id) {
            Ok(answer) => {
                let decision = self.gate.validate_for(
                    &answer.response,
                    &answer.citations,
                    classification.confidence,
                    domain,
                );
                if decision.safe_to_respond {
                    (decision, answer.citations)
                } else {
                    (decision, Vec::new())
                }
            }
            Err(e) => {
                warn!("Specialist agent failed for {} query: {}", domain, e);
                (self.gate.refuse(domain, RefusalReason::AgentUnavailable), Vec::new())
            }
        };

        Ok(SupervisorResponse::Answer {
            domain,
            message: format_answer(&decision.response, &citations, domain),
            decision,
            citations,
        })
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(
            QueryClassifier::default(),
            RedirectDetector::default(),
            DeepLinkResolver::new(Arc::new(ResourceCatalog::builtin()), Default::default()),
            SafetyGate::default_config(),
        )
    }
}
