//! Response validation logic

use crate::confidence::{self, ConfidenceAssessment};
use crate::disclaimer::add_disclaimer;
use crate::hallucination::hallucination_score;
use crate::pii::{PiiCategory, PiiFilter};
use crate::{GateConfig, GatekeeperError};
use helpdesk_domain::{Citation, ConfidenceLevel, Domain};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// Why an answer was replaced by a fallback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefusalReason {
    /// Combined confidence fell below the low threshold
    #[serde(rename = "Low confidence")]
    LowConfidence,

    /// Hallucination score exceeded the threshold
    #[serde(rename = "High hallucination risk")]
    HallucinationRisk,

    /// The answer generator could not be reached
    #[serde(rename = "Agent unavailable")]
    AgentUnavailable,
}

impl RefusalReason {
    /// Human-readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            RefusalReason::LowConfidence => "Low confidence",
            RefusalReason::HallucinationRisk => "High hallucination risk",
            RefusalReason::AgentUnavailable => "Agent unavailable",
        }
    }
}

impl fmt::Display for RefusalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one candidate answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    /// Whether `response` is the (possibly modified) generated answer
    pub safe_to_respond: bool,

    /// Text to show: the sanitized answer with any disclaimer, or a fallback
    pub response: String,

    /// Knowledge-base confidence from the citations
    pub confidence: f64,

    /// Average of knowledge-base and query confidence
    pub combined_confidence: f64,

    /// Confidence tier
    pub confidence_level: ConfidenceLevel,

    /// PII categories found in the answer (shown answers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pii_detected: Option<Vec<PiiCategory>>,

    /// Hallucination risk of the answer (shown answers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hallucination_score: Option<f64>,

    /// Refusal reason (refused answers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RefusalReason>,
}

/// Serializable validation input, as received over HTTP or from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRequest {
    /// Candidate answer text
    pub response: String,

    /// Supporting citations, best first
    #[serde(default)]
    pub citations: Vec<Citation>,

    /// Classifier confidence for the routed domain
    pub query_confidence: f64,

    /// Domain label; unknown labels use the general fallback
    #[serde(default = "default_domain")]
    pub domain: String,
}

fn default_domain() -> String {
    Domain::General.as_str().to_string()
}

/// The safety gate validates generated answers before they reach the user
#[derive(Debug, Clone)]
pub struct SafetyGate {
    config: GateConfig,
    pii: PiiFilter,
}

impl SafetyGate {
    /// Create a gate from a configuration, rejecting inconsistent settings
    pub fn new(config: GateConfig) -> Result<Self, GatekeeperError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a gate with default configuration
    pub fn default_config() -> Self {
        Self::build(GateConfig::default())
    }

    fn build(config: GateConfig) -> Self {
        let pii = PiiFilter::from_config(&config);
        Self { config, pii }
    }

    /// Active configuration
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Fallback message for a domain
    pub fn fallback_for(&self, domain: Domain) -> &str {
        self.config.fallbacks.for_domain(domain)
    }

    /// Validate a request received over the wire
    pub fn evaluate(&self, request: &GateRequest) -> GateDecision {
        self.validate(
            &request.response,
            &request.citations,
            request.query_confidence,
            &request.domain,
        )
    }

    /// Validate a candidate answer for a domain given by label
    ///
    /// Unknown domain labels are routed to the general fallback.
    pub fn validate(
        &self,
        response: &str,
        citations: &[Citation],
        query_confidence: f64,
        domain: &str,
    ) -> GateDecision {
        self.validate_for(response, citations, query_confidence, Domain::parse_or_general(domain))
    }

    /// Validate a candidate answer
    ///
    /// # Arguments
    ///
    /// * `response` - The generated answer text
    /// * `citations` - Supporting citations, best first
    /// * `query_confidence` - Classifier confidence, clamped to [0.0, 1.0]
    /// * `domain` - Domain whose fallback is used on refusal
    ///
    /// # Returns
    ///
    /// Either the sanitized answer (with a disclaimer for medium and low
    /// confidence) or the domain's fallback message.
    pub fn validate_for(
        &self,
        response: &str,
        citations: &[Citation],
        query_confidence: f64,
        domain: Domain,
    ) -> GateDecision {
        // 1. Knowledge-base confidence
        let kb_confidence = confidence::kb_confidence(citations, &self.config);

        // 2. Respond or fall back
        let assessment = confidence::assess(kb_confidence, query_confidence, &self.config);
        debug!(
            "Confidence for {} answer: kb={:.2} query={:.2} combined={:.2} level={}",
            domain,
            assessment.kb_confidence,
            assessment.query_confidence,
            assessment.combined_confidence,
            assessment.confidence_level
        );

        if !assessment.confidence_level.allows_response() {
            info!(
                "Refusing {} answer: combined confidence {:.2} below {:.2}",
                domain, assessment.combined_confidence, self.config.low_threshold
            );
            return self.refusal(domain, &assessment, RefusalReason::LowConfidence);
        }

        // 3. Hallucination override
        let risk = hallucination_score(response, citations);
        if risk > self.config.hallucination_threshold {
            info!(
                "Refusing {} answer: hallucination score {:.2} above {:.2}",
                domain, risk, self.config.hallucination_threshold
            );
            let refused = ConfidenceAssessment {
                confidence_level: ConfidenceLevel::Insufficient,
                ..assessment
            };
            return self.refusal(domain, &refused, RefusalReason::HallucinationRisk);
        }

        // 4. PII: detect for telemetry, sanitize regardless
        let pii_detected = self.pii.detect(response);
        if !pii_detected.is_empty() {
            let categories: Vec<&str> = pii_detected.iter().map(|c| c.as_str()).collect();
            warn!("PII detected in {} answer: {}", domain, categories.join(", "));
        }
        let sanitized = self.pii.sanitize(response);

        // 5. Disclaimer
        let response = add_disclaimer(&sanitized, assessment.confidence_level);

        GateDecision {
            safe_to_respond: true,
            response,
            confidence: assessment.kb_confidence,
            combined_confidence: assessment.combined_confidence,
            confidence_level: assessment.confidence_level,
            pii_detected: Some(pii_detected),
            hallucination_score: Some(risk),
            reason: None,
        }
    }

    /// Refusal decision carrying the domain's fallback message
    ///
    /// Exposed for callers that must fail closed before an answer exists.
    pub fn refuse(&self, domain: Domain, reason: RefusalReason) -> GateDecision {
        let assessment = confidence::assess(0.0, 0.0, &self.config);
        self.refusal(domain, &assessment, reason)
    }

    fn refusal(
        &self,
        domain: Domain,
        assessment: &ConfidenceAssessment,
        reason: RefusalReason,
    ) -> GateDecision {
        GateDecision {
            safe_to_respond: false,
            response: self.fallback_for(domain).to_string(),
            confidence: assessment.kb_confidence,
            combined_confidence: assessment.combined_confidence,
            confidence_level: assessment.confidence_level,
            pii_detected: None,
            hallucination_score: None,
            reason: Some(reason),
        }
    }
}

impl Default for SafetyGate {
    fn default() -> Self {
        Self::default_config()
    }
}
