//! Keyword-based domain classification

use crate::keywords::KeywordSet;
use helpdesk_domain::Domain;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classifier settings, the `[classifier]` table of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// HR keywords
    pub hr_keywords: Vec<String>,

    /// IT keywords
    pub it_keywords: Vec<String>,

    /// Finance keywords
    pub finance_keywords: Vec<String>,

    /// Confidence reported when a specialist keyword matched
    pub match_confidence: f64,

    /// Confidence reported for the general fallback
    pub default_confidence: f64,

    /// Phrases that mark a query as a request for a link
    pub redirect_patterns: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hr_keywords: strings(&[
                "leave", "vacation", "maternity", "paternity", "benefit", "insurance", "medical",
                "salary", "bonus", "hr", "employee", "onboarding",
            ]),
            it_keywords: strings(&[
                "password", "laptop", "vpn", "software", "install", "computer", "network", "login",
                "access", "it support", "troubleshoot",
            ]),
            finance_keywords: strings(&[
                "expense", "reimbursement", "procurement", "purchase", "invoice", "payment",
                "budget", "finance", "cost",
            ]),
            match_confidence: 0.9,
            default_confidence: 0.7,
            redirect_patterns: strings(&[
                "where", "how do i", "link to", "access", "portal", "system", "submit", "create",
                "request", "apply", "enroll", "view",
            ]),
        }
    }
}

/// Result of classifying a query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Routed domain
    pub domain: Domain,
    /// Routing confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// Routes queries to a specialist domain by keyword
///
/// Domains are tried in the fixed order HR, IT, Finance; the first with a
/// keyword hit wins.
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    rules: Vec<(Domain, KeywordSet)>,
    match_confidence: f64,
    default_confidence: f64,
}

impl QueryClassifier {
    /// Build a classifier from settings
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            rules: vec![
                (Domain::Hr, KeywordSet::new(&config.hr_keywords)),
                (Domain::It, KeywordSet::new(&config.it_keywords)),
                (Domain::Finance, KeywordSet::new(&config.finance_keywords)),
            ],
            match_confidence: config.match_confidence,
            default_confidence: config.default_confidence,
        }
    }

    /// Classify a query
    pub fn classify(&self, query: &str) -> Classification {
        let classification = self
            .rules
            .iter()
            .find(|(_, keywords)| keywords.matches_any(query))
            .map(|(domain, _)| Classification {
                domain: *domain,
                confidence: self.match_confidence,
            })
            .unwrap_or(Classification {
                domain: Domain::General,
                confidence: self.default_confidence,
            });

        debug!(
            "Classified query as {} ({:.2})",
            classification.domain, classification.confidence
        );
        classification
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialist_domains() {
        let classifier = QueryClassifier::default();

        let hr = classifier.classify("How many days of annual leave do I get?");
        assert_eq!(hr.domain, Domain::Hr);
        assert_eq!(hr.confidence, 0.9);

        assert_eq!(classifier.classify("My laptop won't boot").domain, Domain::It);
        assert_eq!(classifier.classify("Where do I send an invoice?").domain, Domain::Finance);
    }

    #[test]
    fn test_general_fallback() {
        let classifier = QueryClassifier::default();
        let general = classifier.classify("What time does the cafeteria open?");
        assert_eq!(general.domain, Domain::General);
        assert_eq!(general.confidence, 0.7);
    }

    #[test]
    fn test_hr_wins_over_it() {
        let classifier = QueryClassifier::default();
        // "login" is IT, "employee" is HR; HR is checked first
        let result = classifier.classify("employee portal login");
        assert_eq!(result.domain, Domain::Hr);
    }

    #[test]
    fn test_short_keyword_needs_word_start() {
        let classifier = QueryClassifier::default();
        assert_eq!(classifier.classify("walk me through the cafeteria menu").domain, Domain::General);
        assert_eq!(classifier.classify("Who is my HR partner?").domain, Domain::Hr);
    }

    #[test]
    fn test_custom_keywords() {
        let config = ClassifierConfig {
            it_keywords: vec!["printer".to_string()],
            match_confidence: 0.85,
            ..ClassifierConfig::default()
        };
        let classifier = QueryClassifier::new(&config);
        let result = classifier.classify("The printer is jammed");
        assert_eq!(result.domain, Domain::It);
        assert_eq!(result.confidence, 0.85);
        assert_eq!(classifier.classify("My laptop is slow").domain, Domain::General);
    }
}
